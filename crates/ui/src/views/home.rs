use dioxus::prelude::*;
use dioxus_router::use_navigator;

use mathpath_core::model::{GameSettings, InputMode, PathRange};

use crate::i18n::{Language, strings};
use crate::routes::Route;

fn toggle_class(active: bool) -> &'static str {
    if active { "toggle toggle--active" } else { "toggle" }
}

#[component]
pub fn HomeView() -> Element {
    let navigator = use_navigator();
    let mut language = use_context::<Signal<Language>>();
    let mut settings = use_context::<Signal<GameSettings>>();
    let t = strings(language());
    let other_code = language().toggled().code();

    let path_cards = PathRange::starting_paths().into_iter().map(|range| {
        let value = range.value();
        rsx! {
            button {
                key: "{value}",
                class: "path-card",
                onclick: move |_| {
                    let _ = navigator.push(Route::Play { range: value });
                },
                div { class: "path-card__badge", "{value}" }
                div { class: "path-card__text",
                    div { class: "path-card__name", "{t.numbers} 0 - {value}" }
                    div { class: "path-card__meta", "10 {t.levels}" }
                }
                span { class: "path-card__arrow", "→" }
            }
        }
    });

    rsx! {
        div { class: "page menu-page",
            div { class: "menu-card",
                header { class: "menu-card__header",
                    button {
                        class: "lang-toggle",
                        r#type: "button",
                        aria_label: "Switch Language",
                        onclick: move |_| {
                            let next = language().toggled();
                            language.set(next);
                        },
                        "{other_code}"
                    }
                    h1 { class: "menu-card__title", "{t.title}" }
                    p { class: "menu-card__subtitle", "{t.subtitle}" }
                }
                div { class: "menu-card__body",
                    section {
                        label { class: "menu-label", "{t.choose_path}" }
                        div { class: "path-list", {path_cards} }
                    }
                    section { class: "customization",
                        label { class: "menu-label", "{t.customization}" }
                        div { class: "toggle-row",
                            button {
                                class: toggle_class(settings().input_mode() == InputMode::Buttons),
                                r#type: "button",
                                onclick: move |_| {
                                    let next = settings().with_input_mode(InputMode::Buttons);
                                    settings.set(next);
                                },
                                "{t.buttons}"
                            }
                            button {
                                class: toggle_class(settings().input_mode() == InputMode::Typing),
                                r#type: "button",
                                onclick: move |_| {
                                    let next = settings().with_input_mode(InputMode::Typing);
                                    settings.set(next);
                                },
                                "{t.write}"
                            }
                        }
                        div { class: "toggle-row",
                            button {
                                class: toggle_class(settings().show_fingers()),
                                r#type: "button",
                                onclick: move |_| {
                                    let next = settings().with_fingers_toggled();
                                    settings.set(next);
                                },
                                if settings().show_fingers() { "{t.fingers_on}" } else { "{t.fingers_off}" }
                            }
                            button {
                                class: toggle_class(settings().show_dots()),
                                r#type: "button",
                                onclick: move |_| {
                                    let next = settings().with_dots_toggled();
                                    settings.set(next);
                                },
                                if settings().show_dots() { "{t.dots_on}" } else { "{t.dots_off}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
