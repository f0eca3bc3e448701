use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use engine::NextAction;
use mathpath_core::Clock;
use mathpath_core::model::{GameSettings, InputMode, Level, PathRange};

use crate::components::{ConfettiOverlay, DotGroup, FireworksDisplay, HandGroup};
use crate::i18n::{Language, strings};
use crate::routes::Route;
use crate::vm::{PlayPhase, PlayVm};

/// Pacing for the feedback-driven transitions.
const WRONG_CUE_CLEAR: Duration = Duration::from_millis(1000);
const NEXT_QUESTION_DELAY: Duration = Duration::from_millis(1500);
const LEVEL_RESOLVE_DELAY: Duration = Duration::from_millis(1000);
const LEVEL_BANNER_DURATION: Duration = Duration::from_millis(2000);

#[component]
pub fn PlayView(range: u32) -> Element {
    let navigator = use_navigator();
    let language = use_context::<Signal<Language>>();
    let settings = use_context::<Signal<GameSettings>>();
    let t = strings(language());

    // `None` when the route carries a range off the ladder.
    let path = PathRange::new(range).ok();
    let vm = use_signal(|| path.map(|path| PlayVm::start(path, &Clock::default_clock())));
    let mut answer_text = use_signal(String::new);

    let dispatch = use_callback(move |submitted: u32| {
        let mut vm = vm;
        let mut answer_text = answer_text;
        let Some(action) = vm.write().as_mut().map(|play| play.submit(submitted)) else {
            return;
        };
        let Some(token) = vm.read().as_ref().map(PlayVm::token) else {
            return;
        };

        // Every scheduled step re-checks the token it was minted with, so
        // a timer that outlives a restart or path continuation is a no-op.
        match action {
            NextAction::ShowIncorrect => {
                spawn(async move {
                    tokio::time::sleep(WRONG_CUE_CLEAR).await;
                    let mut guard = vm.write();
                    if let Some(play) = guard.as_mut() {
                        if play.token() == token {
                            play.clear_wrong_cue();
                        }
                    }
                });
            }
            NextAction::NextQuestion => {
                answer_text.set(String::new());
                spawn(async move {
                    tokio::time::sleep(NEXT_QUESTION_DELAY).await;
                    let mut guard = vm.write();
                    if let Some(play) = guard.as_mut() {
                        if play.token() == token {
                            play.next_question();
                        }
                    }
                });
            }
            NextAction::LevelUp => {
                answer_text.set(String::new());
                spawn(async move {
                    tokio::time::sleep(LEVEL_RESOLVE_DELAY).await;
                    {
                        let mut guard = vm.write();
                        match guard.as_mut() {
                            Some(play) if play.token() == token => play.level_up(),
                            _ => return,
                        }
                    }
                    tokio::time::sleep(LEVEL_BANNER_DURATION).await;
                    let mut guard = vm.write();
                    if let Some(play) = guard.as_mut() {
                        if play.token() == token {
                            play.finish_banner();
                        }
                    }
                });
            }
            NextAction::PathComplete => {
                answer_text.set(String::new());
                spawn(async move {
                    tokio::time::sleep(LEVEL_RESOLVE_DELAY).await;
                    let mut guard = vm.write();
                    if let Some(play) = guard.as_mut() {
                        if play.token() == token {
                            play.complete();
                        }
                    }
                });
            }
        }
    });

    let guard = vm.read();
    let Some(play) = guard.as_ref() else {
        return rsx! {
            div { class: "page play-page",
                div { class: "play-error",
                    p { "Unknown path." }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(Route::Home {});
                        },
                        "{t.back_menu}"
                    }
                }
            }
        };
    };

    let phase = play.phase();
    let wrong = play.wrong_cue();
    let level = play.session().level().value();
    let max_level = Level::MAX.value();
    let score = play.session().score();
    let progress = play.progress_percent();
    let operand_a = play.question().operand_a();
    let operand_b = play.question().operand_b();
    let choices = *play.question().choices();
    let path_range = play.session().range();
    let next_range = path_range.next().value();
    let mastered = t.mastered_text(path_range);
    drop(guard);

    // Answering is locked while the correct-answer celebration runs.
    let locked = phase == PlayPhase::Celebrating;

    let choice_buttons = choices.iter().enumerate().map(|(i, &choice)| {
        rsx! {
            button {
                key: "{i}",
                class: "choice-button",
                r#type: "button",
                disabled: locked,
                onclick: move |_| dispatch.call(choice),
                span { class: "choice-button__value", "{choice}" }
                if settings().show_dots() {
                    DotGroup { number: choice }
                }
            }
        }
    });

    rsx! {
        div { class: "page play-page",
            if phase == PlayPhase::Complete {
                FireworksDisplay {}
                div { class: "complete-card",
                    div { class: "complete-card__trophy", "🏆" }
                    h2 { class: "complete-card__title", "{t.path_complete}" }
                    p { class: "complete-card__subtitle", "{mastered}" }
                    div { class: "complete-card__actions",
                        button {
                            class: "btn btn-continue",
                            r#type: "button",
                            onclick: move |_| {
                                let mut vm = vm;
                                let mut answer_text = answer_text;
                                if let Some(play) = vm.write().as_mut() {
                                    play.continue_path(&Clock::default_clock());
                                }
                                answer_text.set(String::new());
                            },
                            "{t.continue_to} {next_range} →"
                        }
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| {
                                let _ = navigator.push(Route::Home {});
                            },
                            "{t.back_menu}"
                        }
                    }
                }
            } else if phase == PlayPhase::LevelBanner {
                div { class: "level-banner",
                    div { class: "level-banner__level", "{t.level} {level}!" }
                    div { class: "level-banner__note", "{t.keep_going}" }
                }
            } else {
                if phase == PlayPhase::Celebrating {
                    ConfettiOverlay {}
                }
                div { class: "play-topbar",
                    button {
                        class: "home-btn",
                        r#type: "button",
                        aria_label: "{t.back_menu}",
                        onclick: move |_| {
                            let _ = navigator.push(Route::Home {});
                        },
                        "⌂"
                    }
                    div { class: "level-meter",
                        div { class: "level-meter__label", "{t.level} {level} / {max_level}" }
                        div { class: "progress-track",
                            div { class: "progress-fill", style: "width: {progress}%;" }
                        }
                    }
                    div { class: "score-badge", aria_label: "{t.score}", "★ {score}" }
                }
                main { class: "question-card",
                    div { class: "question-card__operands",
                        div { class: "operand-block",
                            div { class: "operand", "{operand_a}" }
                            if settings().show_fingers() {
                                HandGroup { number: operand_a }
                            }
                        }
                        div { class: "plus-sign", "+" }
                        div { class: "operand-block",
                            div { class: "operand", "{operand_b}" }
                            if settings().show_fingers() {
                                HandGroup { number: operand_b }
                            }
                        }
                    }
                    div { class: "feedback-row",
                        if phase == PlayPhase::Celebrating {
                            div { class: "feedback feedback--correct", "★ {t.correct}" }
                        }
                        if wrong {
                            div { class: "feedback feedback--wrong", "{t.try_again}" }
                        }
                    }
                    match settings().input_mode() {
                        InputMode::Buttons => rsx! {
                            div { class: "choice-grid", {choice_buttons} }
                        },
                        InputMode::Typing => rsx! {
                            form {
                                class: "answer-form",
                                onsubmit: move |evt: FormEvent| {
                                    evt.prevent_default();
                                    if let Ok(value) = answer_text().parse::<u32>() {
                                        dispatch.call(value);
                                    }
                                },
                                input {
                                    class: "answer-input",
                                    r#type: "text",
                                    inputmode: "numeric",
                                    placeholder: "?",
                                    value: "{answer_text()}",
                                    disabled: locked,
                                    autofocus: true,
                                    oninput: move |evt| {
                                        // Digits only; anything else never reaches the engine.
                                        let digits: String =
                                            evt.value().chars().filter(char::is_ascii_digit).collect();
                                        answer_text.set(digits);
                                    },
                                }
                                button {
                                    class: "btn btn-primary answer-check",
                                    r#type: "submit",
                                    disabled: locked || answer_text().is_empty(),
                                    "{t.check}"
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}
