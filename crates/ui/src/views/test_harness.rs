use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use mathpath_core::model::GameSettings;

use crate::context::{AppContext, build_app_context};
use crate::i18n::Language;
use crate::views::{HomeView, PlayView};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Play(u32),
}

#[derive(Props, Clone, Copy, PartialEq)]
struct ViewHarnessProps {
    view: ViewKind,
    language: Language,
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    // Same context wiring as `App`, minus window chrome.
    use_context_provider(|| build_app_context(props.language, GameSettings::default()));
    let ctx = use_context::<AppContext>();
    use_context_provider(|| Signal::new(ctx.language()));
    use_context_provider(|| Signal::new(ctx.settings()));
    use_context_provider(|| props.view);

    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Play(range) => rsx! { PlayView { range } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, language: Language) -> ViewHarness {
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { view, language });
    ViewHarness { dom }
}
