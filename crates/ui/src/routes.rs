use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{HomeView, PlayView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/play/:range", PlayView)] Play { range: u32 },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app-shell",
            Backdrop {}
            main { class: "stage",
                Outlet::<Route> {}
            }
        }
    }
}

/// Soft background behind every screen: blurred color blobs plus slowly
/// drifting numerals and symbols.
#[component]
fn Backdrop() -> Element {
    const SYMBOLS: [&str; 11] = ["1", "2", "3", "4", "5", "+", "=", "?", "★", "7", "8"];

    // Index-hashed spread keeps the layout stable across renders.
    let drifters = (0..12).map(|i| {
        let left = (i * 83 + 7) % 100;
        let size = 2 + i % 4;
        let duration = 20 + (i * 7) % 15;
        let delay = (i * 5) % 30;
        let symbol = SYMBOLS[i % SYMBOLS.len()];
        rsx! {
            div {
                key: "{i}",
                class: "backdrop-symbol",
                style: "left: {left}%; font-size: {size}rem; animation-duration: {duration}s; animation-delay: -{delay}s;",
                "{symbol}"
            }
        }
    });

    rsx! {
        div { class: "backdrop", aria_hidden: "true",
            div { class: "backdrop-blob backdrop-blob--violet" }
            div { class: "backdrop-blob backdrop-blob--blue" }
            div { class: "backdrop-blob backdrop-blob--gold" }
            {drifters}
        }
    }
}
