use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    // Live language and settings, seeded from the launch configuration.
    use_context_provider(|| Signal::new(ctx.language()));
    use_context_provider(|| Signal::new(ctx.settings()));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title; screens render their own headings.
        document::Title { "Math Kids" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
