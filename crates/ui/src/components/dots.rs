use dioxus::prelude::*;

/// Counting dots under a choice button.
#[component]
pub fn DotGroup(number: u32) -> Element {
    let dots = (0..number).map(|i| rsx! { span { key: "{i}", class: "dot" } });

    rsx! {
        div { class: "dot-group", {dots} }
    }
}
