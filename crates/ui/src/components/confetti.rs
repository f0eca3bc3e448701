use dioxus::prelude::*;

const COLORS: [&str; 4] = ["#FFD700", "#FF6347", "#4169E1", "#32CD32"];
const PIECES: usize = 30;

/// Full-screen burst of falling pieces after a correct answer.
#[component]
pub fn ConfettiOverlay() -> Element {
    // Index-hashed spread keeps the layout stable across renders.
    let pieces = (0..PIECES).map(|i| {
        let color = COLORS[i % COLORS.len()];
        let left = (i * 37 + 11) % 100;
        let delay_ms = (i * 53) % 500;
        let duration_ms = 2000 + (i * 97) % 2000;
        rsx! {
            div {
                key: "{i}",
                class: "confetti-piece",
                style: "background-color: {color}; left: {left}%; animation-delay: {delay_ms}ms; animation-duration: {duration_ms}ms;",
            }
        }
    });

    rsx! {
        div { class: "confetti-overlay", aria_hidden: "true", {pieces} }
    }
}
