use dioxus::prelude::*;

use crate::vm::hand_counts;

const SKIN: &str = "#fcd3b1";
const OUTLINE: &str = "#e0a67b";

/// A number illustrated as counting hands: full five-finger hands plus one
/// hand showing the remainder.
#[component]
pub fn HandGroup(number: u32) -> Element {
    let hands = hand_counts(number)
        .into_iter()
        .enumerate()
        .map(|(i, fingers)| rsx! { HandSvg { key: "{i}", fingers } });

    rsx! {
        div { class: "hand-group", {hands} }
    }
}

/// One stylized hand with `fingers` raised, thumb last.
#[component]
pub fn HandSvg(fingers: u8) -> Element {
    rsx! {
        svg { class: "hand", view_box: "0 0 120 120",
            path {
                d: "M 20 60 Q 20 110 60 110 Q 100 110 100 60 L 100 50 Q 60 50 20 50 Z",
                fill: SKIN,
                stroke: OUTLINE,
                stroke_width: "2",
            }
            g { opacity: "0.4",
                circle { cx: "30", cy: "55", r: "8", fill: SKIN }
                circle { cx: "50", cy: "50", r: "8", fill: SKIN }
                circle { cx: "70", cy: "52", r: "8", fill: SKIN }
                circle { cx: "90", cy: "60", r: "8", fill: SKIN }
            }
            if fingers >= 4 {
                rect {
                    x: "88", y: "25", width: "14", height: "40", rx: "7",
                    fill: SKIN, stroke: OUTLINE,
                    transform: "rotate(20 95 65)",
                }
            }
            if fingers >= 3 {
                rect {
                    x: "68", y: "10", width: "15", height: "50", rx: "7.5",
                    fill: SKIN, stroke: OUTLINE,
                    transform: "rotate(8 75 60)",
                }
            }
            if fingers >= 2 {
                rect {
                    x: "43", y: "5", width: "16", height: "55", rx: "8",
                    fill: SKIN, stroke: OUTLINE,
                }
            }
            if fingers >= 1 {
                rect {
                    x: "20", y: "15", width: "15", height: "50", rx: "7.5",
                    fill: SKIN, stroke: OUTLINE,
                    transform: "rotate(-10 27 60)",
                }
            }
            if fingers >= 5 {
                ellipse {
                    cx: "95", cy: "70", rx: "20", ry: "10",
                    fill: SKIN, stroke: OUTLINE,
                    transform: "rotate(-30 95 70)",
                }
            }
        }
    }
}
