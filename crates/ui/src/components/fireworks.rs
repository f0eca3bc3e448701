use dioxus::prelude::*;

const PARTICLES: usize = 16;

/// Launch sites for the completion fireworks: (left %, top %, color,
/// delay in seconds).
const SHELLS: [(u32, u32, &str, f32); 7] = [
    (20, 30, "#FFD700", 0.0),
    (80, 25, "#FF6347", 0.5),
    (50, 40, "#4169E1", 1.0),
    (30, 60, "#32CD32", 0.2),
    (70, 70, "#FF00FF", 0.7),
    (15, 55, "#00FFFF", 1.2),
    (85, 65, "#FFA500", 1.5),
];

/// Repeating fireworks behind the path-complete card.
#[component]
pub fn FireworksDisplay() -> Element {
    let shells = SHELLS.iter().enumerate().map(|(i, &(left, top, color, delay))| {
        rsx! { Firework { key: "{i}", left, top, color, delay } }
    });

    rsx! {
        div { class: "fireworks-overlay", aria_hidden: "true", {shells} }
    }
}

/// One explosion: a ring of particles thrown outward from the site.
#[component]
fn Firework(left: u32, top: u32, color: &'static str, delay: f32) -> Element {
    let particles = (0..PARTICLES).map(|i| {
        let angle = (i as f32) / (PARTICLES as f32) * std::f32::consts::TAU;
        // Index-hashed distance varies the ring without a RNG.
        let dist = 60.0 + ((i * 31) % 60) as f32;
        let tx = angle.cos() * dist;
        let ty = angle.sin() * dist;
        rsx! {
            div {
                key: "{i}",
                class: "firework-particle",
                style: "background-color: {color}; box-shadow: 0 0 8px {color}; --tx: {tx}px; --ty: {ty}px; animation-delay: {delay}s;",
            }
        }
    });

    rsx! {
        div { class: "firework", style: "left: {left}%; top: {top}%;", {particles} }
    }
}
