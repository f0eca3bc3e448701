mod confetti;
mod dots;
mod fireworks;
mod hand;

pub use confetti::ConfettiOverlay;
pub use dots::DotGroup;
pub use fireworks::FireworksDisplay;
pub use hand::{HandGroup, HandSvg};
