mod hands;
mod play_vm;

pub use hands::hand_counts;
pub use play_vm::{PlayPhase, PlayVm};
