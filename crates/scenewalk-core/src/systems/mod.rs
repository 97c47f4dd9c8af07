//! Systems - per-tick logic that operates on components

mod movement;
mod wandering;
mod zones;

pub use movement::*;
pub use wandering::*;
pub use zones::*;
