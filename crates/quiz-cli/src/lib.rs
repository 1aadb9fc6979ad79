//! CLI library components for the quiz player.

pub mod inspect;
pub mod logging;
pub mod play;
pub mod render;
