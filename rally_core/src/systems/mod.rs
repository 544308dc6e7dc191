pub mod collision;
pub mod movement;
pub mod paddles;
pub mod scoring;

pub use collision::*;
pub use movement::*;
pub use paddles::*;
pub use scoring::*;
