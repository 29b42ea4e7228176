pub mod input;
pub mod movement;
pub mod opponent;
pub mod physics;

pub use input::*;
pub use movement::*;
pub use opponent::*;
pub use physics::*;
