pub mod grid;
pub mod state;

pub use grid::{Heading, Point};
pub use state::Game;
