use std::error::Error;

mod app;
mod config;
mod game;
mod score;
mod ui;
pub use config::{
    BEST_SCORE_FILE, BOARD_SIZE, CELL_W, MIN_PANE_WIDTH, PLAY_H, PLAY_W, POLL_MS, TICK_MS,
};
pub use game::{Game, Heading, Point};

fn main() -> Result<(), Box<dyn Error>> {
    app::run()
}
