// Shared game/UI constants.
pub const BOARD_SIZE: usize = 10;
pub const CELL_W: usize = 2; // render each cell as two characters wide
pub const PLAY_W: usize = BOARD_SIZE * CELL_W + 2; // inner width plus side walls
pub const PLAY_H: usize = BOARD_SIZE + 2; // inner height plus ceiling/floor
// Minimal pane width to fit the playfield, sidebar and cabinet border.
pub const MIN_PANE_WIDTH: u16 = (PLAY_W as u16) + 24 + 2;
pub const TICK_MS: u64 = 500;
pub const POLL_MS: u64 = 50;
pub const BEST_SCORE_FILE: &str = ".serpent_best_score";
