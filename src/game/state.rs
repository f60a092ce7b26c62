use std::collections::VecDeque;

use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};

use crate::game::{Heading, Point};
use crate::BOARD_SIZE;

/// Authoritative game state, advanced once per tick by the driving loop.
///
/// Generic over the random source so apple placement can be seeded in tests;
/// the default is the thread-local RNG.
pub struct Game<R = ThreadRng> {
    rng: R,
    pub snake: VecDeque<Point>,
    pub heading: Heading,
    pub apple: Option<Point>,
    pub score: u64,
    pub best_score: u64,
    pub game_over: bool,
    best_recorded: bool,
}

impl Game<ThreadRng> {
    pub fn new(best_score: u64) -> Self {
        Game::new_with_rng(best_score, thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn new_with_rng(best_score: u64, rng: R) -> Game<R> {
        let mut game = Game {
            rng,
            snake: VecDeque::new(),
            heading: Heading::Right,
            apple: None,
            score: 0,
            best_score,
            game_over: false,
            best_recorded: false,
        };
        game.reset();
        game
    }

    /// Restart: fresh snake, heading and apple; the best score carries over.
    pub fn reset(&mut self) {
        let mid = (BOARD_SIZE / 2) as i32;
        self.snake = VecDeque::from([Point::new(mid, mid), Point::new(mid - 1, mid)]);
        self.heading = Heading::Right;
        self.score = 0;
        self.game_over = false;
        self.best_recorded = false;
        self.apple = self.spawn_apple();
    }

    /// Advance the snake one cell along the current heading.
    pub fn tick(&mut self) {
        if self.game_over {
            return;
        }
        let Some(&head) = self.snake.front() else {
            return;
        };
        let new_head = head.step(self.heading);
        // Collision set: the pre-move body minus the original head. The cell
        // the tail is about to vacate still counts.
        let hits_body = self.snake.iter().skip(1).any(|&seg| seg == new_head);

        if self.apple == Some(new_head) {
            self.snake.push_front(new_head);
            self.score += 1;
            self.apple = self.spawn_apple();
            if self.apple.is_none() {
                // Snake fills the board: nowhere left to place an apple.
                self.game_over = true;
                return;
            }
        } else {
            self.snake.pop_back();
            self.snake.push_front(new_head);
        }

        if !new_head.in_bounds(BOARD_SIZE) || hits_body {
            self.game_over = true;
        }
    }

    /// Heading requests reverse-checked against the current heading, so a
    /// request arriving between ticks applies to exactly the next tick.
    pub fn set_heading(&mut self, requested: Heading) {
        if self.game_over || requested == self.heading.opposite() {
            return;
        }
        self.heading = requested;
    }

    /// One-time best-score resolution at game over. Returns the new best
    /// score if it should be persisted; repeat calls are no-ops.
    pub fn finish(&mut self) -> Option<u64> {
        if !self.game_over || self.best_recorded {
            return None;
        }
        self.best_recorded = true;
        if self.score > self.best_score {
            self.best_score = self.score;
            Some(self.best_score)
        } else {
            None
        }
    }

    fn spawn_apple(&mut self) -> Option<Point> {
        if self.snake.len() >= BOARD_SIZE * BOARD_SIZE {
            return None;
        }
        loop {
            let candidate = Point::new(
                self.rng.gen_range(0..BOARD_SIZE as i32),
                self.rng.gen_range(0..BOARD_SIZE as i32),
            );
            if !self.snake.contains(&candidate) {
                return Some(candidate);
            }
        }
    }
}
