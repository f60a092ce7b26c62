use std::error::Error;
use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::score::ScoreStore;
use crate::ui::draw_game;
use crate::{Game, Heading};
use crate::{POLL_MS, TICK_MS};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut())
}

fn run_loop(terminal: &mut Term) -> Result<(), Box<dyn Error>> {
    let store = ScoreStore::new(ScoreStore::default_path());
    let mut game = Game::new(store.get());
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw_game(frame, &game))?;

        if event::poll(Duration::from_millis(POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    break;
                }
                handle_input(key.code, &mut game);
            }
        }

        // Ticking stops once the game is over; only restart resumes it.
        if !game.game_over && last_tick.elapsed() >= Duration::from_millis(TICK_MS) {
            game.tick();
            last_tick = Instant::now();
        }

        if game.game_over {
            if let Some(best) = game.finish() {
                let _ = store.set(best);
            }
        }
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn handle_input(code: KeyCode, game: &mut Game) {
    match code {
        KeyCode::Up => game.set_heading(Heading::Up),
        KeyCode::Down => game.set_heading(Heading::Down),
        KeyCode::Left => game.set_heading(Heading::Left),
        KeyCode::Right => game.set_heading(Heading::Right),
        KeyCode::Char('r') => game.reset(),
        _ => {}
    }
}
