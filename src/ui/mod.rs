use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::{Game, Point, CELL_W, MIN_PANE_WIDTH, PLAY_H, PLAY_W};

pub fn draw_game(frame: &mut Frame, game: &Game) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH {
        let msg = Paragraph::new(format!("RESIZE PANE (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("SERPENT"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("SERPENT")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    // Split into play area (left) and sidebar (right).
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min((PLAY_W as u16 + 6).max(30)), // padding left of playfield
            Constraint::Length(24),
        ])
        .split(cabinet_inner);

    // Center the fixed-size playfield within the left column.
    let v_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(PLAY_H as u16),
            Constraint::Min(1),
        ])
        .split(cols[0]);
    let h_center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(PLAY_W as u16),
            Constraint::Min(1),
        ])
        .split(v_center[1]);
    let play_rect = h_center[1];

    draw_playfield(frame, game, play_rect);
    draw_sidebar(frame, game, cols[1]);
}

fn draw_playfield(frame: &mut Frame, game: &Game, play_rect: Rect) {
    let mut grid = vec![vec![' '; PLAY_W]; PLAY_H];

    // Border walls around the board.
    grid[0][0] = '┌';
    grid[0][PLAY_W - 1] = '┐';
    for x in 1..PLAY_W - 1 {
        grid[0][x] = '─';
    }
    for y in 1..PLAY_H - 1 {
        grid[y][0] = '│';
        grid[y][PLAY_W - 1] = '│';
    }
    grid[PLAY_H - 1][0] = '└';
    grid[PLAY_H - 1][PLAY_W - 1] = '┘';
    for x in 1..PLAY_W - 1 {
        grid[PLAY_H - 1][x] = '─';
    }

    // Helper to plot one board cell in the inner area, two characters wide.
    // Cells outside the board (a head that just hit a wall) are skipped.
    let plot_cell = |grid: &mut [Vec<char>], p: Point, left: char, right: char| {
        if p.x < 0 || p.y < 0 {
            return;
        }
        let gx = 1 + (p.x as usize) * CELL_W;
        let gy = 1 + p.y as usize;
        if gy < PLAY_H - 1 && gx + 1 < PLAY_W - 1 {
            grid[gy][gx] = left;
            grid[gy][gx + 1] = right;
        }
    };

    if let Some(apple) = game.apple {
        plot_cell(&mut grid, apple, '●', ' ');
    }

    for &segment in game.snake.iter().skip(1) {
        plot_cell(&mut grid, segment, '▒', '▒');
    }
    // Head last so a collision cell shows the head.
    if let Some(&head) = game.snake.front() {
        plot_cell(&mut grid, head, '█', '█');
    }

    let lines: Vec<Line> = grid
        .iter()
        .map(|row| Line::raw(row.iter().collect::<String>()))
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, play_rect);

    if game.game_over {
        let overlay_w = (PLAY_W as u16).saturating_sub(4).max(8);
        let overlay_h = 5u16;
        let popup = Rect {
            x: play_rect.x + (play_rect.width.saturating_sub(overlay_w)) / 2,
            y: play_rect.y + (play_rect.height.saturating_sub(overlay_h)) / 2,
            width: overlay_w,
            height: overlay_h,
        };
        let overlay = Paragraph::new("GAME OVER\nr restart")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(overlay, popup);
    }
}

fn draw_sidebar(frame: &mut Frame, game: &Game, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(5), Constraint::Length(8)].as_ref())
        .split(area);

    let status = if game.game_over {
        "OVER"
    } else {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        if (millis / 300) % 2 == 0 {
            "ALIVE"
        } else {
            "     "
        }
    };

    let info = Paragraph::new(format!(
        "SCORE\n{}\n\nBEST\n{}\n\nSTATUS\n{}",
        game.score, game.best_score, status
    ))
    .block(Block::default().title("INFO").borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(info, chunks[0]);

    let controls = Paragraph::new("↑/↓/←/→ steer\nr restart\nq quit")
        .block(Block::default().title("CONTROLS").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(controls, chunks[2]);
}
