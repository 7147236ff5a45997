//! Stateless UI rendering.
//!
//! Everything here reads the game; nothing mutates it.

use super::input::Cursor;
use super::layout::{ScreenLayout, center_rect};
use crate::Palette;
use noughts_rules::{GRID_SIZE, GameState, GameStatus, Mark, Player};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const TITLE: &str = "Noughts & Crosses";
const HELP: &str = "Click a cell, or arrows + Enter / 1-9 | Q quits";
const RESTART_HINT: &str = "Press R to restart or Q to quit";

/// Draws one frame and returns the layout used, for mapping clicks.
pub fn draw(
    frame: &mut Frame,
    game: &GameState,
    cursor: Cursor,
    message: Option<&str>,
    palette: &Palette,
) -> ScreenLayout {
    let layout = ScreenLayout::new(frame.area());

    draw_header(frame, layout.header, game, palette);
    match layout.board {
        Some(_) => draw_board(frame, &layout, game, cursor, palette),
        None => {
            let warning = Paragraph::new("Terminal too small")
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center);
            frame.render_widget(warning, layout.body);
        }
    }
    draw_footer(frame, layout.footer, message);

    if game.status().is_terminal() {
        draw_game_over(frame, layout.body, game.status());
    }

    layout
}

fn player_color(player: Player, palette: &Palette) -> Color {
    match player {
        Player::X => palette.x,
        Player::O => palette.o,
    }
}

fn draw_header(frame: &mut Frame, area: Rect, game: &GameState, palette: &Palette) {
    let line = match game.status() {
        GameStatus::InProgress => Line::from(vec![
            Span::raw("Current Player: "),
            Span::styled(
                game.turn().to_string(),
                Style::default()
                    .fg(player_color(game.turn(), palette))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        finished => Line::from(finished.to_string()),
    };

    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(TITLE));
    frame.render_widget(header, area);
}

fn draw_board(
    frame: &mut Frame,
    layout: &ScreenLayout,
    game: &GameState,
    cursor: Cursor,
    palette: &Palette,
) {
    let Some(board) = layout.board else {
        return;
    };

    // Paint the grid colour underneath; the gaps between cells become the lines.
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.grid)),
        board.area,
    );

    let winning = game.winning_line().map(|(line, _)| line);
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let Some(area) = board.cell(row, col) else {
                continue;
            };
            let mark = game.mark(row, col).unwrap_or_default();
            let highlighted = winning.is_some_and(|line| line.contains(row, col));
            let selected = !game.status().is_terminal() && cursor == Cursor { row, col };
            draw_cell(frame, area, mark, highlighted, selected, palette);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    mark: Mark,
    highlighted: bool,
    selected: bool,
    palette: &Palette,
) {
    let background = if highlighted {
        palette.highlight
    } else if selected {
        Color::DarkGray
    } else {
        Color::Reset
    };

    let (symbol, style) = match mark.player() {
        Some(player) => (
            player.to_string(),
            Style::default()
                .fg(player_color(player, palette))
                .add_modifier(Modifier::BOLD),
        ),
        None => (String::new(), Style::default()),
    };

    // Vertically centre the symbol.
    let mut lines = vec![Line::default(); usize::from(area.height.saturating_sub(1) / 2)];
    lines.push(Line::from(Span::styled(symbol, style)));

    let cell = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(background));
    frame.render_widget(Clear, area);
    frame.render_widget(cell, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, message: Option<&str>) {
    let footer = Paragraph::new(message.unwrap_or(HELP))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn draw_game_over(frame: &mut Frame, body: Rect, status: GameStatus) {
    let popup = center_rect(body, RESTART_HINT.len() as u16 + 4, 6);

    let text = vec![
        Line::default(),
        Line::from(Span::styled(
            status.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(RESTART_HINT),
    ];

    let overlay = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game Over"));
    frame.render_widget(Clear, popup);
    frame.render_widget(overlay, popup);
}
