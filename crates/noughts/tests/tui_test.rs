//! Drives the app through terminal events and checks what gets drawn.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use noughts::Palette;
use noughts::tui::{App, ScreenLayout};
use noughts_rules::{GameStatus, Mark, Player};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};
use std::ops::ControlFlow;
use std::time::Duration;

const WIDTH: u16 = 60;
const HEIGHT: u16 = 24;

fn setup() -> (App, Terminal<TestBackend>) {
    let terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let app = App::new(Palette::default(), Duration::from_millis(16));
    (app, terminal)
}

fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
    buffer_text(terminal.backend().buffer())
}

fn click_cell(app: &mut App, row: usize, col: usize) -> ControlFlow<()> {
    let layout = ScreenLayout::new(Rect::new(0, 0, WIDTH, HEIGHT));
    let rect = layout.board.unwrap().cell(row, col).unwrap();
    app.handle_event(&Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: rect.x + 1,
        row: rect.y + 1,
        modifiers: KeyModifiers::NONE,
    }))
}

fn press(app: &mut App, code: KeyCode) -> ControlFlow<()> {
    app.handle_event(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

#[test]
fn test_first_frame_shows_current_player() {
    let (mut app, mut terminal) = setup();
    app.draw(&mut terminal).unwrap();
    let text = screen(&terminal);
    assert!(text.contains("Current Player: X"), "{text}");
    assert!(text.contains("Noughts & Crosses"));
}

#[test]
fn test_clicks_play_a_game() {
    let (mut app, mut terminal) = setup();
    // Clicks are mapped with the layout of the last drawn frame.
    app.draw(&mut terminal).unwrap();

    for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
        assert!(click_cell(&mut app, row, col).is_continue());
        app.draw(&mut terminal).unwrap();
    }
    assert_eq!(app.game().mark(1, 1), Some(Mark::O));
    assert!(screen(&terminal).contains("Current Player: X"));

    click_cell(&mut app, 0, 2);
    app.draw(&mut terminal).unwrap();
    assert_eq!(app.game().status(), GameStatus::Won(Player::X));

    let text = screen(&terminal);
    assert!(text.contains("Player X Wins!"), "{text}");
    assert!(text.contains("Press R to restart or Q to quit"));
}

#[test]
fn test_click_before_first_frame_is_ignored() {
    let (mut app, _terminal) = setup();
    click_cell(&mut app, 0, 0);
    assert_eq!(app.game().mark(0, 0), Some(Mark::Empty));
}

#[test]
fn test_occupied_click_shows_message() {
    let (mut app, mut terminal) = setup();
    app.draw(&mut terminal).unwrap();
    click_cell(&mut app, 2, 2);
    click_cell(&mut app, 2, 2);

    assert_eq!(app.game().turn(), Player::O);
    assert_eq!(app.message(), Some("Cell (2, 2) is already occupied"));
    app.draw(&mut terminal).unwrap();
    assert!(screen(&terminal).contains("already occupied"));
}

#[test]
fn test_keyboard_draw_then_restart() {
    let (mut app, mut terminal) = setup();
    for digit in ['1', '2', '3', '6', '4', '7', '5', '9', '8'] {
        press(&mut app, KeyCode::Char(digit));
    }
    assert_eq!(app.game().status(), GameStatus::Draw);
    app.draw(&mut terminal).unwrap();
    assert!(screen(&terminal).contains("It's a Tie!"));

    // Placements are filtered once the game is over.
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.game().status(), GameStatus::Draw);

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.game().status(), GameStatus::InProgress);
    assert_eq!(app.game().turn(), Player::X);
    assert!(app.game().board().iter().all(|(_, _, mark)| mark == Mark::Empty));
}

#[test]
fn test_restart_ignored_mid_game() {
    let (mut app, _terminal) = setup();
    press(&mut app, KeyCode::Char('5'));
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.game().mark(1, 1), Some(Mark::X));
}

#[test]
fn test_arrows_and_enter() {
    let (mut app, _terminal) = setup();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.game().mark(1, 2), Some(Mark::X));
}

#[test]
fn test_quit() {
    let (mut app, _terminal) = setup();
    assert!(press(&mut app, KeyCode::Char('q')).is_break());
    assert!(press(&mut app, KeyCode::Esc).is_break());
}

#[test]
fn test_small_terminal() {
    let mut terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();
    let mut app = App::new(Palette::default(), Duration::from_millis(16));
    app.draw(&mut terminal).unwrap();
    assert!(screen(&terminal).contains("Terminal too small"));
}
