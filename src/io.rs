use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use crate::events::AppEvent;
use crate::events::EngineEvent;
use crate::events::Event;

/// Width of one cell on screen, in terminal columns.
pub const CELL_WIDTH: u16 = 2;

/// Converts a crossterm event into a gridlife event.
///
/// The board is drawn at the terminal origin with each cell [`CELL_WIDTH`]
/// columns wide, so terminal position `(column, row)` lands on cell
/// `(row, column / CELL_WIDTH)`. Presses and drags outside the board are
/// dropped; releases always pass through so a gesture ending off-board
/// still disarms painting.
pub fn convert_event(event: CrossTermEvent, rows: usize, cols: usize) -> Option<Event> {
    match event {
        CrossTermEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(Event::App(AppEvent::Exit)),

            KeyEvent {
                code: KeyCode::Char(' '),
                ..
            } => Some(Event::Engine(EngineEvent::ToggleRunning)),

            KeyEvent {
                code: KeyCode::Char('s'),
                ..
            } => Some(Event::Engine(EngineEvent::StepOnce)),

            KeyEvent {
                code: KeyCode::Char('r'),
                ..
            } => Some(Event::Engine(EngineEvent::Reset)),

            KeyEvent {
                code: KeyCode::Char('k'),
                ..
            } => Some(Event::Engine(EngineEvent::SpeedUp)),

            KeyEvent {
                code: KeyCode::Char('j'),
                ..
            } => Some(Event::Engine(EngineEvent::SlowDown)),

            _ => None,
        },

        CrossTermEvent::Mouse(mouse_event) => convert_mouse(mouse_event, rows, cols),

        _ => None,
    }
}

fn convert_mouse(event: MouseEvent, rows: usize, cols: usize) -> Option<Event> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let (row, col) = cell_at(event.column, event.row, rows, cols)?;

            Some(Event::Engine(EngineEvent::PointerDown { row, col }))
        }

        MouseEventKind::Drag(MouseButton::Left) => {
            let (row, col) = cell_at(event.column, event.row, rows, cols)?;

            Some(Event::Engine(EngineEvent::PointerMoved { row, col }))
        }

        MouseEventKind::Up(MouseButton::Left) => Some(Event::Engine(EngineEvent::PointerUp)),

        _ => None,
    }
}

/// Map a terminal position to the cell under it, if any.
fn cell_at(column: u16, row: u16, rows: usize, cols: usize) -> Option<(usize, usize)> {
    let cell_row = row as usize;
    let cell_col = (column / CELL_WIDTH) as usize;

    (cell_row < rows && cell_col < cols).then_some((cell_row, cell_col))
}
