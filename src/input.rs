use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use gridlife::screen::Screen;

use crate::events::AppEvent;
use crate::events::Event;
use crate::events::SimEvent;

/// Converts a crossterm event into an application event.
///
/// A left click lands on whichever cell's block covers the pointer; clicks
/// outside the field are dropped.
pub fn convert_event(event: CrossTermEvent, screen: &Screen) -> Option<Event> {
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
            } => Some(Event::Sim(SimEvent::TogglePlay)),
            KeyEvent {
                code: KeyCode::Char('s'),
                ..
            } => Some(Event::Sim(SimEvent::Step)),
            KeyEvent {
                code: KeyCode::Char('+' | '='),
                ..
            } => Some(Event::Sim(SimEvent::Faster)),
            KeyEvent {
                code: KeyCode::Char('-'),
                ..
            } => Some(Event::Sim(SimEvent::Slower)),
            _ => None,
        },
        CrossTermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => screen
            .hit(column, row)
            .map(|(x, y)| Event::Sim(SimEvent::ToggleCell { x, y })),
        _ => None,
    }
}
