//! Per-tick event drain.

use std::io;
use std::time::Instant;

use crossterm::event::{self, Event, MouseEventKind};

use crate::map::{is_quit_chord, key_input, pointer_button};
use crate::types::{InputSnapshot, Point};

/// Collects terminal events into one snapshot per tick.
#[derive(Debug, Default)]
pub struct InputPoller {
    events_seen: u64,
}

impl InputPoller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events_seen(&self) -> u64 {
        self.events_seen
    }

    /// Block until `deadline`, folding every event that arrives into a snapshot.
    ///
    /// Events already queued when the deadline passes are still drained, so
    /// nothing is left behind for the next tick. `to_field` maps a terminal
    /// cell (column, row) to playfield coordinates.
    pub fn collect_until<F>(&mut self, deadline: Instant, to_field: F) -> io::Result<InputSnapshot>
    where
        F: Fn(u16, u16) -> Point,
    {
        let mut snapshot = InputSnapshot::default();
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            apply_event(&mut snapshot, event::read()?, &to_field);
            self.events_seen += 1;
        }
        if snapshot.overflowed > 0 {
            log::warn!("{} input events over the per-tick limit were dropped", snapshot.overflowed);
        }
        Ok(snapshot)
    }
}

/// Fold one terminal event into the snapshot.
pub fn apply_event<F>(snapshot: &mut InputSnapshot, ev: Event, to_field: &F)
where
    F: Fn(u16, u16) -> Point,
{
    match ev {
        Event::Key(key) => {
            if is_quit_chord(key) {
                snapshot.quit_requested = true;
            } else if let Some(k) = key_input(key) {
                snapshot.push_key(k);
            }
        }
        Event::Mouse(mouse) => {
            if let MouseEventKind::Down(button) = mouse.kind {
                snapshot.push_pointer(pointer_button(button), to_field(mouse.column, mouse.row));
            }
        }
        Event::Resize(_, _) => snapshot.resized = true,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{KeyInput, PointerButton};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent};

    fn identity(col: u16, row: u16) -> Point {
        Point::new(col as f64, row as f64)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn keys_accumulate_in_order() {
        let mut s = InputSnapshot::default();
        apply_event(&mut s, Event::Key(KeyEvent::from(KeyCode::Char('a'))), &identity);
        apply_event(&mut s, Event::Key(KeyEvent::from(KeyCode::Esc)), &identity);
        assert_eq!(s.keys_down.as_slice(), &[KeyInput::Other, KeyInput::Escape]);
        assert!(s.escape_pressed());
        assert!(!s.quit_requested);
    }

    #[test]
    fn escape_after_a_key_flood_still_registers() {
        let mut s = InputSnapshot::default();
        for _ in 0..40 {
            apply_event(&mut s, Event::Key(KeyEvent::from(KeyCode::Char('x'))), &identity);
        }
        apply_event(&mut s, Event::Key(KeyEvent::from(KeyCode::Esc)), &identity);

        assert!(s.escape_pressed());
        assert_eq!(s.keys_down.len(), crate::types::MAX_EVENTS_PER_TICK);
        assert_eq!(s.overflowed, 9);
    }

    #[test]
    fn ctrl_c_requests_quit() {
        let mut s = InputSnapshot::default();
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        apply_event(&mut s, ev, &identity);
        assert!(s.quit_requested);
        assert!(s.keys_down.is_empty());
    }

    #[test]
    fn only_mouse_down_becomes_pointer_press() {
        let mut s = InputSnapshot::default();
        apply_event(&mut s, mouse(MouseEventKind::Moved, 1, 1), &identity);
        apply_event(&mut s, mouse(MouseEventKind::Up(MouseButton::Left), 1, 1), &identity);
        apply_event(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 3, 4), &identity);
        apply_event(&mut s, mouse(MouseEventKind::Down(MouseButton::Right), 5, 6), &identity);

        assert_eq!(s.pointer_down.len(), 2);
        assert_eq!(s.pointer_down[0].button, PointerButton::Primary);
        assert_eq!(s.pointer_down[0].position, Point::new(3.0, 4.0));
        assert_eq!(s.pointer_down[1].button, PointerButton::Secondary);
    }

    #[test]
    fn pointer_positions_go_through_mapping() {
        let mut s = InputSnapshot::default();
        let scaled = |col: u16, row: u16| Point::new(col as f64 * 5.0, row as f64 * 15.0);
        apply_event(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 2, 3), &scaled);
        assert_eq!(s.pointer_down[0].position, Point::new(10.0, 45.0));
    }

    #[test]
    fn resize_is_flagged() {
        let mut s = InputSnapshot::default();
        apply_event(&mut s, Event::Resize(80, 24), &identity);
        assert!(s.resized);
    }
}
