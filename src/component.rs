//! Component trait - interface for UI components
//!
//! Each component owns its state, converts input events into Actions, and
//! renders itself. State changes happen in `update`, driven by the App's
//! action dispatch, never by one component reaching into another.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// The flow per event:
/// 1. `handle_key_event` / `handle_mouse_event` map the event to an Action
/// 2. `update` applies Actions to component state
/// 3. `draw` renders the current state
pub trait Component {
    /// Initialize the component once at startup
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Convert a key event into an optional Action
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Convert a mouse event into an optional Action
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Apply an Action to component state, optionally emitting a follow-up
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Render the component into `area`
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
