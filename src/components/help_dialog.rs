//! Help dialog component
//!
//! Scrollable keyboard shortcut reference.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::overlay_area;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog with keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    scroll_offset: usize,
}

impl HelpDialog {
    fn build_help_content() -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        let add_section = |lines: &mut Vec<Line<'static>>, title: &'static str| {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  {}", title),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        };

        let add_shortcut =
            |lines: &mut Vec<Line<'static>>, keys: &'static str, desc: &'static str| {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("    {:<14}", keys),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(desc, Style::default().fg(Color::White)),
                ]));
            };

        add_section(&mut lines, "General");
        add_shortcut(&mut lines, "Tab / S-Tab", "Next / previous tab");
        add_shortcut(&mut lines, "?", "Show this help");
        add_shortcut(&mut lines, "q", "Quit (with confirmation)");
        add_shortcut(&mut lines, "Esc", "Close all detail dialogs");

        add_section(&mut lines, "Lists");
        add_shortcut(&mut lines, "j / k", "Move down / up");
        add_shortcut(&mut lines, "g / G", "Jump to first / last");
        add_shortcut(&mut lines, "Enter", "Open details for the selection");

        add_section(&mut lines, "Videos");
        add_shortcut(&mut lines, "] / [", "Next / previous category filter");
        add_shortcut(&mut lines, "Enter", "Play the selected video");
        add_shortcut(&mut lines, "m", "Load more videos");

        add_section(&mut lines, "Contact");
        add_shortcut(&mut lines, "i", "Open the inquiry form");

        add_section(&mut lines, "Dialogs");
        add_shortcut(&mut lines, "q", "Close the dialog");
        add_shortcut(&mut lines, "j / k", "Scroll");

        lines
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let dialog_area = overlay_area(area, 4);
        let lines = Self::build_help_content();
        let total = lines.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(max_scroll).position(self.scroll_offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_keys() {
        let mut dialog = HelpDialog::default();
        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('?')] {
            let action = dialog.handle_key_event(KeyEvent::from(code)).unwrap();
            assert_eq!(action, Some(Action::CloseModal));
        }
    }

    #[test]
    fn test_scroll_does_not_underflow() {
        let mut dialog = HelpDialog::default();
        dialog
            .handle_key_event(KeyEvent::from(KeyCode::Char('k')))
            .unwrap();
        assert_eq!(dialog.scroll_offset, 0);
    }
}
