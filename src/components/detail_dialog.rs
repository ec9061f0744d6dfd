//! Detail dialog component
//!
//! One parametrized dialog serves all three content tables. `open` receives
//! already-resolved content and fills the fixed slots (title, subtitle,
//! sections); lookup failures never reach this component. Dismissal: `q`
//! closes this dialog, Escape closes every detail dialog, and a mouse click
//! outside the dialog (the overlay) closes it too.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::overlay_area;
use crate::model::catalog::{ContentKind, DetailContent};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

/// Detail dialog over a content record
#[derive(Default)]
pub struct DetailDialog {
    kind: Option<ContentKind>,
    content: Option<DetailContent>,
    scroll_offset: usize,
    /// Dialog rect from the last draw, for overlay click hit-testing
    last_area: Option<Rect>,
}

impl DetailDialog {
    /// Fill the content slots and reset the scroll position
    pub fn open(&mut self, kind: ContentKind, content: DetailContent) {
        self.kind = Some(kind);
        self.content = Some(content);
        self.scroll_offset = 0;
    }

    #[cfg(test)]
    pub fn content(&self) -> Option<&DetailContent> {
        self.content.as_ref()
    }

    fn build_lines(content: &DetailContent) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        if !content.subtitle.is_empty() {
            lines.push(Line::from(Span::styled(
                content.subtitle.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        for section in &content.sections {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  {}", section.heading),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", "─".repeat(section.heading.len() + 2)),
                Style::default().fg(Color::DarkGray),
            )));

            for entry in &section.entries {
                if entry.label.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", entry.text),
                        Style::default().fg(Color::White),
                    )));
                } else {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("  {}: ", entry.label),
                            Style::default()
                                .fg(Color::Green)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(entry.text.clone(), Style::default().fg(Color::White)),
                    ]));
                }
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  q Close   Esc Close all   j/k Scroll",
            Style::default().fg(Color::DarkGray),
        )));

        lines
    }
}

impl Component for DetailDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseAllDetails),
            KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        // Click on the background overlay dismisses the dialog
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(dialog) = self.last_area {
                let click = Position::new(mouse.column, mouse.row);
                if !dialog.contains(click) {
                    return Ok(Some(Action::CloseModal));
                }
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let Some(content) = self.content.as_ref() else {
            return Ok(());
        };

        frame.render_widget(Clear, area);

        let dialog_area = overlay_area(area, 4);
        self.last_area = Some(dialog_area);

        let lines = Self::build_lines(content);
        let total = lines.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let kind_name = self.kind.map(|k| k.name()).unwrap_or("Details");
        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {}: {} ", kind_name, content.title))
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: false })
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
    use crate::model::catalog::Catalog;

    #[test]
    fn test_open_fills_slots_and_resets_scroll() {
        let catalog = Catalog::seed();
        let mut dialog = DetailDialog::default();
        dialog.scroll_offset = 7;

        let content = catalog
            .detail(ContentKind::Destination, "maasai-mara")
            .unwrap();
        dialog.open(ContentKind::Destination, content);

        assert_eq!(dialog.scroll_offset, 0);
        let content = dialog.content().unwrap();
        assert_eq!(content.title, "Maasai Mara National Reserve");
        assert_eq!(content.sections.len(), 5);
    }

    #[test]
    fn test_escape_closes_all_details() {
        let mut dialog = DetailDialog::default();
        let action = dialog.handle_key_event(KeyEvent::from(KeyCode::Esc)).unwrap();
        assert_eq!(action, Some(Action::CloseAllDetails));
    }

    #[test]
    fn test_q_closes_only_this_dialog() {
        let mut dialog = DetailDialog::default();
        let action = dialog
            .handle_key_event(KeyEvent::from(KeyCode::Char('q')))
            .unwrap();
        assert_eq!(action, Some(Action::CloseModal));
    }

    #[test]
    fn test_overlay_click_dismisses() {
        let mut dialog = DetailDialog::default();
        dialog.last_area = Some(Rect::new(10, 5, 40, 12));

        let outside = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 2,
            row: 2,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };
        assert_eq!(
            dialog.handle_mouse_event(outside).unwrap(),
            Some(Action::CloseModal)
        );

        let inside = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 15,
            row: 8,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };
        assert_eq!(dialog.handle_mouse_event(inside).unwrap(), None);
    }

    #[test]
    fn test_lines_cover_every_entry() {
        let catalog = Catalog::seed();
        let content = catalog.detail(ContentKind::Service, "guides").unwrap();
        let entry_count: usize = content.sections.iter().map(|s| s.entries.len()).sum();
        let lines = DetailDialog::build_lines(&content);
        // Subtitle + per-section (heading + rule) + entries + footer spacing
        assert!(lines.len() >= entry_count + content.sections.len() * 2 + 1);
    }
}
