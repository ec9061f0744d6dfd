//! Quit confirmation dialog

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Quit confirmation dialog
#[derive(Default)]
pub struct QuitDialog;

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::ForceQuit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Char('q') => {
                Some(Action::CloseModal)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup = centered_popup(area, 40, 7);
        frame.render_widget(Clear, popup);

        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from("Leave Watembezi Adventure?"),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " y ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Yes   "),
                Span::styled(
                    " n ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("No"),
            ]),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Quit ")
                .title_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(paragraph, popup);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_quits() {
        let mut dialog = QuitDialog;
        for code in [KeyCode::Char('y'), KeyCode::Enter] {
            let action = dialog.handle_key_event(KeyEvent::from(code)).unwrap();
            assert_eq!(action, Some(Action::ForceQuit));
        }
    }

    #[test]
    fn test_decline_closes_dialog() {
        let mut dialog = QuitDialog;
        for code in [KeyCode::Char('n'), KeyCode::Esc] {
            let action = dialog.handle_key_event(KeyEvent::from(code)).unwrap();
            assert_eq!(action, Some(Action::CloseModal));
        }
    }
}
