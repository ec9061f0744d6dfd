//! Inquiry form dialog
//!
//! A small three-field form (name, email, message). Submission requires a
//! non-blank name and email; nothing is sent anywhere, the App just posts a
//! confirmation notice and clears the fields. On an incomplete form the
//! dialog stays open with the typed values intact.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Which form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Message,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    fn previous(self) -> Self {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
        }
    }

    fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }
}

/// Inquiry form state
#[derive(Default)]
pub struct InquiryFormDialog {
    pub name: String,
    pub email: String,
    pub message: String,
    field: FormField,
}

impl InquiryFormDialog {
    /// Name and email must both be non-blank; the message is optional
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    /// Reset the form after a successful submission
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.field = FormField::Name;
    }

    fn active_value_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    fn field_line(&self, field: FormField) -> Line<'_> {
        let value: &str = match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        };
        let focused = self.field == field;
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut spans = vec![
            Span::styled(format!(" {:<8}", field.label()), label_style),
            Span::styled(value, Style::default().fg(Color::White)),
        ];
        if focused {
            spans.push(Span::styled(
                "█",
                Style::default().fg(Color::Yellow),
            ));
        }
        Line::from(spans)
    }
}

impl Component for InquiryFormDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::SubmitInquiry),
            KeyCode::Tab | KeyCode::Down => {
                self.field = self.field.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.field = self.field.previous();
                None
            }
            KeyCode::Backspace => {
                self.active_value_mut().pop();
                None
            }
            KeyCode::Char(c) => {
                self.active_value_mut().push(c);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup = centered_popup(area, 56, 12);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Send an Inquiry ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        frame.render_widget(Paragraph::new(self.field_line(FormField::Name)), chunks[1]);
        frame.render_widget(Paragraph::new(self.field_line(FormField::Email)), chunks[2]);
        frame.render_widget(
            Paragraph::new(self.field_line(FormField::Message)),
            chunks[3],
        );

        let hints = Line::from(Span::styled(
            " Tab Next field   Enter Submit   Esc Cancel",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(hints), chunks[5]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut InquiryFormDialog, text: &str) {
        for c in text.chars() {
            form.handle_key_event(KeyEvent::from(KeyCode::Char(c)))
                .unwrap();
        }
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut form = InquiryFormDialog::default();
        type_text(&mut form, "Asha");
        form.handle_key_event(KeyEvent::from(KeyCode::Tab)).unwrap();
        type_text(&mut form, "asha@example.com");
        assert_eq!(form.name, "Asha");
        assert_eq!(form.email, "asha@example.com");
        assert!(form.message.is_empty());
    }

    #[test]
    fn test_field_cycle_wraps_both_ways() {
        let mut form = InquiryFormDialog::default();
        assert_eq!(form.field, FormField::Name);
        form.handle_key_event(KeyEvent::from(KeyCode::BackTab))
            .unwrap();
        assert_eq!(form.field, FormField::Message);
        form.handle_key_event(KeyEvent::from(KeyCode::Tab)).unwrap();
        assert_eq!(form.field, FormField::Name);
    }

    #[test]
    fn test_valid_requires_name_and_email() {
        let mut form = InquiryFormDialog::default();
        assert!(!form.is_valid());

        form.name = "Asha".to_string();
        assert!(!form.is_valid());

        form.email = "   ".to_string();
        assert!(!form.is_valid());

        form.email = "asha@example.com".to_string();
        assert!(form.is_valid());
    }

    #[test]
    fn test_clear_resets_fields_and_focus() {
        let mut form = InquiryFormDialog {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            message: "Jambo".to_string(),
            field: FormField::Message,
        };
        form.clear();
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
        assert_eq!(form.field, FormField::Name);
    }

    #[test]
    fn test_enter_requests_submission() {
        let mut form = InquiryFormDialog::default();
        let action = form.handle_key_event(KeyEvent::from(KeyCode::Enter)).unwrap();
        assert_eq!(action, Some(Action::SubmitInquiry));
    }

    #[test]
    fn test_backspace_on_empty_field_is_noop() {
        let mut form = InquiryFormDialog::default();
        form.handle_key_event(KeyEvent::from(KeyCode::Backspace))
            .unwrap();
        assert!(form.name.is_empty());
    }
}
