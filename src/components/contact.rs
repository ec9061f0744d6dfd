//! Contact tab component
//!
//! Lists the ways to reach the agency; Enter opens the detail dialog for
//! the selected method, `i` opens the inquiry form.

use crate::action::Action;
use crate::component::Component;
use crate::model::catalog::{Catalog, ContentKind};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Contact methods list plus the inquiry entry point
pub struct ContactComponent {
    /// (key, title) per contact method
    methods: Vec<(String, String)>,
    list_state: ListState,
}

impl ContactComponent {
    pub fn new(catalog: &Catalog) -> Self {
        let methods = catalog
            .contact_methods()
            .iter()
            .map(|m| (m.key.clone(), m.title.clone()))
            .collect();
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            methods,
            list_state,
        }
    }

    pub fn next(&mut self) {
        if self.methods.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state
            .select(Some((current + 1) % self.methods.len()));
    }

    pub fn previous(&mut self) {
        if self.methods.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state
            .select(Some((current + self.methods.len() - 1) % self.methods.len()));
    }

    pub fn select_first(&mut self) {
        if !self.methods.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.methods.is_empty() {
            self.list_state.select(Some(self.methods.len() - 1));
        }
    }

    /// Key of the selected contact method
    pub fn selected_key(&self) -> Option<&str> {
        let idx = self.list_state.selected()?;
        self.methods.get(idx).map(|(key, _)| key.as_str())
    }
}

impl Component for ContactComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),
            KeyCode::Char('i') => Some(Action::OpenInquiryForm),
            KeyCode::Enter => self
                .selected_key()
                .map(|key| Action::OpenDetail(ContentKind::ContactMethod, key.to_string())),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let items: Vec<ListItem> = self
            .methods
            .iter()
            .map(|(_, title)| {
                ListItem::new(Line::from(Span::styled(
                    title.clone(),
                    Style::default().fg(Color::White),
                )))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Get in Touch ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, chunks[0], &mut self.list_state);

        let panel = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Planning a safari?",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Select a contact method and press Enter for the"),
            Line::from("details, or send us an inquiry directly."),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " i ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Open the inquiry form"),
            ]),
        ])
        .block(Block::default().borders(Borders::ALL).title(" Inquiries "));
        frame.render_widget(panel, chunks[1]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component() -> ContactComponent {
        ContactComponent::new(&Catalog::seed())
    }

    #[test]
    fn test_selected_key_follows_navigation() {
        let mut c = component();
        assert_eq!(c.selected_key(), Some("phone"));
        c.next();
        assert_eq!(c.selected_key(), Some("email"));
        c.select_last();
        assert_eq!(c.selected_key(), Some("hours"));
        c.next();
        assert_eq!(c.selected_key(), Some("phone"));
    }

    #[test]
    fn test_enter_opens_selected_method() {
        let mut c = component();
        c.next();
        let action = c.handle_key_event(KeyEvent::from(KeyCode::Enter)).unwrap();
        assert_eq!(
            action,
            Some(Action::OpenDetail(
                ContentKind::ContactMethod,
                "email".to_string()
            ))
        );
    }

    #[test]
    fn test_inquiry_key() {
        let mut c = component();
        let action = c
            .handle_key_event(KeyEvent::from(KeyCode::Char('i')))
            .unwrap();
        assert_eq!(action, Some(Action::OpenInquiryForm));
    }
}
