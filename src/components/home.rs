//! Home component - the main tabbed screen
//!
//! Owns the tab state and the destination/service card lists. The Videos
//! and Contact tabs delegate to their own components; this module also
//! hosts the shared screen layout (tab bar, status line, help bar).

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::calculate_main_layout;
use crate::components::{ContactComponent, GalleryComponent};
use crate::model::catalog::{Catalog, ContentKind};
use crate::model::ui::Tab;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

/// A selectable card in the Destinations or Services list
#[derive(Debug, Clone)]
pub struct Card {
    pub key: String,
    pub title: String,
    pub tagline: String,
}

/// Home component: tab state plus the two card lists it owns directly
pub struct HomeComponent {
    /// Current active tab
    pub active_tab: Tab,

    destinations: Vec<Card>,
    services: Vec<Card>,

    dest_state: ListState,
    svc_state: ListState,
}

impl HomeComponent {
    pub fn new(catalog: &Catalog, start_tab: Tab) -> Self {
        let destinations = catalog
            .destinations()
            .iter()
            .map(|d| Card {
                key: d.key.clone(),
                title: d.title.clone(),
                tagline: d.subtitle.clone(),
            })
            .collect();
        let services = catalog
            .services()
            .iter()
            .map(|s| Card {
                key: s.key.clone(),
                title: s.title.clone(),
                tagline: s.subtitle.clone(),
            })
            .collect();

        let mut dest_state = ListState::default();
        dest_state.select(Some(0));
        let mut svc_state = ListState::default();
        svc_state.select(Some(0));

        Self {
            active_tab: start_tab,
            destinations,
            services,
            dest_state,
            svc_state,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tab Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current = tabs.iter().position(|t| *t == self.active_tab).unwrap_or(0);
        self.active_tab = tabs[(current + 1) % tabs.len()];
    }

    pub fn previous_tab(&mut self) {
        let tabs = Tab::all();
        let current = tabs.iter().position(|t| *t == self.active_tab).unwrap_or(0);
        self.active_tab = tabs[(current + tabs.len() - 1) % tabs.len()];
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Card List Navigation (Destinations/Services tabs)
    // ─────────────────────────────────────────────────────────────────────────

    fn active_list(&mut self) -> Option<(&[Card], &mut ListState)> {
        match self.active_tab {
            Tab::Destinations => Some((&self.destinations, &mut self.dest_state)),
            Tab::Services => Some((&self.services, &mut self.svc_state)),
            _ => None,
        }
    }

    pub fn next(&mut self) {
        if let Some((cards, state)) = self.active_list() {
            if cards.is_empty() {
                return;
            }
            let current = state.selected().unwrap_or(0);
            state.select(Some((current + 1) % cards.len()));
        }
    }

    pub fn previous(&mut self) {
        if let Some((cards, state)) = self.active_list() {
            if cards.is_empty() {
                return;
            }
            let current = state.selected().unwrap_or(0);
            state.select(Some((current + cards.len() - 1) % cards.len()));
        }
    }

    pub fn select_first(&mut self) {
        if let Some((cards, state)) = self.active_list() {
            if !cards.is_empty() {
                state.select(Some(0));
            }
        }
    }

    pub fn select_last(&mut self) {
        if let Some((cards, state)) = self.active_list() {
            if !cards.is_empty() {
                state.select(Some(cards.len() - 1));
            }
        }
    }

    /// The selected card on the active tab, if that tab has a card list
    pub fn selected_card(&self) -> Option<&Card> {
        match self.active_tab {
            Tab::Destinations => self.destinations.get(self.dest_state.selected()?),
            Tab::Services => self.services.get(self.svc_state.selected()?),
            _ => None,
        }
    }

    fn detail_kind(&self) -> Option<ContentKind> {
        match self.active_tab {
            Tab::Destinations => Some(ContentKind::Destination),
            Tab::Services => Some(ContentKind::Service),
            _ => None,
        }
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),
            KeyCode::Enter => self.detail_kind().and_then(|kind| {
                self.selected_card()
                    .map(|card| Action::OpenDetail(kind, card.key.clone()))
            }),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let (cards, state, title) = match self.active_tab {
            Tab::Destinations => (
                &self.destinations,
                &mut self.dest_state,
                " Destinations ",
            ),
            Tab::Services => (&self.services, &mut self.svc_state, " Services "),
            _ => return Ok(()),
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let items: Vec<ListItem> = cards
            .iter()
            .map(|card| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        card.title.clone(),
                        Style::default().fg(Color::White),
                    )),
                    Line::from(Span::styled(
                        format!("  {}", card.tagline),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, chunks[0], state);

        // Preview panel for the selected card
        let selected = state.selected().and_then(|i| cards.get(i));
        let preview = match selected {
            Some(card) => vec![
                Line::from(""),
                Line::from(Span::styled(
                    card.title.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    card.tagline.clone(),
                    Style::default().fg(Color::Cyan),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Enter for full details",
                    Style::default().fg(Color::Yellow),
                )),
            ],
            None => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Nothing selected",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
        };

        let panel = Paragraph::new(preview)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" Preview "));
        frame.render_widget(panel, chunks[1]);

        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Screen Assembly
// ═══════════════════════════════════════════════════════════════════════════════

/// Draw the full main screen: tab bar, active tab content, optional status
/// line, and the help bar.
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    gallery: &mut GalleryComponent,
    contact: &mut ContactComponent,
    status_message: Option<&str>,
) -> Result<()> {
    let layout = calculate_main_layout(area, status_message.is_some());

    // Tab bar
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| Line::from(t.name()))
        .collect();
    let selected = Tab::all()
        .iter()
        .position(|t| *t == home.active_tab)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Watembezi Adventure ")
                .title_style(
                    Style::default()
                        .fg(Color::Rgb(224, 159, 62))
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, layout.tabs);

    // Active tab content
    match home.active_tab {
        Tab::Destinations | Tab::Services => home.draw(frame, layout.content)?,
        Tab::Videos => gallery.draw(frame, layout.content)?,
        Tab::Contact => contact.draw(frame, layout.content)?,
    }

    // Status line
    if let (Some(status_area), Some(message)) = (layout.status, status_message) {
        let status = Paragraph::new(Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Yellow),
        )));
        frame.render_widget(status, status_area);
    }

    // Help bar
    let hints: Vec<Span> = match home.active_tab {
        Tab::Destinations | Tab::Services => vec![
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Details  "),
            Span::styled(" Tab ", Style::default().fg(Color::Cyan)),
            Span::raw("Switch tab  "),
            Span::styled(" ? ", Style::default().fg(Color::Cyan)),
            Span::raw("Help  "),
            Span::styled(" q ", Style::default().fg(Color::Red)),
            Span::raw("Quit"),
        ],
        Tab::Videos => vec![
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" [/] ", Style::default().fg(Color::Yellow)),
            Span::raw("Filter  "),
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Play  "),
            Span::styled(" m ", Style::default().fg(Color::Cyan)),
            Span::raw("More  "),
            Span::styled(" q ", Style::default().fg(Color::Red)),
            Span::raw("Quit"),
        ],
        Tab::Contact => vec![
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Details  "),
            Span::styled(" i ", Style::default().fg(Color::Green)),
            Span::raw("Send inquiry  "),
            Span::styled(" q ", Style::default().fg(Color::Red)),
            Span::raw("Quit"),
        ],
    };
    let help = Paragraph::new(Line::from(hints))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.help);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> HomeComponent {
        HomeComponent::new(&Catalog::seed(), Tab::Destinations)
    }

    #[test]
    fn test_tab_cycle_wraps() {
        let mut h = home();
        for _ in 0..Tab::all().len() {
            h.next_tab();
        }
        assert_eq!(h.active_tab, Tab::Destinations);

        h.previous_tab();
        assert_eq!(h.active_tab, Tab::Contact);
    }

    #[test]
    fn test_card_navigation_wraps() {
        let mut h = home();
        h.select_last();
        let last = h.selected_card().unwrap().key.clone();
        h.next();
        assert_eq!(h.selected_card().unwrap().key, "maasai-mara");
        h.previous();
        assert_eq!(h.selected_card().unwrap().key, last);
    }

    #[test]
    fn test_enter_opens_detail_for_selected_card() {
        let mut h = home();
        let action = h
            .handle_key_event(KeyEvent::from(KeyCode::Enter))
            .unwrap();
        assert_eq!(
            action,
            Some(Action::OpenDetail(
                ContentKind::Destination,
                "maasai-mara".to_string()
            ))
        );
    }

    #[test]
    fn test_no_card_selection_on_gallery_tab() {
        let mut h = home();
        h.active_tab = Tab::Videos;
        assert!(h.selected_card().is_none());
        let action = h
            .handle_key_event(KeyEvent::from(KeyCode::Enter))
            .unwrap();
        assert_eq!(action, None);
    }
}
