//! Video gallery component
//!
//! A filterable list of safari films. The active filter is explicit
//! component state; the filter bar merely renders it. Changing the filter
//! re-arms a short highlight flash, the terminal stand-in for the original
//! re-triggered slide-in animation.

use crate::action::Action;
use crate::component::Component;
use crate::model::video::{visible_indices, CategoryFilter, Video};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// How long the filter-change flash stays lit
const FLASH_DURATION: Duration = Duration::from_millis(450);

/// Video gallery with category filtering
pub struct GalleryComponent {
    videos: Vec<Video>,
    /// The active filter; exactly one filter control is "active" at a time
    pub filter: CategoryFilter,
    list_state: ListState,
    /// Flash deadline, re-armed on every filter change. Re-arming while a
    /// flash is already pending simply moves the deadline, which is
    /// harmless.
    flash_until: Option<Instant>,
}

impl GalleryComponent {
    pub fn new(videos: Vec<Video>, filter: CategoryFilter) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            videos,
            filter,
            list_state,
            flash_until: None,
        }
    }

    /// Indices of videos visible under the current filter
    pub fn visible(&self) -> Vec<usize> {
        visible_indices(&self.videos, self.filter)
    }

    /// The currently selected video, if any is visible
    pub fn selected_video(&self) -> Option<&Video> {
        let visible = self.visible();
        let pos = self.list_state.selected()?;
        visible.get(pos).and_then(|&i| self.videos.get(i))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filter Control
    // ─────────────────────────────────────────────────────────────────────────

    fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.list_state.select(Some(0));
        self.flash_until = Some(Instant::now() + FLASH_DURATION);
        tracing::debug!(filter = filter.name(), "gallery filter changed");
    }

    pub fn next_filter(&mut self) {
        let filters = CategoryFilter::all_filters();
        let current = filters.iter().position(|f| *f == self.filter).unwrap_or(0);
        self.set_filter(filters[(current + 1) % filters.len()]);
    }

    pub fn previous_filter(&mut self) {
        let filters = CategoryFilter::all_filters();
        let current = filters.iter().position(|f| *f == self.filter).unwrap_or(0);
        self.set_filter(filters[(current + filters.len() - 1) % filters.len()]);
    }

    fn flash_active(&self) -> bool {
        self.flash_until.is_some_and(|t| Instant::now() < t)
    }

    /// Expire the flash once its deadline passes
    pub fn tick(&mut self) {
        if self.flash_until.is_some_and(|t| Instant::now() >= t) {
            self.flash_until = None;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // List Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn next(&mut self) {
        let count = self.visible().len();
        if count == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % count));
    }

    pub fn previous(&mut self) {
        let count = self.visible().len();
        if count == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + count - 1) % count));
    }

    pub fn select_first(&mut self) {
        if !self.visible().is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        let count = self.visible().len();
        if count > 0 {
            self.list_state.select(Some(count - 1));
        }
    }
}

impl Component for GalleryComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),
            KeyCode::Char(']') | KeyCode::Right => Some(Action::NextFilter),
            KeyCode::Char('[') | KeyCode::Left => Some(Action::PrevFilter),
            KeyCode::Enter => Some(Action::PlayVideo),
            KeyCode::Char('m') => Some(Action::LoadMore),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        // Filter bar; flashes briefly after a filter change
        let filters = CategoryFilter::all_filters();
        let titles: Vec<Line> = filters.iter().map(|f| Line::from(f.name())).collect();
        let selected = filters.iter().position(|f| *f == self.filter).unwrap_or(0);
        let bar_style = if self.flash_active() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let filter_bar = Tabs::new(titles)
            .select(selected)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(bar_style)
                    .title(" Filter "),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
        frame.render_widget(filter_bar, chunks[0]);

        // Video list under the current filter
        let visible = self.visible();
        if visible.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No videos in this category",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(ratatui::layout::Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Videos "));
            frame.render_widget(empty, chunks[1]);
            return Ok(());
        }

        let title_width = chunks[1].width.saturating_sub(22) as usize;
        let items: Vec<ListItem> = visible
            .iter()
            .filter_map(|&i| self.videos.get(i))
            .map(|video| {
                let title = truncate(&video.title, title_width);
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<width$}", title, width = title_width),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!(" {:>6} ", video.duration),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        format!("[{}]", video.category.name()),
                        Style::default().fg(Color::Cyan),
                    ),
                ]))
            })
            .collect();

        let count = visible.len();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Videos ({}) ", count)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);

        Ok(())
    }
}

/// Truncate to a display width, appending an ellipsis when cut
fn truncate(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    for c in text.chars() {
        if out.width() + 2 > max_width {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::video::{gallery, Category};

    fn component() -> GalleryComponent {
        GalleryComponent::new(gallery(), CategoryFilter::All)
    }

    #[test]
    fn test_filter_cycle_wraps_and_resets_selection() {
        let mut g = component();
        g.next();
        g.next();

        let filters = CategoryFilter::all_filters();
        for _ in 0..filters.len() {
            g.next_filter();
        }
        assert_eq!(g.filter, CategoryFilter::All);
        assert_eq!(g.list_state.selected(), Some(0));
    }

    #[test]
    fn test_filter_narrows_visible_set() {
        let mut g = component();
        let total = g.visible().len();

        g.next_filter();
        assert_eq!(g.filter, CategoryFilter::Only(Category::Wildlife));
        let wildlife = g.visible().len();
        assert!(wildlife < total);
        assert!(wildlife > 0);

        g.previous_filter();
        assert_eq!(g.visible().len(), total);
    }

    #[test]
    fn test_filter_change_arms_flash() {
        let mut g = component();
        assert!(!g.flash_active());
        g.next_filter();
        assert!(g.flash_active());
        // Re-arming while pending is fine
        g.next_filter();
        assert!(g.flash_active());
    }

    #[test]
    fn test_selected_video_follows_filter() {
        let mut g = component();
        g.next_filter(); // Wildlife
        let video = g.selected_video().unwrap();
        assert_eq!(video.category, Category::Wildlife);
    }

    #[test]
    fn test_navigation_on_empty_gallery_is_noop() {
        let mut g = GalleryComponent::new(Vec::new(), CategoryFilter::All);
        g.next();
        g.previous();
        g.select_last();
        assert!(g.selected_video().is_none());
    }

    #[test]
    fn test_truncate_respects_width() {
        assert_eq!(truncate("short", 10), "short");
        let cut = truncate("a very long video title indeed", 10);
        assert!(cut.width() <= 10);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn test_truncate_on_tiny_widths() {
        assert_eq!(truncate("anything", 0), "");
        assert!(truncate("anything", 1).width() <= 1);
    }
}
