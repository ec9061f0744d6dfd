//! Splash screen component
//!
//! Shows the Watembezi Adventure banner briefly before the main screen.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Splash screen component
pub struct SplashComponent {
    /// When the splash screen was shown
    start_time: Option<Instant>,
    /// Duration to show splash before auto-advancing
    duration: Duration,
}

impl Default for SplashComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashComponent {
    pub fn new() -> Self {
        Self {
            start_time: None,
            duration: Duration::from_millis(1200),
        }
    }

    /// Check if the splash duration has elapsed
    pub fn is_complete(&self) -> bool {
        self.start_time
            .map(|t| t.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    fn banner() -> Vec<&'static str> {
        vec![
            r"                   __                _      _ ",
            r" _      ______ _  / /____  ____ ___ | |____(_)",
            r"| | /| / / __ `/ / __/ _ \/ __ `__ \| '_  / / ",
            r"| |/ |/ / /_/ / / /_/  __/ / / / / / /_/ / /  ",
            r"|__/|__/\__,_/  \__/\___/_/ /_/ /_/_.___/_/   ",
            r"                                              ",
            r"        a d v e n t u r e   s a f a r i s     ",
        ]
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key press skips the splash screen
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete() {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0))),
            area,
        );

        let banner = Self::banner();
        let banner_height = banner.len() as u16;
        let banner_width = banner.first().map(|l| l.len()).unwrap_or(0) as u16;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length((area.height.saturating_sub(banner_height + 4)) / 2),
                Constraint::Length(banner_height),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let lines: Vec<Line> = banner
            .iter()
            .map(|l| {
                Line::from(Span::styled(
                    *l,
                    Style::default()
                        .fg(Color::Rgb(224, 159, 62))
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect();

        let banner_x = (area.width.saturating_sub(banner_width)) / 2;
        let banner_rect = Rect::new(banner_x, chunks[1].y, banner_width, banner_height);
        frame.render_widget(Paragraph::new(lines), banner_rect);

        let subtitle = "Explore Kenya from your terminal";
        let subtitle_width = subtitle.len() as u16;
        let subtitle_x = (area.width.saturating_sub(subtitle_width)) / 2;
        let subtitle_rect = Rect::new(subtitle_x, chunks[3].y, subtitle_width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                subtitle,
                Style::default().fg(Color::DarkGray),
            ))),
            subtitle_rect,
        );

        Ok(())
    }
}
