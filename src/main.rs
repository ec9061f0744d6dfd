//! Watembezi Adventure, a terminal browser for a Kenya safari catalog.
//!
//! Tabs for destinations, services, a filterable video gallery, and contact
//! details, with dialogs for the full content of each entry.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod tui;

use action::Action;
use anyhow::Result;
use app::App;
use crossterm::event::Event;
use std::time::Duration;
use tui::Tui;

fn main() -> Result<()> {
    let _log_guard = logging::init();

    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    let mut app = App::new();
    app.init()?;

    let result = run_app(&mut tui, &mut app);

    tui.exit()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "application error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame) {
                tracing::error!(error = %e, "draw error");
            }
        })?;

        match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Mouse(mouse)) => app.handle_mouse_event(mouse)?,
            Some(Event::Resize(w, h)) => app.update(Action::Resize(w, h))?,
            Some(_) => {}
            None => app.update(Action::Tick)?,
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
