//! Application orchestration
//!
//! The App owns the catalog, the modal stack, and every component. Input
//! flows one way: events go to exactly one component (the top modal when one
//! is open, otherwise the active tab), that component emits an Action, and
//! `update` applies it. Opening a detail dialog is a catalog lookup; a miss
//! is logged and changes nothing.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, ContactComponent, DetailDialog, GalleryComponent, HelpDialog,
    HomeComponent, InquiryFormDialog, QuitDialog, SplashComponent,
};
use crate::config::Config;
use crate::model::catalog::Catalog;
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::{AppMode, Tab};
use crate::model::video::{gallery, CategoryFilter};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::Frame;

/// Confirmation shown after a complete inquiry is submitted
const INQUIRY_CONFIRMATION: &str =
    "Thank you for your inquiry! Our team will contact you within 24 hours.";

/// Main application state
pub struct App {
    mode: AppMode,
    catalog: Catalog,
    modals: ModalStack,
    pub should_quit: bool,
    status_message: Option<String>,

    splash: SplashComponent,
    home: HomeComponent,
    gallery: GalleryComponent,
    contact: ContactComponent,
    detail_dialog: DetailDialog,
    inquiry_form: InquiryFormDialog,
    help_dialog: HelpDialog,
    quit_dialog: QuitDialog,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(Config::load().unwrap_or_default())
    }

    pub fn with_config(config: Config) -> Self {
        let catalog = Catalog::seed();
        let start_tab = Tab::from_key(&config.start_tab).unwrap_or(Tab::Destinations);
        let filter =
            CategoryFilter::from_key(&config.default_filter).unwrap_or(CategoryFilter::All);
        let mode = if config.skip_splash {
            AppMode::Running
        } else {
            AppMode::Splash
        };

        let home = HomeComponent::new(&catalog, start_tab);
        let gallery = GalleryComponent::new(gallery(), filter);
        let contact = ContactComponent::new(&catalog);

        Self {
            mode,
            catalog,
            modals: ModalStack::new(),
            should_quit: false,
            status_message: None,
            splash: SplashComponent::new(),
            home,
            gallery,
            contact,
            detail_dialog: DetailDialog::default(),
            inquiry_form: InquiryFormDialog::default(),
            help_dialog: HelpDialog::default(),
            quit_dialog: QuitDialog,
        }
    }

    pub fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input Routing
    // ─────────────────────────────────────────────────────────────────────────

    /// Route a key event to exactly one component, then apply its Action
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if self.mode == AppMode::Splash {
            if let Some(action) = self.splash.handle_key_event(key)? {
                self.update(action)?;
            }
            return Ok(());
        }

        // Any key press clears the previous status notice
        self.status_message = None;

        let action = match self.modals.top() {
            Some(Modal::Detail { .. }) => self.detail_dialog.handle_key_event(key)?,
            Some(Modal::InquiryForm) => self.inquiry_form.handle_key_event(key)?,
            Some(Modal::Help) => self.help_dialog.handle_key_event(key)?,
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key)?,
            None => {
                let tab_action = match self.home.active_tab {
                    Tab::Videos => self.gallery.handle_key_event(key)?,
                    Tab::Contact => self.contact.handle_key_event(key)?,
                    _ => self.home.handle_key_event(key)?,
                };
                tab_action.or_else(|| Self::global_action(key))
            }
        };

        if let Some(action) = action {
            self.update(action)?;
        }
        Ok(())
    }

    /// Keys handled regardless of the active tab
    fn global_action(key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Esc => Some(Action::CloseAllDetails),
            _ => None,
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<()> {
        if let Some(Modal::Detail { .. }) = self.modals.top() {
            if let Some(action) = self.detail_dialog.handle_mouse_event(mouse)? {
                self.update(action)?;
            }
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Action Dispatch
    // ─────────────────────────────────────────────────────────────────────────

    pub fn update(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Tick => {
                if self.mode == AppMode::Splash {
                    if let Some(follow_up) = self.splash.update(Action::Tick)? {
                        self.update(follow_up)?;
                    }
                }
                self.gallery.tick();
            }
            Action::Resize(_, _) => {}
            Action::ForceQuit => self.should_quit = true,
            Action::SplashComplete => self.mode = AppMode::Running,

            Action::NextItem => self.active_tab_nav(|h| h.next(), |g| g.next(), |c| c.next()),
            Action::PrevItem => {
                self.active_tab_nav(|h| h.previous(), |g| g.previous(), |c| c.previous())
            }
            Action::FirstItem => self.active_tab_nav(
                |h| h.select_first(),
                |g| g.select_first(),
                |c| c.select_first(),
            ),
            Action::LastItem => self.active_tab_nav(
                |h| h.select_last(),
                |g| g.select_last(),
                |c| c.select_last(),
            ),
            Action::NextTab => self.home.next_tab(),
            Action::PrevTab => self.home.previous_tab(),

            Action::OpenDetail(kind, key) => match self.catalog.detail(kind, &key) {
                Some(content) => {
                    self.detail_dialog.open(kind, content);
                    self.modals.push(Modal::Detail { kind, key });
                }
                None => {
                    tracing::error!(kind = kind.name(), key = %key, "unknown catalog key");
                }
            },
            Action::CloseModal => {
                self.modals.pop();
                // The dialog holds only the top record's content, so after
                // unwinding onto another detail entry it must be re-resolved
                if let Some(Modal::Detail { kind, key }) = self.modals.top() {
                    if let Some(content) = self.catalog.detail(*kind, key) {
                        self.detail_dialog.open(*kind, content);
                    }
                }
            }
            Action::CloseAllDetails => self.modals.close_details(),
            Action::OpenInquiryForm => self.modals.push(Modal::InquiryForm),
            Action::SubmitInquiry => {
                if self.inquiry_form.is_valid() {
                    tracing::info!(
                        name = %self.inquiry_form.name,
                        email = %self.inquiry_form.email,
                        "inquiry submitted"
                    );
                    self.inquiry_form.clear();
                    self.modals.pop();
                    self.status_message = Some(INQUIRY_CONFIRMATION.to_string());
                } else {
                    tracing::debug!("inquiry submission rejected, name or email blank");
                }
            }
            Action::OpenHelp => self.modals.push(Modal::Help),
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),

            Action::NextFilter => self.gallery.next_filter(),
            Action::PrevFilter => self.gallery.previous_filter(),
            Action::PlayVideo => {
                if let Some(video) = self.gallery.selected_video() {
                    self.status_message =
                        Some(format!("Video player would open for: {}", video.title));
                }
            }
            Action::LoadMore => {
                self.status_message =
                    Some("More safari videos are on the way. Check back soon!".to_string());
            }
        }
        Ok(())
    }

    fn active_tab_nav(
        &mut self,
        home_nav: impl FnOnce(&mut HomeComponent),
        gallery_nav: impl FnOnce(&mut GalleryComponent),
        contact_nav: impl FnOnce(&mut ContactComponent),
    ) {
        match self.home.active_tab {
            Tab::Videos => gallery_nav(&mut self.gallery),
            Tab::Contact => contact_nav(&mut self.contact),
            _ => home_nav(&mut self.home),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    pub fn draw(&mut self, frame: &mut Frame) -> Result<()> {
        let area = frame.area();

        if self.mode == AppMode::Splash {
            return self.splash.draw(frame, area);
        }

        draw_home_screen(
            frame,
            area,
            &mut self.home,
            &mut self.gallery,
            &mut self.contact,
            self.status_message.as_deref(),
        )?;

        match self.modals.top() {
            Some(Modal::Detail { .. }) => self.detail_dialog.draw(frame, area)?,
            Some(Modal::InquiryForm) => self.inquiry_form.draw(frame, area)?,
            Some(Modal::Help) => self.help_dialog.draw(frame, area)?,
            Some(Modal::QuitConfirm) => self.quit_dialog.draw(frame, area)?,
            None => {}
        }

        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::ContentKind;

    fn app() -> App {
        let config = Config {
            skip_splash: true,
            ..Config::default()
        };
        App::with_config(config)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_open_detail_with_valid_key() {
        let mut a = app();
        a.update(Action::OpenDetail(
            ContentKind::Destination,
            "maasai-mara".to_string(),
        ))
        .unwrap();

        assert_eq!(
            a.modals.top(),
            Some(&Modal::Detail {
                kind: ContentKind::Destination,
                key: "maasai-mara".to_string()
            })
        );
        let content = a.detail_dialog.content().unwrap();
        assert_eq!(content.title, "Maasai Mara National Reserve");
    }

    #[test]
    fn test_open_detail_with_unknown_key_changes_nothing() {
        let mut a = app();
        a.update(Action::OpenDetail(
            ContentKind::Service,
            "skydiving".to_string(),
        ))
        .unwrap();
        assert!(a.modals.is_empty());
    }

    #[test]
    fn test_escape_closes_all_details() {
        let mut a = app();
        a.update(Action::OpenDetail(
            ContentKind::Destination,
            "amboseli".to_string(),
        ))
        .unwrap();
        a.update(Action::OpenDetail(
            ContentKind::ContactMethod,
            "phone".to_string(),
        ))
        .unwrap();

        a.handle_key_event(key(KeyCode::Esc)).unwrap();
        assert!(a.modals.is_empty());

        // Pressing Escape with everything already closed stays closed
        a.handle_key_event(key(KeyCode::Esc)).unwrap();
        assert!(a.modals.is_empty());
    }

    #[test]
    fn test_close_modal_pops_only_top() {
        let mut a = app();
        a.update(Action::OpenDetail(
            ContentKind::Service,
            "guides".to_string(),
        ))
        .unwrap();
        a.update(Action::OpenDetail(
            ContentKind::Destination,
            "samburu".to_string(),
        ))
        .unwrap();

        a.update(Action::CloseModal).unwrap();
        assert_eq!(
            a.modals.top(),
            Some(&Modal::Detail {
                kind: ContentKind::Service,
                key: "guides".to_string()
            })
        );

        a.update(Action::CloseModal).unwrap();
        a.update(Action::CloseModal).unwrap();
        assert!(a.modals.is_empty());
    }

    #[test]
    fn test_unwinding_stacked_details_restores_underlying_content() {
        let mut a = app();
        a.update(Action::OpenDetail(
            ContentKind::Destination,
            "amboseli".to_string(),
        ))
        .unwrap();
        a.update(Action::OpenDetail(
            ContentKind::ContactMethod,
            "phone".to_string(),
        ))
        .unwrap();

        // Closing the top dialog must re-resolve the one now on top
        a.update(Action::CloseModal).unwrap();
        assert_eq!(
            a.modals.top(),
            Some(&Modal::Detail {
                kind: ContentKind::Destination,
                key: "amboseli".to_string()
            })
        );
        let content = a.detail_dialog.content().unwrap();
        assert_eq!(content.title, "Amboseli National Park");
    }

    #[test]
    fn test_submit_complete_inquiry_confirms_and_clears() {
        let mut a = app();
        a.update(Action::OpenInquiryForm).unwrap();
        a.inquiry_form.name = "Asha".to_string();
        a.inquiry_form.email = "asha@example.com".to_string();

        a.update(Action::SubmitInquiry).unwrap();

        assert!(a.modals.is_empty());
        assert!(a.inquiry_form.name.is_empty());
        assert!(a.inquiry_form.email.is_empty());
        assert_eq!(a.status_message.as_deref(), Some(INQUIRY_CONFIRMATION));
    }

    #[test]
    fn test_submit_incomplete_inquiry_keeps_form_open() {
        let mut a = app();
        a.update(Action::OpenInquiryForm).unwrap();
        a.inquiry_form.name = "Asha".to_string();

        a.update(Action::SubmitInquiry).unwrap();

        assert_eq!(a.modals.top(), Some(&Modal::InquiryForm));
        assert_eq!(a.inquiry_form.name, "Asha");
        assert!(a.status_message.is_none());
    }

    #[test]
    fn test_play_video_posts_notice() {
        let mut a = app();
        a.home.active_tab = Tab::Videos;
        a.update(Action::PlayVideo).unwrap();
        let msg = a.status_message.unwrap();
        assert!(msg.starts_with("Video player would open for: "));
    }

    #[test]
    fn test_only_top_modal_receives_input() {
        let mut a = app();
        a.update(Action::OpenDetail(
            ContentKind::Destination,
            "tsavo-east".to_string(),
        ))
        .unwrap();

        // `i` opens the inquiry form from the Contact tab, but while a
        // dialog is open it only reaches the dialog, which ignores it.
        a.home.active_tab = Tab::Contact;
        a.handle_key_event(key(KeyCode::Char('i'))).unwrap();
        assert_eq!(
            a.modals.top(),
            Some(&Modal::Detail {
                kind: ContentKind::Destination,
                key: "tsavo-east".to_string()
            })
        );
    }

    #[test]
    fn test_quit_flow() {
        let mut a = app();
        a.handle_key_event(key(KeyCode::Char('q'))).unwrap();
        assert_eq!(a.modals.top(), Some(&Modal::QuitConfirm));

        a.handle_key_event(key(KeyCode::Char('n'))).unwrap();
        assert!(a.modals.is_empty());
        assert!(!a.should_quit);

        a.handle_key_event(key(KeyCode::Char('q'))).unwrap();
        a.handle_key_event(key(KeyCode::Char('y'))).unwrap();
        assert!(a.should_quit);
    }

    #[test]
    fn test_filter_keys_reach_gallery_on_videos_tab() {
        let mut a = app();
        a.home.active_tab = Tab::Videos;
        a.handle_key_event(key(KeyCode::Char(']'))).unwrap();
        assert_ne!(a.gallery.filter, CategoryFilter::All);
    }

    #[test]
    fn test_splash_completes_on_key() {
        let config = Config::default();
        let mut a = App::with_config(config);
        assert_eq!(a.mode, AppMode::Splash);
        a.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(a.mode, AppMode::Running);
    }

    #[test]
    fn test_config_start_tab_and_filter() {
        let config = Config {
            start_tab: "videos".to_string(),
            default_filter: "culture".to_string(),
            skip_splash: true,
        };
        let a = App::with_config(config);
        assert_eq!(a.home.active_tab, Tab::Videos);
        assert_eq!(
            a.gallery.filter,
            CategoryFilter::Only(crate::model::video::Category::Culture)
        );
    }
}
