//! Action enum - all possible application actions
//!
//! Actions are the explicit dispatch interface: key bindings convert events
//! into Actions, and the App processes them. No component calls into another
//! directly, and nothing is exposed as an ambient global entry point.

use crate::model::catalog::ContentKind;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations/updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next item in the active list
    NextItem,
    /// Move to previous item in the active list
    PrevItem,
    /// Jump to first item
    FirstItem,
    /// Jump to last item
    LastItem,
    /// Move to next tab
    NextTab,
    /// Move to previous tab
    PrevTab,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the detail dialog for a key in one of the content tables
    OpenDetail(ContentKind, String),
    /// Close the top modal
    CloseModal,
    /// Close all content detail dialogs, open or not (Escape)
    CloseAllDetails,
    /// Open the inquiry form
    OpenInquiryForm,
    /// Submit the inquiry form
    SubmitInquiry,
    /// Open the help dialog
    OpenHelp,
    /// Open the quit confirmation dialog
    OpenQuitDialog,

    // ─────────────────────────────────────────────────────────────────────────
    // Gallery
    // ─────────────────────────────────────────────────────────────────────────
    /// Select the next category filter
    NextFilter,
    /// Select the previous category filter
    PrevFilter,
    /// "Play" the selected video (placeholder notice)
    PlayVideo,
    /// "Load more" videos (placeholder notice)
    LoadMore,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::OpenDetail(kind, key) => write!(f, "OpenDetail({}, {})", kind, key),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::CloseAllDetails => write!(f, "CloseAllDetails"),
            Action::OpenInquiryForm => write!(f, "OpenInquiryForm"),
            Action::SubmitInquiry => write!(f, "SubmitInquiry"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::NextFilter => write!(f, "NextFilter"),
            Action::PrevFilter => write!(f, "PrevFilter"),
            Action::PlayVideo => write!(f, "PlayVideo"),
            Action::LoadMore => write!(f, "LoadMore"),
        }
    }
}
