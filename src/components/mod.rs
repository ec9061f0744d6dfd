//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering
//! logic. Components communicate through Actions rather than direct state
//! mutation.

pub mod contact;
pub mod detail_dialog;
pub mod gallery;
pub mod help_dialog;
pub mod home;
pub mod inquiry_form;
pub mod layout;
pub mod quit_dialog;
pub mod splash;

pub use contact::ContactComponent;
pub use detail_dialog::DetailDialog;
pub use gallery::GalleryComponent;
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent};
pub use inquiry_form::InquiryFormDialog;
pub use layout::{centered_popup, overlay_area};
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
