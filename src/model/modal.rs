//! Modal stack for managing overlays
//!
//! The three content dialogs, the inquiry form, help, and quit confirm all
//! live on one enum-based stack instead of a boolean flag per overlay.
//! Only the top modal receives input; the screen below is effectively
//! scroll-locked while anything is open.

use super::catalog::ContentKind;

/// A modal overlay displayed on top of the main UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Content detail dialog, one per catalog table
    Detail { kind: ContentKind, key: String },
    /// Inquiry form
    InquiryForm,
    /// Keyboard shortcut help
    Help,
    /// Quit confirmation dialog
    QuitConfirm,
}

/// A stack of modal overlays
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    /// Pop the top modal; a no-op returning `None` when nothing is open
    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Close every content detail dialog, open or not
    ///
    /// Escape triggers this for all three detail kinds at once; closing an
    /// already-closed one is the intended idempotent no-op. Other overlays
    /// (help, quit, form) are left alone.
    pub fn close_details(&mut self) {
        self.stack.retain(|m| !matches!(m, Modal::Detail { .. }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(kind: ContentKind, key: &str) -> Modal {
        Modal::Detail {
            kind,
            key: key.to_string(),
        }
    }

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::QuitConfirm);
        stack.push(detail(ContentKind::Service, "guides"));

        assert_eq!(stack.pop(), Some(detail(ContentKind::Service, "guides")));
        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_pop_on_empty_stack_is_noop() {
        let mut stack = ModalStack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_close_details_removes_every_kind() {
        let mut stack = ModalStack::new();
        stack.push(detail(ContentKind::Destination, "samburu"));
        stack.push(detail(ContentKind::ContactMethod, "phone"));

        stack.close_details();
        assert!(stack.is_empty());

        // Already closed: closing again stays closed, no error
        stack.close_details();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_close_details_keeps_other_overlays() {
        let mut stack = ModalStack::new();
        stack.push(Modal::Help);
        stack.push(detail(ContentKind::Destination, "amboseli"));

        stack.close_details();
        assert_eq!(stack.top(), Some(&Modal::Help));
    }
}
