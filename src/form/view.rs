//! Host abstraction: the surface a document adapter must provide.

use crate::model::Field;

/// Kind of form-level status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// The controller's window onto the host document.
///
/// A host (web page, TUI, test harness) implements this against its own
/// widgets; the controller never touches a document directly. Methods take
/// `&self` because the controller shares the view with a background timer
/// task, so implementations use interior mutability.
pub trait FormView: Send + Sync {
    /// Returns the current raw value of a field. Untrimmed.
    fn field_value(&self, field: Field) -> String;

    /// Marks a field invalid and shows `message` next to it, replacing any
    /// message already shown for that field.
    fn set_field_error(&self, field: Field, message: &str);

    /// Removes the invalid marker and message from a field. No-op when the
    /// field has no error.
    fn clear_field_error(&self, field: Field);

    /// Enters or leaves the submitting state: disable the submit control,
    /// swap its label for an in-progress indicator, toggle the submitting
    /// visual (and the reverse on `false`).
    fn set_submitting(&self, submitting: bool);

    /// Clears every field value and error.
    fn reset_fields(&self);

    /// Shows a form-level status message, replacing any prior one.
    fn show_message(&self, kind: MessageKind, text: &str);

    /// Removes the form-level status message. No-op when none is shown.
    fn clear_message(&self);

    /// Scrolls the document to the element with the given id.
    fn scroll_to(&self, target: &str);
}
