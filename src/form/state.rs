//! In-memory [`FormView`] implementation.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::model::Field;

use super::view::{FormView, MessageKind};

#[derive(Debug, Default)]
struct Inner {
    values: HashMap<Field, String>,
    errors: HashMap<Field, String>,
    submitting: bool,
    message: Option<(MessageKind, String)>,
    scroll_requests: Vec<String>,
}

/// A plain in-memory form: values, per-field errors, submitting flag, and the
/// current status message.
///
/// Hosts can use it as the backing state behind a real document adapter; the
/// test suites drive the controller against it directly.
#[derive(Debug, Default)]
pub struct FormState {
    inner: Mutex<Inner>,
}

impl FormState {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field's value, as the host would on user input.
    pub fn set_value(&self, field: Field, value: impl Into<String>) {
        self.lock().values.insert(field, value.into());
    }

    /// Returns a field's current value, or empty if never set.
    pub fn value(&self, field: Field) -> String {
        self.lock().values.get(&field).cloned().unwrap_or_default()
    }

    /// Returns the error message currently shown for a field, if any.
    pub fn error(&self, field: Field) -> Option<String> {
        self.lock().errors.get(&field).cloned()
    }

    /// Returns `true` if any field has an error shown.
    pub fn has_errors(&self) -> bool {
        !self.lock().errors.is_empty()
    }

    /// Returns `true` while the submit control is in the submitting state.
    pub fn is_submitting(&self) -> bool {
        self.lock().submitting
    }

    /// Returns the current form-level message, if one is shown.
    pub fn message(&self) -> Option<(MessageKind, String)> {
        self.lock().message.clone()
    }

    /// Returns every scroll target requested so far, in order.
    pub fn scroll_requests(&self) -> Vec<String> {
        self.lock().scroll_requests.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FormView for FormState {
    fn field_value(&self, field: Field) -> String {
        self.value(field)
    }

    fn set_field_error(&self, field: Field, message: &str) {
        self.lock().errors.insert(field, message.to_string());
    }

    fn clear_field_error(&self, field: Field) {
        self.lock().errors.remove(&field);
    }

    fn set_submitting(&self, submitting: bool) {
        self.lock().submitting = submitting;
    }

    fn reset_fields(&self) {
        let mut inner = self.lock();
        inner.values.clear();
        inner.errors.clear();
    }

    fn show_message(&self, kind: MessageKind, text: &str) {
        self.lock().message = Some((kind, text.to_string()));
    }

    fn clear_message(&self) {
        self.lock().message = None;
    }

    fn scroll_to(&self, target: &str) {
        self.lock().scroll_requests.push(target.to_string());
    }
}
