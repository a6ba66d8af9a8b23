//! Events the host forwards to the controller.

use std::time::Duration;

use crate::model::Field;

/// A discrete user or document event, delivered one at a time by the host's
/// event loop.
///
/// The host registers its native callbacks (blur, input, submit, ...) and
/// translates each into one of these for
/// [`FormController::dispatch`](super::FormController::dispatch).
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// A field gained focus.
    Focus(Field),
    /// A field's value was edited.
    Input(Field),
    /// A field lost focus.
    Blur(Field),
    /// The form's submit control was activated.
    Submit,
    /// An anchor was clicked; carries the raw `href` attribute.
    AnchorClick(String),
    /// The page finished loading after the given elapsed time.
    PageLoad(Duration),
}
