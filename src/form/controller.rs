//! The form controller: validation lifecycle and submission flow.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use tracing::{error, info};

use crate::analytics::{LogTracker, Tracker};
use crate::client::{SubmitError, WebhookClient, WebhookConfig};
use crate::model::{Field, LeadRecord, check_field};

use super::event::FormEvent;
use super::view::{FormView, MessageKind};

/// How long a form-level status message stays visible before auto-dismissal.
pub const MESSAGE_DISMISS: Duration = Duration::from_secs(8);

/// Shown after a 2xx response.
pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your information has been submitted successfully. We will contact you soon!";

/// Shown after any submission failure. The specific reason is logged and
/// tracked but never surfaced to the user.
pub const FAILURE_MESSAGE: &str =
    "Sorry, there was an error submitting your information. Please try again or contact us directly.";

/// Owns the form's validation rules, validation lifecycle, and submission
/// lifecycle, driving a [`FormView`] the host provides.
///
/// [`dispatch`](Self::dispatch) must be driven from within a tokio runtime:
/// message dismissal is a spawned timer task.
pub struct FormController<V: FormView + 'static> {
    view: Arc<V>,
    client: WebhookClient,
    tracker: Arc<dyn Tracker>,
    submitting: AtomicBool,
    message_seq: Arc<AtomicU64>,
    message_timeout: Duration,
}

impl<V: FormView + 'static> FormController<V> {
    /// Creates a controller for `view` submitting to the configured endpoint.
    ///
    /// Fails only when `config` cannot produce an HTTP client.
    pub fn new(view: Arc<V>, config: WebhookConfig) -> Result<Self, SubmitError> {
        Ok(Self {
            view,
            client: WebhookClient::new(config)?,
            tracker: Arc::new(LogTracker),
            submitting: AtomicBool::new(false),
            message_seq: Arc::new(AtomicU64::new(0)),
            message_timeout: MESSAGE_DISMISS,
        })
    }

    /// Replaces the default log-based tracker.
    pub fn with_tracker(mut self, tracker: Arc<dyn Tracker>) -> Self {
        self.tracker = tracker;
        self
    }

    /// Overrides how long status messages stay visible.
    pub fn with_message_timeout(mut self, timeout: Duration) -> Self {
        self.message_timeout = timeout;
        self
    }

    /// Routes one host event to its handler.
    pub async fn dispatch(&self, event: FormEvent) {
        match event {
            FormEvent::Focus(field) => {
                self.tracker
                    .track("form_field_focused", &[("field", field.name())]);
            }
            FormEvent::Input(field) => self.clear_errors(field),
            FormEvent::Blur(field) => {
                self.validate_field(field);
            }
            FormEvent::Submit => self.submit().await,
            FormEvent::AnchorClick(href) => self.anchor_click(&href),
            FormEvent::PageLoad(elapsed) => {
                info!(load_ms = elapsed.as_millis() as u64, "page loaded");
            }
        }
    }

    /// Validates one field against its rule and updates the view to match:
    /// clears the error annotation on a valid outcome, shows the rule's
    /// message on an invalid one. Idempotent for an unchanged value.
    pub fn validate_field(&self, field: Field) -> bool {
        let value = self.view.field_value(field);
        match check_field(field, value.trim()) {
            Ok(()) => {
                self.view.clear_field_error(field);
                true
            }
            Err(err) => {
                self.view.set_field_error(field, &err.to_string());
                false
            }
        }
    }

    /// Removes a field's error annotation. Fires on every input edit so
    /// corrections are felt immediately, before the next blur re-validates.
    pub fn clear_errors(&self, field: Field) {
        self.view.clear_field_error(field);
    }

    /// Validates the whole form and, when valid, submits it.
    ///
    /// Required fields are always validated; optional fields only when they
    /// hold a non-empty value. An invalid form aborts silently: the per-field
    /// errors are already visible and no network call is made.
    pub async fn submit(&self) {
        let mut form_valid = true;
        for field in Field::ALL {
            if !field.is_required() && self.view.field_value(field).trim().is_empty() {
                continue;
            }
            if !self.validate_field(field) {
                form_valid = false;
            }
        }
        if !form_valid {
            return;
        }
        self.submit_record().await;
    }

    async fn submit_record(&self) {
        // The view's disabled submit control prevents re-entry from the UI;
        // this guard covers hosts that dispatch anyway.
        if self.submitting.swap(true, Ordering::SeqCst) {
            return;
        }
        self.view.set_submitting(true);

        let lead = LeadRecord::from_fields(|field| self.view.field_value(field));
        match self.client.submit(&lead).await {
            Ok(()) => {
                self.view.reset_fields();
                self.show_message(MessageKind::Success, SUCCESS_MESSAGE);
                self.tracker.track("form_submitted_successfully", &[]);
            }
            Err(err) => {
                error!(%err, "lead submission failed");
                self.show_message(MessageKind::Error, FAILURE_MESSAGE);
                let reason = err.to_string();
                self.tracker
                    .track("form_submission_error", &[("error", reason.as_str())]);
            }
        }

        // Idle state is restored for both outcomes.
        self.view.set_submitting(false);
        self.submitting.store(false, Ordering::SeqCst);
    }

    fn show_message(&self, kind: MessageKind, text: &str) {
        self.view.show_message(kind, text);
        // Each message carries a generation token; a timer whose message was
        // replaced in the meantime must not clear the newer one.
        let token = self.message_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let seq = Arc::clone(&self.message_seq);
        let view = Arc::clone(&self.view);
        let timeout = self.message_timeout;
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            if seq.load(Ordering::SeqCst) == token {
                view.clear_message();
            }
        });
    }

    fn anchor_click(&self, href: &str) {
        if let Some(target) = href.strip_prefix('#')
            && !target.is_empty()
        {
            self.view.scroll_to(target);
        }
    }
}
