//! Webhook submission client and its error taxonomy.

mod error;
mod webhook;

pub use error::SubmitError;
pub use webhook::{WebhookClient, WebhookConfig};
