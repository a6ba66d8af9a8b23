use thiserror::Error;

/// Errors from the webhook submission boundary.
///
/// All variants are caught at that boundary: none is fatal to the form, and
/// the UI state is restored after every one.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The endpoint answered with a non-2xx status. `message` comes from the
    /// response body's `message` field when present, else a synthesized
    /// `Server error: <status>` string. `Display` is the message alone, which
    /// is what the tracking hook records.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request failed before any response was received.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The client could not be constructed from the given configuration.
    #[error("invalid webhook configuration: {0}")]
    Config(String),
}
