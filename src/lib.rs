#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Host-agnostic lead capture form controller.
//!
//! The [`form::FormController`] owns validation rules and the submission
//! lifecycle; a host adapts its document to the [`form::FormView`] trait and
//! forwards [`form::FormEvent`]s. Accepted submissions become one JSON POST
//! of a [`model::LeadRecord`] to a configured webhook endpoint.

pub mod analytics;
pub mod client;
pub mod form;
pub mod model;

pub use client::{SubmitError, WebhookClient, WebhookConfig};
pub use form::{FormController, FormEvent, FormState, FormView, MessageKind};
pub use model::{Field, LeadRecord};
