//! Form controller, events, and the host view abstraction.

pub mod controller;
pub mod event;
pub mod state;
pub mod view;

pub use controller::{FAILURE_MESSAGE, FormController, MESSAGE_DISMISS, SUCCESS_MESSAGE};
pub use event::FormEvent;
pub use state::FormState;
pub use view::{FormView, MessageKind};
