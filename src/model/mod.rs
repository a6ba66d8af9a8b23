mod field;
mod lead;
mod validation;

pub use field::Field;
pub use lead::{LEAD_SOURCE, LeadRecord};
pub use validation::{ValidationError, check_field};
