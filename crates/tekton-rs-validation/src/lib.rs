//! Admission validation for TektonConfig resources.
//!
//! Every rule returns a [`FieldError`] value, possibly empty. Section
//! validators merge the results of their rules in evaluation order and the
//! [`Validator`] merges the sections, so one call reports every problem in a
//! single deterministic, path-qualified message.

mod field_error;
mod path;
pub mod rules;
mod sections;
mod validator;

pub use field_error::{FieldError, FieldErrorEntry};
pub use path::FieldPath;
pub use rules::Presence;
pub use validator::{OperationContext, Validate, Validator};
