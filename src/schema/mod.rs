//! # Course Schema
//!
//! Declarative constraints for inbound course payloads and the pure
//! validation function that evaluates them.
//!
//! Validation semantics:
//! - The payload must be a JSON object
//! - `name` must be present, a string, non-empty, and at least the
//!   configured minimum length
//! - No undeclared fields are allowed
//! - The first violated rule is reported

mod errors;
mod types;
mod validator;

pub use errors::{ValidationError, ValidationResult};
pub use types::{CourseSchema, StringRule};
pub use validator::validate_course;
