//! Payload validator
//!
//! Evaluates a `CourseSchema` against an untyped JSON payload. The
//! validator does not mutate the payload and is deterministic: the same
//! payload always produces the same outcome.

use serde_json::Value;

use super::errors::{ValidationError, ValidationResult};
use super::types::CourseSchema;

/// Validate a course payload against the schema.
///
/// Returns the validated `name` on success, or the first violated rule.
/// Used as a gate before create and update operations.
pub fn validate_course(schema: &CourseSchema, payload: &Value) -> ValidationResult<String> {
    let fields = payload.as_object().ok_or(ValidationError::NotAnObject)?;

    let name = match fields.get("name") {
        Some(value) => {
            let name = value
                .as_str()
                .ok_or_else(|| ValidationError::not_a_string("name"))?;
            if name.is_empty() {
                return Err(ValidationError::empty_string("name"));
            }
            if name.chars().count() < schema.name.min_length {
                return Err(ValidationError::too_short("name", schema.name.min_length));
            }
            name.to_string()
        }
        None if schema.name.required => return Err(ValidationError::missing_field("name")),
        None => String::new(),
    };

    // No undeclared fields
    for key in fields.keys() {
        if key != "name" {
            return Err(ValidationError::undeclared_field(key));
        }
    }

    Ok(name)
}
