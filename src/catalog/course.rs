//! # Course Model
//!
//! The sole managed resource: an `{id, name}` record.

use serde::{Deserialize, Serialize};

/// Course identifier, assigned by the store at creation time.
pub type CourseId = u64;

/// Course record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier (never client-supplied)
    pub id: CourseId,

    /// Course name
    pub name: String,
}

impl Course {
    /// Create a new course record
    pub fn new(id: CourseId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new(1, "course1");
        assert_eq!(course.id, 1);
        assert_eq!(course.name, "course1");
    }

    #[test]
    fn test_course_serialization() {
        let course = Course::new(2, "course2");
        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["name"], "course2");
    }

    #[test]
    fn test_course_deserialization() {
        let course: Course = serde_json::from_str(r#"{"id":3,"name":"course3"}"#).unwrap();
        assert_eq!(course, Course::new(3, "course3"));
    }
}
