//! # Course Store
//!
//! Ordered in-memory collection of courses behind a reader-writer lock.
//!
//! The HTTP runtime handles requests on multiple threads, so every
//! read-modify-write sequence (lookup + mutate, length read + append)
//! must complete inside a single lock acquisition. No operation holds
//! the lock across an await point.

use std::sync::RwLock;

use super::course::{Course, CourseId};
use super::errors::{StoreError, StoreResult};

/// In-memory course store
///
/// Ids are assigned as `current length + 1`. After deleting the course
/// with the highest id, the next append reuses that id; this mirrors the
/// documented assignment scheme and is not corrected here.
#[derive(Debug, Default)]
pub struct CourseStore {
    courses: RwLock<Vec<Course>>,
}

impl CourseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the three startup records
    pub fn with_seed_data() -> Self {
        Self {
            courses: RwLock::new(vec![
                Course::new(1, "course1"),
                Course::new(2, "course2"),
                Course::new(3, "course3"),
            ]),
        }
    }

    /// Return all courses in insertion order
    pub fn list_all(&self) -> StoreResult<Vec<Course>> {
        let courses = self.courses.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(courses.clone())
    }

    /// Find a course by its id
    pub fn find_by_id(&self, id: CourseId) -> StoreResult<Option<Course>> {
        let courses = self.courses.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(courses.iter().find(|c| c.id == id).cloned())
    }

    /// Append a new course, assigning `id = length + 1`
    pub fn append(&self, name: String) -> StoreResult<Course> {
        let mut courses = self.courses.write().map_err(|_| StoreError::LockPoisoned)?;
        let course = Course::new(courses.len() as CourseId + 1, name);
        courses.push(course.clone());
        Ok(course)
    }

    /// Rename a course in place; `None` when no course has the id
    pub fn update_name(&self, id: CourseId, name: String) -> StoreResult<Option<Course>> {
        let mut courses = self.courses.write().map_err(|_| StoreError::LockPoisoned)?;
        match courses.iter_mut().find(|c| c.id == id) {
            Some(course) => {
                course.name = name;
                Ok(Some(course.clone()))
            }
            None => Ok(None),
        }
    }

    /// Remove a course, returning the removed record; `None` when absent
    pub fn remove(&self, id: CourseId) -> StoreResult<Option<Course>> {
        let mut courses = self.courses.write().map_err(|_| StoreError::LockPoisoned)?;
        match courses.iter().position(|c| c.id == id) {
            Some(index) => Ok(Some(courses.remove(index))),
            None => Ok(None),
        }
    }

    /// Number of stored courses
    pub fn len(&self) -> StoreResult<usize> {
        let courses = self.courses.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(courses.len())
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
