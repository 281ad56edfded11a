//! Course HTTP Routes
//!
//! Endpoints for listing, creating, renaming, and deleting courses.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::Value;

use crate::catalog::{Course, CourseId, CourseStore};
use crate::schema::{validate_course, CourseSchema};

use super::errors::{ApiError, ApiResult};

/// Greeting served at the root path
const WELCOME_MESSAGE: &str = "Base page. Try looking through the courses available!";

// ==================
// Shared State
// ==================

/// Course API state shared across handlers
pub struct ApiState {
    pub catalog: CourseStore,
    pub schema: CourseSchema,
}

impl ApiState {
    /// State with the seeded catalog and the default course schema
    pub fn new() -> Self {
        Self {
            catalog: CourseStore::with_seed_data(),
            schema: CourseSchema::default(),
        }
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Routes
// ==================

/// Create the root welcome route
pub fn welcome_routes() -> Router {
    Router::new().route("/", get(welcome_handler))
}

/// Create the course CRUD routes
pub fn course_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/api/courses", get(list_courses_handler))
        .route("/api/courses", post(create_course_handler))
        .route("/api/courses/:id", get(get_course_handler))
        .route("/api/courses/:id", put(update_course_handler))
        .route("/api/courses/:id", delete(delete_course_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Parse an `:id` path segment as a base-10 integer.
///
/// A segment that does not parse can never match a stored id, so the
/// id-keyed handlers answer 404 instead of a parse error.
fn parse_course_id(raw: &str) -> Option<CourseId> {
    raw.parse().ok()
}

// ==================
// Handlers
// ==================

async fn welcome_handler() -> &'static str {
    WELCOME_MESSAGE
}

async fn list_courses_handler(State(state): State<Arc<ApiState>>) -> ApiResult<Json<Vec<Course>>> {
    Ok(Json(state.catalog.list_all()?))
}

async fn get_course_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Course>> {
    let course = match parse_course_id(&id) {
        Some(id) => state.catalog.find_by_id(id)?,
        None => None,
    };
    course.map(Json).ok_or(ApiError::CourseNotFound)
}

async fn create_course_handler(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<Course>> {
    let name = validate_course(&state.schema, &payload)?;
    let course = state.catalog.append(name)?;
    Ok(Json(course))
}

async fn update_course_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<Course>> {
    // Existence is checked before the payload: an unknown id answers 404
    // even when the body is invalid.
    let id = parse_course_id(&id).ok_or(ApiError::CourseNotFound)?;
    if state.catalog.find_by_id(id)?.is_none() {
        return Err(ApiError::CourseNotFound);
    }

    let name = validate_course(&state.schema, &payload)?;

    state
        .catalog
        .update_name(id, name)?
        .map(Json)
        .ok_or(ApiError::CourseNotFound)
}

async fn delete_course_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Course>> {
    let id = parse_course_id(&id).ok_or(ApiError::CourseNotFound)?;
    state
        .catalog
        .remove(id)?
        .map(Json)
        .ok_or(ApiError::CourseNotFound)
}
