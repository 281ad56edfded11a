//! # HTTP Server
//!
//! Axum-based HTTP layer for the course catalog: configuration, the
//! course CRUD routes, and the server assembly.

pub mod config;
pub mod course_routes;
pub mod errors;
pub mod server;

pub use config::HttpServerConfig;
pub use course_routes::{course_routes, welcome_routes, ApiState};
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
