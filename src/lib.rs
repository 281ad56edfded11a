//! courseboard - a minimal in-memory course catalog HTTP service

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod schema;
