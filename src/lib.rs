pub mod db;
pub mod domain;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Role name granting access to user management and the audit log.
pub const ADMIN_ROLE: &str = "Administrator";
