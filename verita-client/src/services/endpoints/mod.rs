//! Named endpoint wrappers.
//!
//! Each method only places parameters (path, query, JSON, form or multipart)
//! and delegates to [`ApiClient::request`](crate::services::ApiClient::request).

mod auth;
mod organizations;
mod projects;
mod tasks;
mod teams;
mod users;
