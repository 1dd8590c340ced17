pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod startup;

pub use error::ApiError;
pub use services::{ApiClient, AuthEvent, Session, SessionState};
