//! Bookshelf
//!
//! A small HTTP service that fetches a book catalog from an upstream API once,
//! keeps an editable copy in memory, and serves it as an HTML listing plus
//! JSON add/update/delete/reset routes.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
