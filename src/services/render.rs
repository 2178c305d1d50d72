//! Listing page rendering

use std::path::PathBuf;

use async_trait::async_trait;
use minijinja::{context, AutoEscape, Environment};

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

/// Turns the working set into the listing page
#[async_trait]
pub trait ListingRenderer: Send + Sync {
    async fn render(&self, books: &[Book]) -> AppResult<String>;
}

/// Renders a Jinja-style HTML template with `books` and `count` in scope.
///
/// The file is read on every render so edits show up without a restart.
/// Output is HTML-escaped regardless of the file name.
pub struct TemplateRenderer {
    path: PathBuf,
    env: Environment<'static>,
}

impl TemplateRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        Self {
            path: path.into(),
            env,
        }
    }
}

#[async_trait]
impl ListingRenderer for TemplateRenderer {
    async fn render(&self, books: &[Book]) -> AppResult<String> {
        let source = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| AppError::Render(format!("{}: {}", self.path.display(), e)))?;

        self.env
            .render_str(&source, context! { books => books, count => books.len() })
            .map_err(|e| AppError::Render(e.to_string()))
    }
}
