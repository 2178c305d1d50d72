//! In-memory book store seeded from the upstream catalog
//!
//! The store keeps two lists: the seed, fetched once and never edited, and the
//! working set that the CRUD routes mutate. Every operation runs under one
//! exclusive lock, including the upstream fetch during the first listing, so
//! no two requests ever interleave.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    config::IdAssignment,
    error::{AppError, AppResult},
    models::book::Book,
    services::catalog::CatalogSource,
};

#[derive(Default)]
struct StoreState {
    seed: Vec<Book>,
    books: Vec<Book>,
    /// Highest id handed out so far (monotonic assignment only)
    high_water: i64,
}

impl StoreState {
    fn ensure_working_set(&mut self) {
        if self.books.is_empty() {
            self.books = self.seed.clone();
        }
    }

    fn next_id(&mut self, policy: IdAssignment) -> i64 {
        match policy {
            IdAssignment::Length => self.books.len() as i64 + 1,
            IdAssignment::Monotonic => {
                let current = self.books.iter().map(|b| b.id).max().unwrap_or(0);
                self.high_water = self.high_water.max(current) + 1;
                self.high_water
            }
        }
    }
}

#[derive(Clone)]
pub struct BookStore {
    catalog: Arc<dyn CatalogSource>,
    id_assignment: IdAssignment,
    state: Arc<Mutex<StoreState>>,
}

impl BookStore {
    pub fn new(catalog: Arc<dyn CatalogSource>, id_assignment: IdAssignment) -> Self {
        Self {
            catalog,
            id_assignment,
            state: Arc::new(Mutex::new(StoreState::default())),
        }
    }

    /// Current working set, fetching the seed first if it is still empty.
    ///
    /// A failed fetch leaves the seed empty so the next call tries again.
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let mut state = self.state.lock().await;

        if state.seed.is_empty() {
            state.seed = self.catalog.fetch().await?;
            tracing::info!("Seeded store with {} books", state.seed.len());
        }
        state.ensure_working_set();

        Ok(state.books.clone())
    }

    /// Append a book, assigning its id
    pub async fn insert(&self, mut book: Book) -> AppResult<Book> {
        let mut state = self.state.lock().await;

        book.id = state.next_id(self.id_assignment);
        state.books.push(book.clone());

        tracing::debug!("Added book {} ({} in working set)", book.id, state.books.len());
        Ok(book)
    }

    /// Replace the first book with this id; the stored record keeps `id`
    pub async fn update(&self, id: i64, mut book: Book) -> AppResult<Book> {
        let mut state = self.state.lock().await;

        let slot = state
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(AppError::NotFound)?;
        book.id = id;
        *slot = book.clone();

        tracing::debug!("Updated book {}", id);
        Ok(book)
    }

    /// Remove the first book with this id, keeping the order of the rest
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut state = self.state.lock().await;

        let index = state
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or(AppError::NotFound)?;
        state.books.remove(index);

        tracing::debug!("Deleted book {}", id);
        Ok(())
    }

    /// Restore the working set to a fresh copy of the seed. Never fetches.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        state.books = state.seed.clone();
        tracing::info!("Reset working set to {} seeded books", state.books.len());
    }

    /// Whether the upstream catalog has been fetched successfully
    pub async fn is_seeded(&self) -> bool {
        !self.state.lock().await.seed.is_empty()
    }
}
