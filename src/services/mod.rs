//! Business logic services

pub mod books;
pub mod catalog;
pub mod render;

use std::sync::Arc;

use crate::config::AppConfig;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BookStore,
    pub renderer: Arc<dyn render::ListingRenderer>,
}

impl Services {
    /// Wire services against the configured upstream catalog and template
    pub fn new(config: &AppConfig) -> Self {
        let catalog = catalog::HttpCatalog::new(&config.catalog.url);
        tracing::info!("Using upstream catalog {}", catalog.url());

        Self::with_parts(
            Arc::new(catalog),
            Arc::new(render::TemplateRenderer::new(&config.web.template)),
            config,
        )
    }

    /// Wire services from explicit collaborators
    pub fn with_parts(
        catalog: Arc<dyn catalog::CatalogSource>,
        renderer: Arc<dyn render::ListingRenderer>,
        config: &AppConfig,
    ) -> Self {
        Self {
            books: books::BookStore::new(catalog, config.catalog.id_assignment),
            renderer,
        }
    }
}
