//! Book model

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use utoipa::ToSchema;

/// Book record. Every text field is free-form; missing or null fields decode as empty.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Book {
    /// Assigned by the store; ignored on input
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub author: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub genre: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub description: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub isbn: String,
    /// Image URL
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub image: String,
    /// Publication date as given by the source
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub published: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub publisher: String,
}

/// Envelope returned by the upstream catalog. Only `data` is consumed.
#[derive(Debug, Deserialize)]
pub struct CatalogEnvelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub data: Vec<Book>,
}
