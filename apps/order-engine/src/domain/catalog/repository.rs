//! Catalog Repository Trait
//!
//! Defines the read-side persistence abstraction for products and variants.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;

use super::{Product, Variant};
use crate::domain::shared::{ProductId, VariantId};

/// Catalog lookup error.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// Underlying store failed.
    #[error("Catalog query failed: {message}")]
    QueryFailed {
        /// Adapter-provided detail.
        message: String,
    },
}

/// Repository trait for catalog reads.
///
/// Order creation loads all referenced rows in one batch per table so a
/// checkout makes exactly two catalog round trips.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Load products by id. Missing ids are simply absent from the result.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn products_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, CatalogError>;

    /// Load variants by id. Missing ids are simply absent from the result.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn variants_by_ids(&self, ids: &[VariantId]) -> Result<Vec<Variant>, CatalogError>;
}
