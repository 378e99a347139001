use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::filter::ProductFilter;
use super::model::{Product, ProductPatch};

/// Storage port for products.
///
/// Implementations own the collection. Each mutating call must be atomic
/// with respect to every other call, and results are always copies.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Matching products in insertion order.
    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn update(&self, id: Uuid, patch: &ProductPatch) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
