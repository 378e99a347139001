use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::filter::ProductFilter;
use business::domain::product::model::{Product, ProductPatch};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

/// Process-local product store.
///
/// Rows are kept in insertion order. Every mutation runs entirely under
/// the write lock, so a concurrent `list` sees each change whole or not at all.
#[derive(Default)]
pub struct ProductRepositoryInMemory {
    rows: RwLock<Vec<ProductEntity>>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .cloned()
            .map(ProductEntity::into_domain)
            .filter(|product| filter.matches(product))
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let rows = self.rows.read().await;
        rows.iter()
            .find(|row| row.id == id)
            .cloned()
            .map(ProductEntity::into_domain)
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|row| row.id == product.id) {
            tracing::warn!(id = %product.id, "refusing to insert duplicate product id");
            return Err(RepositoryError::Duplicated);
        }
        rows.push(ProductEntity::from_domain(product));
        tracing::debug!(id = %product.id, total = rows.len(), "product inserted");
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &ProductPatch) -> Result<Product, RepositoryError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(RepositoryError::NotFound)?;

        let mut product = row.clone().into_domain();
        product.apply(patch);
        *row = ProductEntity::from_domain(&product);

        tracing::debug!(%id, "product updated");
        Ok(product)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().await;
        let index = rows
            .iter()
            .position(|row| row.id == id)
            .ok_or(RepositoryError::NotFound)?;

        // `remove` rather than `swap_remove` keeps insertion order
        rows.remove(index);
        tracing::debug!(%id, total = rows.len(), "product deleted");
        Ok(())
    }
}
