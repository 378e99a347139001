use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        let id = params.id;
        self.logger.info(&format!("Updating product: {}", id));

        let patch = match params.validate() {
            Ok(patch) => patch,
            Err(validation_error) => {
                // An unknown id outranks a bad payload.
                self.ensure_exists(id).await?;
                self.logger.warn(&format!(
                    "Rejected update for product {}: {}",
                    id, validation_error
                ));
                return Err(validation_error);
            }
        };

        if patch.is_empty() {
            self.logger
                .debug(&format!("Empty update for product {}", id));
        }

        let updated_product = self
            .repository
            .update(id, &patch)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger.info(&format!(
            "Product updated: {} (price {}, stock {})",
            updated_product.id, updated_product.price, updated_product.stock_count
        ));
        Ok(updated_product)
    }
}

impl UpdateProductUseCaseImpl {
    async fn ensure_exists(&self, id: Uuid) -> Result<(), ProductError> {
        match self.repository.get_by_id(id).await {
            Ok(_) => Ok(()),
            Err(RepositoryError::NotFound) => {
                self.logger
                    .warn(&format!("Product not found for update: {}", id));
                Err(ProductError::NotFound)
            }
            Err(other) => Err(ProductError::Repository(other)),
        }
    }
}
