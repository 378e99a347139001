use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductPatch};
use crate::domain::product::value_objects::{Price, StockCount};

/// Partial update payload. Only supplied fields are validated and applied.
#[derive(Debug, Clone)]
pub struct UpdateProductParams {
    pub id: Uuid,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock_count: Option<i64>,
}

impl UpdateProductParams {
    pub fn validate(self) -> Result<ProductPatch, ProductError> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(ProductError::NameEmpty);
        }
        if let Some(category) = &self.category
            && category.trim().is_empty()
        {
            return Err(ProductError::CategoryEmpty);
        }

        Ok(ProductPatch {
            name: self.name,
            price: self.price.map(Price::new).transpose()?,
            category: self.category,
            stock_count: self.stock_count.map(StockCount::new).transpose()?,
        })
    }
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
