use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::value_objects::{Price, StockCount};

/// Raw create payload as received from the boundary. Every field may be
/// missing; `validate` decides whether it describes a product.
#[derive(Debug, Clone, Default)]
pub struct CreateProductParams {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock_count: Option<i64>,
}

impl CreateProductParams {
    pub fn validate(self) -> Result<NewProductProps, ProductError> {
        let name = self.name.ok_or(ProductError::NameRequired)?;
        let price = self.price.ok_or(ProductError::PriceRequired)?;
        let category = self.category.ok_or(ProductError::CategoryRequired)?;
        let stock_count = self.stock_count.ok_or(ProductError::StockCountRequired)?;

        Ok(NewProductProps {
            name,
            price: Price::new(price)?,
            category,
            stock_count: StockCount::new(stock_count)?,
        })
    }
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
