use chrono::{DateTime, Utc};
use uuid::Uuid;

use business::domain::product::model::Product;
use business::domain::product::value_objects::{Price, StockCount};

/// Stored shape of a product. Records are copied in and out so callers
/// never hold references into the store.
#[derive(Debug, Clone)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub price: Price,
    pub category: String,
    pub stock_count: StockCount,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            stock_count: product.stock_count,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }

    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.price,
            self.category,
            self.stock_count,
            self.created_at,
            self.updated_at,
        )
    }
}
