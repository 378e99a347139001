use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::{Price, StockCount};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: Price,
    pub category: String,
    pub stock_count: StockCount,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub price: Price,
    pub category: String,
    pub stock_count: StockCount,
}

/// Field-by-field changes for an existing product. `None` leaves the
/// stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Price>,
    pub category: Option<String>,
    pub stock_count: Option<StockCount>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.stock_count.is_none()
    }
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.category.trim().is_empty() {
            return Err(ProductError::CategoryEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            price: props.price,
            category: props.category,
            stock_count: props.stock_count,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        price: Price,
        category: String,
        stock_count: StockCount,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            category,
            stock_count,
            created_at,
            updated_at,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.stock_count.is_positive()
    }

    /// Applies a validated patch in place. The id and creation time never change.
    pub fn apply(&mut self, patch: &ProductPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(stock_count) = patch.stock_count {
            self.stock_count = stock_count;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: &str, category: &str) -> NewProductProps {
        NewProductProps {
            name: name.to_string(),
            price: Price::new(199.99).unwrap(),
            category: category.to_string(),
            stock_count: StockCount::new(15).unwrap(),
        }
    }

    #[test]
    fn should_create_product_when_props_valid() {
        let product = Product::new(props("Smart Watch", "electronics")).unwrap();

        assert_eq!(product.name, "Smart Watch");
        assert_eq!(product.price.value(), 199.99);
        assert_eq!(product.category, "electronics");
        assert_eq!(product.stock_count.value(), 15);
        assert!(product.in_stock());
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn should_assign_distinct_ids() {
        let first = Product::new(props("Smart Watch", "electronics")).unwrap();
        let second = Product::new(props("Smart Watch", "electronics")).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn should_reject_blank_name() {
        let result = Product::new(props("   ", "electronics"));
        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[test]
    fn should_reject_blank_category() {
        let result = Product::new(props("Smart Watch", ""));
        assert!(matches!(result.unwrap_err(), ProductError::CategoryEmpty));
    }

    #[test]
    fn should_apply_only_supplied_fields() {
        let mut product = Product::new(props("Smart Watch", "electronics")).unwrap();
        let id = product.id;
        let created_at = product.created_at;

        product.apply(&ProductPatch {
            price: Some(Price::new(179.99).unwrap()),
            stock_count: Some(StockCount::new(10).unwrap()),
            ..ProductPatch::default()
        });

        assert_eq!(product.id, id);
        assert_eq!(product.created_at, created_at);
        assert_eq!(product.name, "Smart Watch");
        assert_eq!(product.category, "electronics");
        assert_eq!(product.price.value(), 179.99);
        assert_eq!(product.stock_count.value(), 10);
    }

    #[test]
    fn should_report_out_of_stock_after_patch_to_zero() {
        let mut product = Product::new(props("Smart Watch", "electronics")).unwrap();
        product.apply(&ProductPatch {
            stock_count: Some(StockCount::new(0).unwrap()),
            ..ProductPatch::default()
        });
        assert!(!product.in_stock());
    }

    #[test]
    fn should_detect_empty_patch() {
        assert!(ProductPatch::default().is_empty());
        let patch = ProductPatch {
            name: Some("Watch".to_string()),
            ..ProductPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
