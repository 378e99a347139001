use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::product::filter::ProductFilter;
use business::domain::product::model::Product;
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::use_cases::update::UpdateProductParams;

/// Every field is optional on the wire so that a missing field becomes a
/// domain validation error instead of a framework parse error.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Product name (required, cannot be blank)
    pub name: Option<String>,
    /// Unit price (required, >= 0)
    pub price: Option<f64>,
    /// Category label (required, cannot be blank)
    pub category: Option<String>,
    /// Units on hand (required, >= 0)
    pub stock_count: Option<i64>,
}

impl From<CreateProductRequest> for CreateProductParams {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            name: request.name,
            price: request.price,
            category: request.category,
            stock_count: request.stock_count,
        }
    }
}

/// Partial update: omitted fields keep their stored value.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    /// New product name
    pub name: Option<String>,
    /// New unit price (>= 0)
    pub price: Option<f64>,
    /// New category label
    pub category: Option<String>,
    /// New units on hand (>= 0)
    pub stock_count: Option<i64>,
}

impl UpdateProductRequest {
    pub fn into_params(self, id: Uuid) -> UpdateProductParams {
        UpdateProductParams {
            id,
            name: self.name,
            price: self.price,
            category: self.category,
            stock_count: self.stock_count,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Category label
    pub category: String,
    /// Units on hand
    pub stock_count: u32,
    /// Whether at least one unit is on hand
    pub in_stock: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            in_stock: product.in_stock(),
            name: product.name,
            price: product.price.value(),
            category: product.category,
            stock_count: product.stock_count.value(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
}

/// Builds a listing filter from raw query values. Blank or unrecognised
/// values are treated as absent.
pub fn product_filter(category: Option<String>, in_stock: Option<String>) -> ProductFilter {
    ProductFilter {
        category: category.filter(|c| !c.trim().is_empty()),
        in_stock: in_stock.as_deref().and_then(parse_flag),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
