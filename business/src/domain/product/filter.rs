use super::model::Product;

/// Predicates narrowing a product listing. Every supplied predicate must
/// hold; an absent one matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Exact, case-sensitive category match.
    pub category: Option<String>,
    /// `true` keeps products with stock, `false` keeps sold-out ones.
    pub in_stock: Option<bool>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category
            && product.category != *category
        {
            return false;
        }
        if let Some(in_stock) = self.in_stock
            && product.in_stock() != in_stock
        {
            return false;
        }
        true
    }
}
