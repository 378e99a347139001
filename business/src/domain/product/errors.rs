#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_required")]
    NameRequired,
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_required")]
    PriceRequired,
    #[error("product.price_invalid")]
    PriceInvalid,
    #[error("product.category_required")]
    CategoryRequired,
    #[error("product.category_empty")]
    CategoryEmpty,
    #[error("product.stock_count_required")]
    StockCountRequired,
    #[error("product.stock_count_invalid")]
    StockCountInvalid,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    /// True for errors caused by the caller's payload rather than by state.
    pub fn is_validation(&self) -> bool {
        !matches!(self, ProductError::NotFound | ProductError::Repository(_))
    }
}
