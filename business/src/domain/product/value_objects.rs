use super::errors::ProductError;

/// Unit price of a product. Always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, ProductError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ProductError::PriceInvalid);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Units on hand. Built from a signed value so that negative input from
/// the boundary is reported instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StockCount(u32);

impl StockCount {
    pub fn new(value: i64) -> Result<Self, ProductError> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| ProductError::StockCountInvalid)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for StockCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
