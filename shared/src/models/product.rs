//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Price in currency unit
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    pub image_url: Option<String>,
}

impl Product {
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::from_stock(self.stock)
    }
}

/// Stock classification used by the products view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    OutOfStock,
    Low,
    InStock,
}

impl StockLevel {
    /// Low-stock threshold: fewer than 5 units remaining.
    pub const LOW_THRESHOLD: i64 = 5;

    pub fn from_stock(stock: i64) -> Self {
        if stock <= 0 {
            StockLevel::OutOfStock
        } else if stock < Self::LOW_THRESHOLD {
            StockLevel::Low
        } else {
            StockLevel::InStock
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_level_boundaries() {
        assert_eq!(StockLevel::from_stock(-1), StockLevel::OutOfStock);
        assert_eq!(StockLevel::from_stock(0), StockLevel::OutOfStock);
        assert_eq!(StockLevel::from_stock(1), StockLevel::Low);
        assert_eq!(StockLevel::from_stock(4), StockLevel::Low);
        assert_eq!(StockLevel::from_stock(5), StockLevel::InStock);
    }
}
