//! Products view pipeline

use shared::models::{Product, StockLevel};

use super::contains_ci;

/// Sort keys offered by the products table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    StockAsc,
    StockDesc,
}

/// Stock availability filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockFilter {
    /// Any stock remaining
    InStock,
    OutOfStock,
    /// Low but not sold out
    Low,
}

impl StockFilter {
    fn matches(self, product: &Product) -> bool {
        match self {
            StockFilter::InStock => product.stock > 0,
            StockFilter::OutOfStock => product.stock <= 0,
            StockFilter::Low => product.stock_level() == StockLevel::Low,
        }
    }
}

/// UI-driven filter parameters for the products table
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Matched against name and description
    pub search: Option<String>,
    pub stock: Option<StockFilter>,
    pub sort: Option<ProductSort>,
}

impl ProductFilter {
    /// Produce the display copy without touching the source collection.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut result: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();

        match self.sort {
            Some(ProductSort::NameAsc) => result.sort_by(|a, b| a.name.cmp(&b.name)),
            Some(ProductSort::NameDesc) => result.sort_by(|a, b| b.name.cmp(&a.name)),
            Some(ProductSort::PriceAsc) => result.sort_by(|a, b| a.price.total_cmp(&b.price)),
            Some(ProductSort::PriceDesc) => result.sort_by(|a, b| b.price.total_cmp(&a.price)),
            Some(ProductSort::StockAsc) => result.sort_by_key(|p| p.stock),
            Some(ProductSort::StockDesc) => result.sort_by_key(|p| std::cmp::Reverse(p.stock)),
            None => {}
        }

        result
    }

    fn matches(&self, product: &Product) -> bool {
        if let Some(term) = self.search.as_deref().filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            let hit = contains_ci(&product.name, &term)
                || product
                    .description
                    .as_deref()
                    .is_some_and(|d| contains_ci(d, &term));
            if !hit {
                return false;
            }
        }

        if let Some(stock) = self.stock {
            if !stock.matches(product) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, price: f64, stock: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: Some(format!("{} description", name)),
            price,
            stock,
            image_url: None,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Tuna", 50.0, 0),
            product(2, "Salmon", 120.0, 3),
            product(3, "Anchovy", 15.0, 40),
        ]
    }

    #[test]
    fn search_matches_name_and_description() {
        let products = sample();
        let by_name = ProductFilter {
            search: Some("salm".into()),
            ..Default::default()
        };
        assert_eq!(by_name.apply(&products).len(), 1);

        let by_description = ProductFilter {
            search: Some("anchovy desc".into()),
            ..Default::default()
        };
        assert_eq!(by_description.apply(&products)[0].id, 3);
    }

    #[test]
    fn stock_filter_boundaries() {
        let products = vec![
            product(1, "a", 1.0, 0),
            product(2, "b", 1.0, 1),
            product(3, "c", 1.0, 4),
            product(4, "d", 1.0, 5),
        ];

        let out = ProductFilter {
            stock: Some(StockFilter::OutOfStock),
            ..Default::default()
        };
        assert_eq!(out.apply(&products).len(), 1);

        let low = ProductFilter {
            stock: Some(StockFilter::Low),
            ..Default::default()
        };
        assert_eq!(
            low.apply(&products).iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![2, 3]
        );

        let available = ProductFilter {
            stock: Some(StockFilter::InStock),
            ..Default::default()
        };
        assert_eq!(available.apply(&products).len(), 3);
    }

    #[test]
    fn price_sort_ascending() {
        let filter = ProductFilter {
            sort: Some(ProductSort::PriceAsc),
            ..Default::default()
        };
        let prices: Vec<f64> = filter.apply(&sample()).iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![15.0, 50.0, 120.0]);
    }

    #[test]
    fn empty_collection_never_panics() {
        let filter = ProductFilter {
            search: Some("x".into()),
            stock: Some(StockFilter::Low),
            sort: Some(ProductSort::StockDesc),
        };
        assert!(filter.apply(&[]).is_empty());
    }
}
