
use crate::models::Route;

/// Catalog section a product is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    NewArrivals,
    Gallery,
    Bestsellers,
}

impl Category {
    /// Human-readable label, also used for search matching
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewArrivals => "New Arrivals",
            Self::Gallery => "Gallery",
            Self::Bestsellers => "Bestsellers",
        }
    }

    /// Page a search hit in this category leads to
    pub const fn route(self) -> Route {
        match self {
            Self::NewArrivals => Route::NewArrivals,
            Self::Gallery => Route::Gallery,
            Self::Bestsellers => Route::Bestsellers,
        }
    }
}

/// A single perfume record. Immutable for the lifetime of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub image: &'static str,
    /// Price in cents
    pub price_cents: u32,
}

impl Product {
    /// Price formatted for display, e.g. `$199.99`
    pub fn formatted_price(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }

    /// Case-insensitive substring match against name, description and category label.
    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        [self.name, self.description, self.category.label()]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// The storefront catalog.
pub static CATALOG: [Product; 3] = [
    Product {
        id: "1",
        name: "Luxury Collection Perfume",
        description: "Our signature fragrance line",
        category: Category::Bestsellers,
        image: "https://images.unsplash.com/photo-1563170351-be82bc888aa4?ixlib=rb-4.0.3&auto=format&fit=crop&w=2340&q=80",
        price_cents: 19_999,
    },
    Product {
        id: "2",
        name: "Premium Series Fragrance",
        description: "Exclusive scents for the discerning",
        category: Category::NewArrivals,
        image: "https://images.unsplash.com/photo-1596462502278-27bfdc403348?ixlib=rb-4.0.3&auto=format&fit=crop&w=2340&q=80",
        price_cents: 24_999,
    },
    Product {
        id: "3",
        name: "Classic Collection",
        description: "Timeless fragrances",
        category: Category::Gallery,
        image: "https://images.unsplash.com/photo-1594035910387-fea47794261f?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        price_cents: 14_999,
    },
];

/// Filter `catalog` down to the products matching `query`, preserving catalog order.
///
/// An empty query yields no results rather than the whole catalog.
pub fn search(catalog: &[Product], query: &str) -> Vec<Product> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|product| product.matches(&needle))
        .copied()
        .collect()
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn naive_filter(query: &str) -> Vec<Product> {
        let q = query.to_lowercase();
        CATALOG
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&q)
                    || p.description.to_lowercase().contains(&q)
                    || p.category.label().to_lowercase().contains(&q)
            })
            .copied()
            .collect()
    }

    proptest! {
        #[test]
        fn test_results_equal_case_insensitive_filter(query in "[a-zA-Z ]{1,12}") {
            prop_assert_eq!(search(&CATALOG, &query), naive_filter(&query));
        }

        #[test]
        fn test_results_are_catalog_subsequence(query in "\\PC{0,8}") {
            let results = search(&CATALOG, &query);
            let mut cursor = CATALOG.iter();
            for hit in &results {
                prop_assert!(cursor.any(|p| p == hit));
            }
            prop_assert_eq!(results.is_empty(), query.is_empty() || naive_filter(&query).is_empty());
        }

        #[test]
        fn test_substrings_of_names_always_hit(start in 0usize..10, len in 1usize..8) {
            for product in &CATALOG {
                let end = (start + len).min(product.name.len());
                if start < end {
                    let fragment = &product.name[start..end];
                    prop_assert!(search(&CATALOG, fragment).contains(product));
                }
            }
        }
    }
}
