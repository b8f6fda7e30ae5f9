//! Integration tests for Shopfront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopfront-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_scenarios` - Listing and cart behaviour through `Storefront::dispatch`
//! - `cart_persistence` - Cart round trips through the file-backed store
//! - `catalog_fetch` - Catalog client against a loopback HTTP server
//!
//! This library holds the fixtures those tests share.

use shopfront_core::{Category, Price, Product, ProductId};

/// Build a product with a generated title and thumbnail.
#[must_use]
pub fn product(id: i32, cents: i64, category: &str) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        price: Price::from_cents(cents),
        thumbnail: format!("https://cdn.example/products/{id}/thumbnail.png"),
        category: Category::from(category),
    }
}

/// Two products in two categories: `{id 1, $10, "a"}` and `{id 2, $20, "b"}`.
#[must_use]
pub fn two_product_catalog() -> Vec<Product> {
    vec![product(1, 1000, "a"), product(2, 2000, "b")]
}

/// A catalog body in the remote API's shape.
#[must_use]
pub fn catalog_body(products: &[Product]) -> String {
    serde_json::json!({
        "products": products,
        "total": products.len(),
        "skip": 0,
        "limit": products.len(),
    })
    .to_string()
}
