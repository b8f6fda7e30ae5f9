//! Cart round trips through the file-backed store.

#![allow(clippy::unwrap_used)]

use shopfront_core::{PageSize, ProductId};
use shopfront_integration_tests::{product, two_product_catalog};
use shopfront_storefront::cart::{CART_KEY, CartStore};
use shopfront_storefront::storage::{FileStore, KeyValueStore};
use shopfront_storefront::{Action, Storefront};
use tempfile::TempDir;

#[test]
fn test_reload_reproduces_ordered_lines() {
    let dir = TempDir::new().unwrap();
    let catalog = vec![product(7, 350, "a"), product(3, 1299, "b"), product(5, 1, "a")];

    let mut cart = CartStore::load(FileStore::open(dir.path()).unwrap());
    for id in [3, 7, 3, 5, 7, 3] {
        cart.add_item(ProductId::new(id), &catalog);
    }
    cart.decrease_quantity(ProductId::new(7));
    cart.remove_item(ProductId::new(5));

    let reloaded = CartStore::load(FileStore::open(dir.path()).unwrap());
    assert_eq!(reloaded.lines(), cart.lines());
    let order: Vec<i32> = reloaded.lines().iter().map(|l| l.id.as_i32()).collect();
    assert_eq!(order, [3, 7]);
    assert_eq!(reloaded.summary(), cart.summary());
}

#[test]
fn test_storefront_restart_keeps_cart_without_catalog() {
    let dir = TempDir::new().unwrap();
    {
        let mut storefront =
            Storefront::new(FileStore::open(dir.path()).unwrap(), PageSize::default());
        storefront.load_catalog(Ok(two_product_catalog()));
        storefront
            .dispatch(Action::AddToCart(ProductId::new(2)))
            .unwrap();
        storefront
            .dispatch(Action::IncreaseQuantity(ProductId::new(2)))
            .unwrap();
    }

    let storefront = Storefront::new(FileStore::open(dir.path()).unwrap(), PageSize::default());
    assert_eq!(storefront.cart_summary().total_items, 2);
    assert_eq!(storefront.cart_view().total_price, "40.00");
}

#[test]
fn test_persisted_value_is_a_json_array_of_lines() {
    let dir = TempDir::new().unwrap();
    let mut cart = CartStore::load(FileStore::open(dir.path()).unwrap());
    cart.add_item(ProductId::new(1), &two_product_catalog());

    let raw = std::fs::read_to_string(dir.path().join("cart.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "id": 1,
            "title": "Product 1",
            "price": 10.0,
            "thumbnail": "https://cdn.example/products/1/thumbnail.png",
            "quantity": 1
        }])
    );
}

#[test]
fn test_corrupt_file_gives_empty_cart() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();
    store.set(CART_KEY, "{\"half\": ").unwrap();

    let mut cart = CartStore::load(store);
    assert!(cart.is_empty());

    // The next mutation overwrites the corrupt value.
    cart.add_item(ProductId::new(1), &two_product_catalog());
    let reloaded = CartStore::load(FileStore::open(dir.path()).unwrap());
    assert_eq!(reloaded.summary().total_items, 1);
}
