//! Display data for front ends.
//!
//! Views are plain owned structs with every value already formatted, so a
//! renderer only has to lay them out.

use shopfront_core::{CartLine, Category, Product};

use crate::cart::CartSummary;
use crate::listing::{CategoryFilter, VisiblePage};

/// Shown when the current page has no products.
pub const NO_PRODUCTS_MESSAGE: &str = "No products found.";

/// Shown when the cart has no lines.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Product card display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: i32,
    pub title: String,
    pub price: String,
    pub thumbnail: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            title: product.title.clone(),
            price: product.price.to_string(),
            thumbnail: product.thumbnail.clone(),
        }
    }
}

/// Product listing display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    pub products: Vec<ProductCardView>,
    /// Page position, e.g. `"1 / 3"`.
    pub page_indicator: String,
    pub has_prev: bool,
    pub has_next: bool,
    /// Message to show instead of products, if any.
    pub message: Option<String>,
}

impl ListingView {
    /// Listing that shows only a message (loading or failed catalog).
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            products: Vec::new(),
            page_indicator: "1 / 1".to_string(),
            has_prev: false,
            has_next: false,
            message: Some(message.into()),
        }
    }
}

impl From<&VisiblePage<'_>> for ListingView {
    fn from(page: &VisiblePage<'_>) -> Self {
        Self {
            products: page
                .products
                .iter()
                .map(|p| ProductCardView::from(*p))
                .collect(),
            page_indicator: page.indicator(),
            has_prev: page.has_prev(),
            has_next: page.has_next(),
            message: page.is_empty().then(|| NO_PRODUCTS_MESSAGE.to_string()),
        }
    }
}

/// Entry of the category selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    /// Value passed back when selected.
    pub value: String,
    /// Capitalized label.
    pub label: String,
    /// Whether this is the current selection.
    pub selected: bool,
}

/// Build the category selector: "All" first, then each category in order.
#[must_use]
pub fn category_options(categories: &[Category], selected: &CategoryFilter) -> Vec<CategoryOption> {
    let all = CategoryOption {
        value: CategoryFilter::ALL.to_string(),
        label: "All".to_string(),
        selected: *selected == CategoryFilter::All,
    };
    std::iter::once(all)
        .chain(categories.iter().map(|category| CategoryOption {
            value: category.as_str().to_string(),
            label: category.display_name(),
            selected: matches!(selected, CategoryFilter::Only(c) if c == category),
        }))
        .collect()
}

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: i32,
    pub title: String,
    pub thumbnail: String,
    pub quantity: u32,
    pub price: String,
    pub subtotal: String,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.as_i32(),
            title: line.title.clone(),
            thumbnail: line.thumbnail.clone(),
            quantity: line.quantity,
            price: line.price.to_string(),
            subtotal: line.subtotal().to_string(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total_items: u32,
    /// Total without currency sign, e.g. `"40.00"`.
    pub total_price: String,
    /// Message to show instead of items, if any.
    pub message: Option<String>,
}

impl CartView {
    /// Build the view from cart lines and their summary.
    #[must_use]
    pub fn new(lines: &[CartLine], summary: CartSummary) -> Self {
        Self {
            items: lines.iter().map(CartItemView::from).collect(),
            total_items: summary.total_items,
            total_price: summary.total_price.to_fixed(),
            message: lines.is_empty().then(|| EMPTY_CART_MESSAGE.to_string()),
        }
    }
}
