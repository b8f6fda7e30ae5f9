//! Cart line records.

use serde::{Deserialize, Serialize};

use super::{Price, Product, ProductId};

/// One line of the cart.
///
/// `title`, `price` and `thumbnail` are copied from the product when the line
/// is created and are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// ID of the product this line was created from.
    pub id: ProductId,
    /// Product title at add time.
    pub title: String,
    /// Unit price at add time.
    pub price: Price,
    /// Thumbnail URL at add time.
    pub thumbnail: String,
    /// Number of units, at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Start a new line for `product` with a quantity of 1.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            thumbnail: product.thumbnail.clone(),
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.price.times(self.quantity)
    }
}
