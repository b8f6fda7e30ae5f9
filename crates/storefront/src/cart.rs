//! Cart store.
//!
//! Holds the cart lines and mirrors them into the [`CART_KEY`] slot of a
//! [`KeyValueStore`] after every mutation that changes them. The stored value
//! is the JSON array of lines, replaced wholesale on each write.
//!
//! Operations on IDs that are not in the cart (or not in the catalog, for
//! [`CartStore::add_item`]) are silent no-ops.

use shopfront_core::{CartLine, Price, ProductId};

use crate::catalog::ProductLookup;
use crate::storage::{KeyValueStore, StorageError};

/// Key of the persisted cart slot.
pub const CART_KEY: &str = "cart";

/// Totals derived from the cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartSummary {
    /// Sum of all line quantities.
    pub total_items: u32,
    /// Sum of price times quantity over all lines.
    pub total_price: Price,
}

/// Cart lines plus the store they are persisted to.
#[derive(Debug)]
pub struct CartStore<S> {
    lines: Vec<CartLine>,
    store: S,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Seed the cart from the persisted slot.
    ///
    /// A missing, unreadable or corrupt value gives an empty cart.
    pub fn load(store: S) -> Self {
        let lines = match store.get(CART_KEY) {
            Ok(Some(raw)) => decode_lines(&raw).unwrap_or_else(|reason| {
                tracing::warn!(reason = %reason, "Ignoring corrupt persisted cart");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted cart");
                Vec::new()
            }
        };
        tracing::debug!(lines = lines.len(), "Cart loaded");
        Self { lines, store }
    }

    /// Cart lines in the order they were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line for `id`, if present.
    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Underlying key-value store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Add one unit of a catalog product.
    ///
    /// Increments the existing line, or appends a new line snapshotting the
    /// product's title, price and thumbnail. Returns `false` if `product_id`
    /// does not resolve.
    pub fn add_item<L>(&mut self, product_id: ProductId, lookup: &L) -> bool
    where
        L: ProductLookup + ?Sized,
    {
        let Some(product) = lookup.product(product_id) else {
            tracing::debug!(%product_id, "Add ignored: unknown product");
            return false;
        };

        match self.line_mut(product_id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine::from_product(product)),
        }
        self.persist();
        true
    }

    /// Add one unit to an existing line. Returns `false` if there is no line.
    pub fn increase_quantity(&mut self, id: ProductId) -> bool {
        let Some(line) = self.line_mut(id) else {
            tracing::debug!(%id, "Increase ignored: not in cart");
            return false;
        };
        line.quantity = line.quantity.saturating_add(1);
        self.persist();
        true
    }

    /// Remove one unit from a line whose quantity is above 1.
    ///
    /// Never removes the line; returns `false` if nothing changed.
    pub fn decrease_quantity(&mut self, id: ProductId) -> bool {
        match self.line_mut(id) {
            Some(line) if line.quantity > 1 => {
                line.quantity -= 1;
                self.persist();
                true
            }
            _ => false,
        }
    }

    /// Delete the line for `id` regardless of quantity.
    ///
    /// The cart is written back even when no line matched. Returns whether a
    /// line was removed.
    pub fn remove_item(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        self.persist();
        self.lines.len() != before
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    /// Recompute totals from the current lines.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            total_items: self
                .lines
                .iter()
                .fold(0_u32, |total, line| total.saturating_add(line.quantity)),
            total_price: self.lines.iter().map(CartLine::subtotal).sum(),
        }
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id == id)
    }

    /// Write the whole cart to the slot. Failures are logged, not raised.
    fn persist(&mut self) {
        let result = serde_json::to_string(&self.lines)
            .map_err(StorageError::from)
            .and_then(|json| self.store.set(CART_KEY, &json));
        if let Err(e) = result {
            tracing::error!(error = %e, "Failed to persist cart");
        }
    }
}

/// Decode a persisted cart, rejecting values that break the cart invariants.
fn decode_lines(raw: &str) -> Result<Vec<CartLine>, String> {
    let lines: Vec<CartLine> = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    for (i, line) in lines.iter().enumerate() {
        if line.quantity == 0 {
            return Err(format!("line for product {} has zero quantity", line.id));
        }
        if lines.iter().take(i).any(|other| other.id == line.id) {
            return Err(format!("duplicate line for product {}", line.id));
        }
    }
    Ok(lines)
}
