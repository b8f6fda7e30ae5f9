//! Storefront state shared by every front end.
//!
//! [`Storefront`] owns the catalog, the listing view state, the cart and the
//! checkout confirmation. Front ends turn user gestures into [`Action`]s and
//! call [`Storefront::dispatch`]; they read back through the query methods
//! and view builders.

use shopfront_core::{PageSize, Product, ProductId};

use crate::cart::{CartStore, CartSummary};
use crate::catalog::{CatalogError, CatalogState};
use crate::error::{CATALOG_FAILURE_MESSAGE, Result, StorefrontError};
use crate::listing::{CategoryFilter, ViewState, VisiblePage};
use crate::storage::KeyValueStore;
use crate::views::{CartView, CategoryOption, ListingView, category_options};

/// Shown in place of the listing until the catalog arrives.
pub const LOADING_MESSAGE: &str = "Loading products...";

/// A user gesture, expressed as a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectCategory(CategoryFilter),
    SelectPageSize(PageSize),
    NextPage,
    PrevPage,
    AddToCart(ProductId),
    IncreaseQuantity(ProductId),
    DecreaseQuantity(ProductId),
    RemoveItem(ProductId),
    ClearCart,
    /// Confirm the order: opens the confirmation and empties the cart.
    Checkout,
    CloseCheckout,
}

/// Whether the order confirmation is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckoutDialog {
    #[default]
    Closed,
    Open,
}

/// Catalog, listing, cart and checkout state for one shopper.
#[derive(Debug)]
pub struct Storefront<S> {
    catalog: CatalogState,
    view: ViewState,
    cart: CartStore<S>,
    checkout: CheckoutDialog,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Create a storefront with the catalog still loading and the cart
    /// seeded from `store`.
    pub fn new(store: S, page_size: PageSize) -> Self {
        Self {
            catalog: CatalogState::Loading,
            view: ViewState::new(page_size),
            cart: CartStore::load(store),
            checkout: CheckoutDialog::Closed,
        }
    }

    /// Record the outcome of the catalog fetch.
    pub fn load_catalog(&mut self, result: std::result::Result<Vec<Product>, CatalogError>) {
        self.catalog = CatalogState::from_fetch(result);
    }

    /// Apply a user action.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::EmptyCartCheckout` for [`Action::Checkout`]
    /// on an empty cart. Every other action succeeds.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        tracing::debug!(?action, "Dispatching action");
        let products = self.catalog.products();
        match action {
            Action::SelectCategory(category) => self.view.set_category(category),
            Action::SelectPageSize(size) => self.view.set_page_size(size),
            Action::NextPage => {
                self.view.next_page(products);
            }
            Action::PrevPage => {
                self.view.prev_page(products);
            }
            Action::AddToCart(id) => {
                self.cart.add_item(id, products);
            }
            Action::IncreaseQuantity(id) => {
                self.cart.increase_quantity(id);
            }
            Action::DecreaseQuantity(id) => {
                self.cart.decrease_quantity(id);
            }
            Action::RemoveItem(id) => {
                self.cart.remove_item(id);
            }
            Action::ClearCart => self.cart.clear(),
            Action::Checkout => self.checkout()?,
            Action::CloseCheckout => self.checkout = CheckoutDialog::Closed,
        }
        Ok(())
    }

    /// Confirm the order: open the confirmation and empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::EmptyCartCheckout` when the cart is empty; in
    /// that case nothing changes and nothing is written.
    pub fn checkout(&mut self) -> Result<()> {
        if self.cart.is_empty() {
            tracing::info!("Checkout refused: cart is empty");
            return Err(StorefrontError::EmptyCartCheckout);
        }
        let summary = self.cart.summary();
        tracing::info!(
            total_items = summary.total_items,
            total_price = %summary.total_price,
            "Checkout confirmed"
        );
        self.checkout = CheckoutDialog::Open;
        self.cart.clear();
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Catalog lifecycle state.
    #[must_use]
    pub const fn catalog_state(&self) -> &CatalogState {
        &self.catalog
    }

    /// Listing view state.
    #[must_use]
    pub const fn view_state(&self) -> &ViewState {
        &self.view
    }

    /// The cart.
    #[must_use]
    pub const fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    /// Checkout confirmation state.
    #[must_use]
    pub const fn checkout_dialog(&self) -> CheckoutDialog {
        self.checkout
    }

    /// Current page of the listing.
    #[must_use]
    pub fn visible_page(&self) -> VisiblePage<'_> {
        self.view.visible_page(self.catalog.products())
    }

    /// Cart totals.
    #[must_use]
    pub fn cart_summary(&self) -> CartSummary {
        self.cart.summary()
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Listing display data, or a loading/error message.
    #[must_use]
    pub fn listing_view(&self) -> ListingView {
        match &self.catalog {
            CatalogState::Loading => ListingView::message(LOADING_MESSAGE),
            CatalogState::Failed(_) => ListingView::message(CATALOG_FAILURE_MESSAGE),
            CatalogState::Ready(_) => ListingView::from(&self.visible_page()),
        }
    }

    /// Category selector entries.
    #[must_use]
    pub fn category_options(&self) -> Vec<CategoryOption> {
        category_options(self.catalog.categories(), self.view.selected_category())
    }

    /// Cart display data.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView::new(self.cart.lines(), self.cart.summary())
    }
}
