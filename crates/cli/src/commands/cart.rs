//! `cart` subcommands: one-shot operations on the saved cart.

use std::io::Write;

use shopfront_core::ProductId;
use shopfront_storefront::catalog::{CatalogState, ProductLookup};
use shopfront_storefront::error::CATALOG_FAILURE_MESSAGE;
use shopfront_storefront::storage::KeyValueStore;
use shopfront_storefront::{Action, Storefront};

use super::{CliError, Context};
use crate::render;

/// Print the cart.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn show(ctx: &Context, out: &mut impl Write) -> Result<(), CliError> {
    render::cart(out, &ctx.storefront.cart_view())?;
    Ok(())
}

/// Add one unit of a product. Needs the catalog to snapshot the product.
///
/// # Errors
///
/// Returns an error if output fails.
pub async fn add(ctx: &mut Context, out: &mut impl Write, id: ProductId) -> Result<(), CliError> {
    ctx.ensure_catalog().await;
    add_to_cart(&mut ctx.storefront, out, id)
}

/// Dispatch the add against a fetched catalog and print the cart.
fn add_to_cart<S: KeyValueStore>(
    storefront: &mut Storefront<S>,
    out: &mut impl Write,
    id: ProductId,
) -> Result<(), CliError> {
    let known = match storefront.catalog_state() {
        CatalogState::Failed(_) => {
            writeln!(out, "{CATALOG_FAILURE_MESSAGE}")?;
            return Ok(());
        }
        state => state.catalog().and_then(|c| c.product(id)).is_some(),
    };

    if known {
        storefront.dispatch(Action::AddToCart(id))?;
    } else {
        writeln!(out, "No product with ID {id}.")?;
    }
    render::cart(out, &storefront.cart_view())?;
    Ok(())
}

/// Remove a product's line.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn remove(ctx: &mut Context, out: &mut impl Write, id: ProductId) -> Result<(), CliError> {
    ctx.storefront.dispatch(Action::RemoveItem(id))?;
    show(ctx, out)
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn clear(ctx: &mut Context, out: &mut impl Write) -> Result<(), CliError> {
    ctx.storefront.dispatch(Action::ClearCart)?;
    show(ctx, out)
}

/// Confirm the order.
///
/// # Errors
///
/// Returns `StorefrontError::EmptyCartCheckout` if the cart is empty.
pub fn checkout(ctx: &mut Context, out: &mut impl Write) -> Result<(), CliError> {
    let summary = ctx.storefront.cart_summary();
    ctx.storefront.dispatch(Action::Checkout)?;
    render::checkout_confirmation(out, summary)?;
    Ok(())
}
