//! `products` command: print one page of the listing.

use std::io::Write;

use shopfront_core::PageSize;
use shopfront_storefront::listing::CategoryFilter;
use shopfront_storefront::storage::KeyValueStore;
use shopfront_storefront::{Action, Storefront, StorefrontError};

use super::{CliError, Context};
use crate::render;

/// Fetch the catalog and print the requested page.
///
/// Pages past the end show the last page.
///
/// # Errors
///
/// Returns an error for an invalid page size or if output fails.
pub async fn run(
    ctx: &mut Context,
    out: &mut impl Write,
    category: &str,
    page_size: Option<u32>,
    page: u32,
) -> Result<(), CliError> {
    ctx.ensure_catalog().await;
    let storefront = &mut ctx.storefront;

    storefront.dispatch(Action::SelectCategory(CategoryFilter::parse(category)))?;
    if let Some(size) = page_size {
        let size = PageSize::try_from(size).map_err(StorefrontError::from)?;
        storefront.dispatch(Action::SelectPageSize(size))?;
    }
    go_to_page(storefront, page)?;

    render::listing(out, &storefront.listing_view())?;
    Ok(())
}

/// Page forward until `page` or the last page, whichever comes first.
fn go_to_page<S: KeyValueStore>(
    storefront: &mut Storefront<S>,
    page: u32,
) -> Result<(), StorefrontError> {
    while storefront.view_state().current_page() < page {
        let before = storefront.view_state().current_page();
        storefront.dispatch(Action::NextPage)?;
        if storefront.view_state().current_page() == before {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use shopfront_core::{Category, Price, Product, ProductId};
    use shopfront_storefront::catalog::CatalogError;
    use shopfront_storefront::storage::MemoryStore;

    fn storefront(count: i32) -> Storefront<MemoryStore> {
        let products = (1..=count)
            .map(|i| Product {
                id: ProductId::new(i),
                title: format!("Product {i}"),
                price: Price::from_cents(100),
                thumbnail: String::new(),
                category: Category::from("misc"),
            })
            .collect();
        let mut storefront = Storefront::new(MemoryStore::new(), PageSize::default());
        storefront.load_catalog(Ok(products));
        storefront
    }

    #[test]
    fn test_go_to_page_within_range() {
        let mut storefront = storefront(35);
        go_to_page(&mut storefront, 3).unwrap();
        assert_eq!(storefront.listing_view().page_indicator, "3 / 4");
    }

    #[test]
    fn test_go_to_page_past_end_stops_at_last_page() {
        let mut storefront = storefront(35);
        go_to_page(&mut storefront, u32::MAX).unwrap();
        assert_eq!(storefront.view_state().current_page(), 4);
    }

    #[test]
    fn test_go_to_page_with_failed_catalog_returns_immediately() {
        let mut storefront = Storefront::new(MemoryStore::new(), PageSize::default());
        storefront.load_catalog(Err(CatalogError::Status {
            status: 503,
            body: String::new(),
        }));
        go_to_page(&mut storefront, 4_000_000_000).unwrap();
        assert_eq!(storefront.view_state().current_page(), 1);
    }

    #[test]
    fn test_go_to_page_zero_stays_on_first_page() {
        let mut storefront = storefront(35);
        go_to_page(&mut storefront, 0).unwrap();
        assert_eq!(storefront.view_state().current_page(), 1);
    }
}
