//! Plain-text rendering of storefront views.

use std::io::{self, Write};

use shopfront_storefront::cart::CartSummary;
use shopfront_storefront::views::{CartView, CategoryOption, ListingView};

/// Print a page of products followed by the page indicator.
pub fn listing(out: &mut impl Write, view: &ListingView) -> io::Result<()> {
    if let Some(message) = &view.message {
        writeln!(out, "{message}")?;
    }
    for card in &view.products {
        writeln!(out, "[{:>4}] {}  {}", card.id, card.title, card.price)?;
    }
    writeln!(out, "Page {}", view.page_indicator)
}

/// Print the category selector, marking the current choice.
pub fn categories(out: &mut impl Write, options: &[CategoryOption]) -> io::Result<()> {
    for option in options {
        let marker = if option.selected { '*' } else { ' ' };
        writeln!(out, "{marker} {} ({})", option.label, option.value)?;
    }
    Ok(())
}

/// Print cart lines and totals.
pub fn cart(out: &mut impl Write, view: &CartView) -> io::Result<()> {
    if let Some(message) = &view.message {
        writeln!(out, "{message}")?;
    }
    for item in &view.items {
        writeln!(
            out,
            "[{:>4}] {}  {} x {} = {}",
            item.id, item.title, item.price, item.quantity, item.subtotal
        )?;
    }
    writeln!(out, "Total items: {}", view.total_items)?;
    writeln!(out, "Total price: ${}", view.total_price)
}

/// Print the order confirmation.
pub fn checkout_confirmation(out: &mut impl Write, summary: CartSummary) -> io::Result<()> {
    writeln!(out, "Thank you for your purchase!")?;
    writeln!(
        out,
        "{} item(s), {} total. Your cart has been emptied.",
        summary.total_items, summary.total_price
    )
}

/// Print the shell's command reference.
pub fn help(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "\
Commands:
  products              show the current page
  categories            list categories
  category <name|all>   filter by category
  page-size <n>         products per page (5, 10, 20, 50)
  next | prev           change page
  add <id>              add a product to the cart
  inc <id> | dec <id>   change a cart line's quantity
  remove <id>           remove a cart line
  clear                 empty the cart
  cart                  show the cart
  checkout              confirm the order
  close                 close the order confirmation
  help                  show this help
  quit                  leave"
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use shopfront_storefront::views::ProductCardView;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_listing_lines() {
        let view = ListingView {
            products: vec![ProductCardView {
                id: 1,
                title: "Mascara".to_string(),
                price: "$9.99".to_string(),
                thumbnail: String::new(),
            }],
            page_indicator: "1 / 2".to_string(),
            has_prev: false,
            has_next: true,
            message: None,
        };
        let text = render(|out| listing(out, &view));
        assert_eq!(text, "[   1] Mascara  $9.99\nPage 1 / 2\n");
    }

    #[test]
    fn test_empty_cart() {
        let view = CartView::new(&[], CartSummary::default());
        let text = render(|out| cart(out, &view));
        assert!(text.starts_with("Your cart is empty.\n"));
        assert!(text.contains("Total price: $0.00"));
    }
}
