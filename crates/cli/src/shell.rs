//! Interactive command loop.
//!
//! Each input line becomes a [`ShellCommand`]; state changes are sent to the
//! storefront as [`Action`]s and the affected view is printed again.

use std::io::{BufRead, Write};

use shopfront_core::{PageSize, ProductId};
use shopfront_storefront::listing::CategoryFilter;
use shopfront_storefront::storage::KeyValueStore;
use shopfront_storefront::{Action, Storefront, StorefrontError};
use thiserror::Error;

use crate::commands::CliError;
use crate::render;

/// Errors from parsing a shell line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0} (try 'help')")]
    Unknown(String),
    #[error("Missing argument for '{0}'")]
    MissingArgument(&'static str),
    #[error("Invalid product ID: {0}")]
    InvalidId(String),
    #[error("Invalid page size: {0}")]
    InvalidPageSize(String),
}

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Dispatch(Action),
    Products,
    Categories,
    Cart,
    Help,
    Quit,
}

/// Parse one input line. Blank lines give `Ok(None)`.
///
/// # Errors
///
/// Returns `ParseError` for unknown commands or bad arguments.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(w, r)| (w, r.trim()));

    let command = match word {
        "products" | "ls" => ShellCommand::Products,
        "categories" => ShellCommand::Categories,
        "cart" => ShellCommand::Cart,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        "next" | "n" => ShellCommand::Dispatch(Action::NextPage),
        "prev" | "p" => ShellCommand::Dispatch(Action::PrevPage),
        "clear" => ShellCommand::Dispatch(Action::ClearCart),
        "checkout" => ShellCommand::Dispatch(Action::Checkout),
        "close" => ShellCommand::Dispatch(Action::CloseCheckout),
        "category" => {
            let name = required(rest, "category")?;
            ShellCommand::Dispatch(Action::SelectCategory(CategoryFilter::parse(name)))
        }
        "page-size" => {
            let raw = required(rest, "page-size")?;
            let size = raw
                .parse::<u32>()
                .ok()
                .and_then(|n| PageSize::try_from(n).ok())
                .ok_or_else(|| ParseError::InvalidPageSize(raw.to_string()))?;
            ShellCommand::Dispatch(Action::SelectPageSize(size))
        }
        "add" => ShellCommand::Dispatch(Action::AddToCart(product_id(rest, "add")?)),
        "inc" => ShellCommand::Dispatch(Action::IncreaseQuantity(product_id(rest, "inc")?)),
        "dec" => ShellCommand::Dispatch(Action::DecreaseQuantity(product_id(rest, "dec")?)),
        "remove" | "rm" => ShellCommand::Dispatch(Action::RemoveItem(product_id(rest, "remove")?)),
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn required<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

fn product_id(rest: &str, command: &'static str) -> Result<ProductId, ParseError> {
    let raw = required(rest, command)?;
    raw.parse()
        .map_err(|_| ParseError::InvalidId(raw.to_string()))
}

/// Run the command loop until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Storefront
/// errors are shown to the user and the loop continues.
pub fn run<S, R, W>(storefront: &mut Storefront<S>, input: R, out: &mut W) -> Result<(), CliError>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    render::listing(out, &storefront.listing_view())?;
    render::help(out)?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => render::help(out)?,
            ShellCommand::Products => render::listing(out, &storefront.listing_view())?,
            ShellCommand::Categories => render::categories(out, &storefront.category_options())?,
            ShellCommand::Cart => render::cart(out, &storefront.cart_view())?,
            ShellCommand::Dispatch(action) => apply(storefront, action, out)?,
        }
    }
    Ok(())
}

/// Dispatch an action and print the view it affects.
fn apply<S, W>(storefront: &mut Storefront<S>, action: Action, out: &mut W) -> Result<(), CliError>
where
    S: KeyValueStore,
    W: Write,
{
    let summary_before = storefront.cart_summary();
    let listing_changed = matches!(
        action,
        Action::SelectCategory(_) | Action::SelectPageSize(_) | Action::NextPage | Action::PrevPage
    );
    let is_checkout = matches!(action, Action::Checkout);
    let is_close = matches!(action, Action::CloseCheckout);

    match storefront.dispatch(action) {
        Ok(()) => {}
        Err(e @ StorefrontError::EmptyCartCheckout) => {
            writeln!(out, "{}", e.user_message())?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    if listing_changed {
        render::listing(out, &storefront.listing_view())?;
    } else if is_checkout {
        render::checkout_confirmation(out, summary_before)?;
    } else if is_close {
        writeln!(out, "Order confirmation closed.")?;
    } else {
        render::cart(out, &storefront.cart_view())?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use shopfront_core::{Category, Price, Product};
    use shopfront_storefront::CheckoutDialog;
    use shopfront_storefront::storage::MemoryStore;

    fn storefront() -> Storefront<MemoryStore> {
        let products: Vec<Product> = (1..=12)
            .map(|i| Product {
                id: ProductId::new(i),
                title: format!("Product {i}"),
                price: Price::from_cents(i64::from(i) * 100),
                thumbnail: String::new(),
                category: Category::from(if i % 2 == 0 { "even" } else { "odd" }),
            })
            .collect();
        let mut storefront = Storefront::new(MemoryStore::new(), PageSize::default());
        storefront.load_catalog(Ok(products));
        storefront
    }

    fn run_script(storefront: &mut Storefront<MemoryStore>, script: &str) -> String {
        let mut out = Vec::new();
        run(storefront, Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("   ").unwrap(), None);
        assert_eq!(
            parse_command("add 3").unwrap(),
            Some(ShellCommand::Dispatch(Action::AddToCart(ProductId::new(3))))
        );
        assert_eq!(
            parse_command("category  home-decoration ").unwrap(),
            Some(ShellCommand::Dispatch(Action::SelectCategory(
                CategoryFilter::parse("home-decoration")
            )))
        );
        assert_eq!(
            parse_command("category all").unwrap(),
            Some(ShellCommand::Dispatch(Action::SelectCategory(CategoryFilter::All)))
        );
        assert_eq!(parse_command("q").unwrap(), Some(ShellCommand::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_command("add").unwrap_err(),
            ParseError::MissingArgument("add")
        );
        assert_eq!(
            parse_command("dec x").unwrap_err(),
            ParseError::InvalidId("x".to_string())
        );
        assert_eq!(
            parse_command("page-size 7").unwrap_err(),
            ParseError::InvalidPageSize("7".to_string())
        );
        assert!(matches!(
            parse_command("dance").unwrap_err(),
            ParseError::Unknown(_)
        ));
    }

    #[test]
    fn test_script_paging_and_cart() {
        let mut storefront = storefront();
        let text = run_script(
            &mut storefront,
            "next\nnext\ncategory even\nadd 2\nadd 2\nadd 99\ndec 2\ninc 2\ncart\nquit\nadd 4\n",
        );
        assert!(text.contains("Page 2 / 2"));
        assert!(text.contains("Page 1 / 1"));
        assert!(text.contains("Total items: 2"));
        assert_eq!(storefront.cart_summary().total_items, 2);
    }

    #[test]
    fn test_script_checkout() {
        let mut storefront = storefront();
        let text = run_script(&mut storefront, "checkout\nadd 1\ncheckout\n");
        assert!(text.contains("Your cart is empty!"));
        assert!(text.contains("Thank you for your purchase!"));
        assert_eq!(storefront.checkout_dialog(), CheckoutDialog::Open);
        assert!(storefront.cart().is_empty());
    }

    #[test]
    fn test_script_reports_parse_errors() {
        let mut storefront = storefront();
        let text = run_script(&mut storefront, "page-size 3\n");
        assert!(text.contains("Invalid page size: 3"));
    }
}
