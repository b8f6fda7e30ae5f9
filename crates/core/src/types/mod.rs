//! Core types for Shopfront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod category;
pub mod id;
pub mod page;
pub mod price;
pub mod product;

pub use cart::CartLine;
pub use category::Category;
pub use id::*;
pub use page::{PAGE_SIZE_CHOICES, PageSize, PageSizeError};
pub use price::Price;
pub use product::Product;
