//! Shopfront Storefront library.
//!
//! Catalog, listing and cart state for the storefront widget, kept free of any
//! rendering so it can be driven by any front end and tested directly.
//!
//! # Modules
//!
//! - [`catalog`] - Fetched product list, category set and the remote catalog client
//! - [`listing`] - Category filter and pagination reducer
//! - [`cart`] - Cart lines persisted to a key-value slot
//! - [`storage`] - Key-value store backends
//! - [`state`] - The [`state::Storefront`] holder and its action dispatch
//! - [`views`] - Pre-formatted display data

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod listing;
pub mod state;
pub mod storage;
pub mod views;

pub use error::{Result, StorefrontError};
pub use state::{Action, CheckoutDialog, Storefront};
