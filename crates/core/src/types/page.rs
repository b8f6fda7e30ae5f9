//! Page size choices for the product listing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page sizes offered by the listing's page-size selector.
pub const PAGE_SIZE_CHOICES: [u32; 4] = [5, 10, 20, 50];

const DEFAULT_PAGE_SIZE: u32 = 10;

/// Error returned when a page size is not one of [`PAGE_SIZE_CHOICES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("page size {0} is not one of {PAGE_SIZE_CHOICES:?}")]
pub struct PageSizeError(pub u32);

/// Number of products shown per page. Always one of [`PAGE_SIZE_CHOICES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageSize(u32);

impl PageSize {
    /// Number of products per page.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Same value as a `usize`, for slicing.
    #[must_use]
    pub fn as_usize(self) -> usize {
        usize::try_from(self.0).unwrap_or(usize::MAX)
    }

    /// All allowed page sizes, in selector order.
    pub fn choices() -> impl Iterator<Item = Self> {
        PAGE_SIZE_CHOICES.into_iter().map(Self)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

impl TryFrom<u32> for PageSize {
    type Error = PageSizeError;

    fn try_from(size: u32) -> Result<Self, Self::Error> {
        if PAGE_SIZE_CHOICES.contains(&size) {
            Ok(Self(size))
        } else {
            Err(PageSizeError(size))
        }
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.0
    }
}
