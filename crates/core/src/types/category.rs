//! Product category names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A product category as sent by the catalog API (e.g. `"beauty"`).
///
/// Comparison is case-sensitive; capitalization is applied only by
/// [`Category::display_name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Create a category from its raw name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Raw category name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name with its first letter upper-cased, for select lists and headings.
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut chars = self.0.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self(name)
    }
}
