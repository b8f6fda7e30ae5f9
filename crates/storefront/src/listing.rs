//! Product listing view state: category filter, page size and current page.
//!
//! [`ViewState`] is a small reducer. Its mutators never fail; out-of-range
//! page moves are ignored. [`ViewState::visible_page`] is the single read path
//! the presentation layer uses to draw the listing.

use std::fmt;

use shopfront_core::{Category, PageSize, Product};

/// Which products the listing shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every product.
    #[default]
    All,
    /// Only products whose category equals this one exactly.
    Only(Category),
}

impl CategoryFilter {
    /// Value the category selector uses for "all categories".
    pub const ALL: &'static str = "all";

    /// Parse a selector value; `"all"` is the sentinel, anything else is taken verbatim.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == Self::ALL {
            Self::All
        } else {
            Self::Only(Category::from(value))
        }
    }

    /// Whether `product` passes this filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

/// Category selection and pagination for the product listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    selected_category: CategoryFilter,
    page_size: PageSize,
    current_page: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl ViewState {
    /// Start on page 1 of all products.
    #[must_use]
    pub const fn new(page_size: PageSize) -> Self {
        Self {
            selected_category: CategoryFilter::All,
            page_size,
            current_page: 1,
        }
    }

    /// Current category filter.
    #[must_use]
    pub const fn selected_category(&self) -> &CategoryFilter {
        &self.selected_category
    }

    /// Current page size.
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Current page, 1-based.
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Select a category and go back to page 1.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.selected_category = category;
        self.current_page = 1;
    }

    /// Change the page size and go back to page 1.
    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.current_page = 1;
    }

    /// Move forward one page. Returns `false` when already on the last page.
    pub fn next_page(&mut self, products: &[Product]) -> bool {
        if self.current_page < self.total_pages(products) {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Move back one page. Returns `false` when already on page 1.
    pub fn prev_page(&mut self, products: &[Product]) -> bool {
        let total = self.total_pages(products);
        if self.current_page > 1 {
            self.current_page = (self.current_page - 1).min(total);
            true
        } else {
            false
        }
    }

    /// Number of products passing the current filter.
    #[must_use]
    pub fn filtered_count(&self, products: &[Product]) -> usize {
        products
            .iter()
            .filter(|p| self.selected_category.matches(p))
            .count()
    }

    /// Pages needed for the filtered products; never less than 1.
    #[must_use]
    pub fn total_pages(&self, products: &[Product]) -> u32 {
        page_count(self.filtered_count(products), self.page_size)
    }

    /// Compute the slice of products to show.
    #[must_use]
    pub fn visible_page<'a>(&self, products: &'a [Product]) -> VisiblePage<'a> {
        let filtered: Vec<&Product> = products
            .iter()
            .filter(|p| self.selected_category.matches(p))
            .collect();
        let filtered_count = filtered.len();
        let size = self.page_size.as_usize();
        let start = usize::try_from(self.current_page - 1)
            .unwrap_or(usize::MAX)
            .saturating_mul(size);

        VisiblePage {
            products: filtered.into_iter().skip(start).take(size).collect(),
            filtered_count,
            total_pages: page_count(filtered_count, self.page_size),
            current_page: self.current_page,
        }
    }
}

/// `ceil(count / size)`, with an empty result still counting as one page.
fn page_count(count: usize, size: PageSize) -> u32 {
    let pages = count.div_ceil(size.as_usize()).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// One page of the filtered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisiblePage<'a> {
    /// Products on this page, in catalog order.
    pub products: Vec<&'a Product>,
    /// Products passing the filter across all pages.
    pub filtered_count: usize,
    /// Total pages for the filter, at least 1.
    pub total_pages: u32,
    /// Page these products belong to.
    pub current_page: u32,
}

impl VisiblePage<'_> {
    /// Whether the page has nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Whether a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Page position label, e.g. `"2 / 5"`.
    #[must_use]
    pub fn indicator(&self) -> String {
        format!("{} / {}", self.current_page, self.total_pages)
    }
}
