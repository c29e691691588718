//! Page requests and page results.

use serde::{Deserialize, Serialize};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A zero-based page index and a page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    index: usize,
    size: usize,
}

impl PageRequest {
    /// A page size of `0` is bumped to `1`.
    pub fn new(index: usize, size: usize) -> Self {
        Self {
            index,
            size: size.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Offset of the first element of this page, saturating on overflow.
    pub fn offset(&self) -> usize {
        self.index.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results plus the metadata needed to render a pager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: usize,
    pub total_pages: usize,
    /// Zero-based index of this page.
    pub number: usize,
}

impl<T> Page<T> {
    /// A page with no content and no matches.
    pub fn empty(number: usize) -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            number,
        }
    }

    pub fn has_next(&self) -> bool {
        self.number + 1 < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0 && self.total_pages > 0
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
        }
    }
}

/// Cuts page `req` out of `items`.
///
/// `total_pages` is `ceil(len / size)`; a page past the end yields empty
/// content with the metadata still filled in.
pub fn paginate<T: Clone>(items: &[T], req: PageRequest) -> Page<T> {
    let total_elements = items.len();
    let start = req.offset().min(total_elements);
    let end = start.saturating_add(req.size()).min(total_elements);

    Page {
        content: items[start..end].to_vec(),
        total_elements,
        total_pages: total_elements.div_ceil(req.size()),
        number: req.index(),
    }
}
