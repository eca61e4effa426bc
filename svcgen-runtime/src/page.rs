use serde::{Deserialize, Serialize};

/// Page size of the unrestricted window: the largest signed 32-bit value,
/// which every storage backend accepts as a limit.
pub const MAX_PAGE_SIZE: u64 = 2_147_483_647;

/// Zero-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub page: u64,
    pub size: u64,
}

impl PageWindow {
    pub fn new(page: u64, size: u64) -> Self {
        Self { page, size }
    }

    /// First page, sized to hold everything.
    pub fn unrestricted() -> Self {
        Self {
            page: 0,
            size: MAX_PAGE_SIZE,
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.page == 0 && self.size == MAX_PAGE_SIZE
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::unrestricted()
    }
}

/// A page of results with pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, window: &PageWindow, total_elements: u64) -> Self {
        let total_pages = if window.size == 0 {
            0
        } else {
            total_elements.div_ceil(window.size)
        };
        Self {
            content,
            page: window.page,
            size: window.size,
            total_elements,
            total_pages,
        }
    }

    /// Cut one window out of a fully loaded result set.
    pub fn slice(all: Vec<T>, window: &PageWindow) -> Self {
        let total = all.len() as u64;
        let skip = usize::try_from(window.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(window.size).unwrap_or(usize::MAX);
        let content = all.into_iter().skip(skip).take(take).collect();
        Self::new(content, window, total)
    }
}
