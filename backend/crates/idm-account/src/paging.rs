pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Effective paging parameters after coercion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// `page < 1` becomes 1; `page_size` outside `1..=100` becomes 10.
    pub fn normalize(page: i64, page_size: i64) -> Self {
        let page = u32::try_from(page.max(i64::from(DEFAULT_PAGE))).unwrap_or(u32::MAX);

        let page_size = match u32::try_from(page_size) {
            Ok(size) if (1..=MAX_PAGE_SIZE).contains(&size) => size,
            _ => DEFAULT_PAGE_SIZE,
        };

        Self { page, page_size }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }
}
