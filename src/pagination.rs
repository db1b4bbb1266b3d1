//! Page/limit handling and list metadata.

use serde::Serialize;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Requested page window. Zero values fall back to the defaults.
#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    pub page: u32,
    pub limit: u32,
}

impl PageParams {
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE);
        let limit = limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT);
        PageParams { page, limit }
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.limit)
    }
}

/// Returned alongside every list page. `total` comes from a dedicated COUNT
/// query over the same filters, so `total_pages` is accurate on every page.
#[derive(Debug, Serialize, PartialEq)]
pub struct PageMeta {
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: i64,
}

impl PageMeta {
    pub fn new(total: i64, params: PageParams) -> Self {
        let limit = i64::from(params.limit);
        PageMeta {
            total,
            page: params.page,
            limit: params.limit,
            total_pages: (total + limit - 1) / limit,
        }
    }
}
