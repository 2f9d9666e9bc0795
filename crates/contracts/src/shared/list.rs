use serde::{Deserialize, Serialize};

/// Paged list envelope returned by every collection endpoint.
///
/// `total` is the server-side row count across all pages, not the
/// length of `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub total: u64,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }
}
