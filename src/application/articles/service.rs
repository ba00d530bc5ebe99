// src/application/articles/service.rs
use std::sync::Arc;

use crate::domain::article::ArticleStore;

/// Page size used for range computation when an offset arrives without a limit.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Row count for popular/recent listings when the caller gives none.
pub const DEFAULT_HIGHLIGHT_LIMIT: u64 = 5;

/// Facade in front of the article store. All query shaping lives here; the
/// store only executes what it is handed.
pub struct ArticleService {
    pub(super) store: Arc<dyn ArticleStore>,
}

impl ArticleService {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self { store }
    }
}
