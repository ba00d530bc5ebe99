use super::ArticleService;
use crate::domain::article::ArticleId;

impl ArticleService {
    /// Best-effort: a failed increment is logged and otherwise ignored.
    pub async fn increment_views(&self, id: ArticleId) {
        if let Err(err) = self.store.increment_views(id).await {
            tracing::warn!(%id, error = %err, "failed to increment article views");
        }
    }
}
