use super::{ArticleService, failure::report};
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

impl ArticleService {
    /// Hard delete. Returns `true` once the row is gone.
    pub async fn delete_article(&self, id: ArticleId) -> ApplicationResult<bool> {
        self.store
            .delete(id)
            .await
            .map_err(|err| report("delete_article", err))?;
        Ok(true)
    }
}
