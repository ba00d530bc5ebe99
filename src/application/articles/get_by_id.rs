use super::{ArticleService, failure::report};
use crate::{
    application::error::ApplicationResult,
    domain::article::{Article, ArticleColumn, ArticleId, ArticleQuery},
};

impl ArticleService {
    pub async fn get_article_by_id(&self, id: ArticleId) -> ApplicationResult<Article> {
        self.store
            .select_single(&ArticleQuery::new().eq(ArticleColumn::Id, id))
            .await
            .map_err(|err| report("get_article_by_id", err))
    }
}
