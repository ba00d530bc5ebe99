// src/infrastructure/repositories/postgrest_article.rs
//! Article store backed by a hosted PostgREST endpoint (Supabase's `/rest/v1`).

use super::error::{map_postgrest, map_reqwest};
use super::row::{ArticleChangesBody, ArticleRow, NewArticleBody, into_articles};
use crate::domain::article::{
    Article, ArticleChanges, ArticleColumn, ArticleFilter, ArticleId, ArticleQuery, ArticleStore,
    NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult, StoreError};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, header::ACCEPT};
use serde::de::DeserializeOwned;
use serde_json::json;

const TABLE: &str = "articles";
const INCREMENT_VIEWS_RPC: &str = "increment_views";
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
const RETURN_REPRESENTATION: &str = "return=representation";

#[derive(Clone)]
pub struct PostgrestArticleStore {
    client: Client,
    rest_url: String,
    api_key: String,
}

impl PostgrestArticleStore {
    /// `project_url` is the project root, e.g. `https://xyz.supabase.co`.
    pub fn new(project_url: &str, api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), project_url, api_key)
    }

    pub fn with_client(client: Client, project_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            client,
            rest_url: format!("{}/rest/v1", project_url.trim_end_matches('/')),
            api_key: api_key.into(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}/{path}", self.rest_url))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    fn table(&self, method: Method) -> RequestBuilder {
        self.request(method, TABLE)
    }
}

/// Quotes a value for use inside PostgREST list/logic syntax.
fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

fn id_filter(id: ArticleId) -> (String, String) {
    (ArticleColumn::Id.as_str().to_owned(), format!("eq.{id}"))
}

/// Renders the query as PostgREST URL parameters.
pub(crate) fn query_params(query: &ArticleQuery) -> Vec<(String, String)> {
    let mut params = vec![("select".to_owned(), "*".to_owned())];

    for filter in query.filters() {
        match filter {
            ArticleFilter::Eq(column, value) => {
                params.push((column.as_str().to_owned(), format!("eq.{value}")));
            }
            ArticleFilter::ILikeAny { columns, needle } => {
                let pattern = quote(&format!("*{needle}*"));
                let alternatives = columns
                    .iter()
                    .map(|column| format!("{column}.ilike.{pattern}"))
                    .collect::<Vec<_>>()
                    .join(",");
                params.push(("or".to_owned(), format!("({alternatives})")));
            }
            ArticleFilter::Contains(column, values) => {
                let items = values
                    .iter()
                    .map(|value| quote(value))
                    .collect::<Vec<_>>()
                    .join(",");
                params.push((column.as_str().to_owned(), format!("cs.{{{items}}}")));
            }
        }
    }

    if let Some(order) = query.ordering() {
        let direction = if order.ascending { "asc" } else { "desc" };
        params.push(("order".to_owned(), format!("{}.{direction}", order.column)));
    }
    if let Some(limit) = query.row_limit() {
        params.push(("limit".to_owned(), limit.to_string()));
    }
    if let Some(offset) = query.row_offset() {
        params.push(("offset".to_owned(), offset.to_string()));
    }

    params
}

async fn error_from(response: Response) -> DomainError {
    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => return map_reqwest(err),
    };
    let err = serde_json::from_str::<StoreError>(&body)
        .ok()
        .filter(|err| !err.message.is_empty() || err.code.is_some())
        .unwrap_or_else(|| StoreError::new(format!("HTTP {status}: {body}")));
    map_postgrest(err)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> DomainResult<T> {
    if !response.status().is_success() {
        return Err(error_from(response).await);
    }
    response.json::<T>().await.map_err(map_reqwest)
}

async fn send(request: RequestBuilder) -> DomainResult<Response> {
    request.send().await.map_err(map_reqwest)
}

#[async_trait]
impl ArticleStore for PostgrestArticleStore {
    async fn select(&self, query: &ArticleQuery) -> DomainResult<Vec<Article>> {
        let response = send(self.table(Method::GET).query(&query_params(query))).await?;
        let rows: Vec<ArticleRow> = read_json(response).await?;
        into_articles(rows)
    }

    async fn select_single(&self, query: &ArticleQuery) -> DomainResult<Article> {
        let request = self
            .table(Method::GET)
            .query(&query_params(query))
            .header(ACCEPT, SINGLE_OBJECT);
        let row: ArticleRow = read_json(send(request).await?).await?;
        Article::try_from(row)
    }

    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let request = self
            .table(Method::POST)
            .query(&[("select", "*")])
            .header("Prefer", RETURN_REPRESENTATION)
            .header(ACCEPT, SINGLE_OBJECT)
            .json(&NewArticleBody::from(&article));
        let row: ArticleRow = read_json(send(request).await?).await?;
        Article::try_from(row)
    }

    async fn update(&self, id: ArticleId, changes: ArticleChanges) -> DomainResult<Article> {
        if changes.is_empty() {
            return self
                .select_single(&ArticleQuery::new().eq(ArticleColumn::Id, id))
                .await;
        }

        let request = self
            .table(Method::PATCH)
            .query(&[id_filter(id)])
            .query(&[("select", "*")])
            .header("Prefer", RETURN_REPRESENTATION)
            .header(ACCEPT, SINGLE_OBJECT)
            .json(&ArticleChangesBody::from(&changes));
        let row: ArticleRow = read_json(send(request).await?).await?;
        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let request = self
            .table(Method::DELETE)
            .query(&[id_filter(id)])
            .header("Prefer", RETURN_REPRESENTATION);
        let deleted: Vec<ArticleRow> = read_json(send(request).await?).await?;
        if deleted.is_empty() {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn increment_views(&self, id: ArticleId) -> DomainResult<()> {
        let request = self
            .request(Method::POST, &format!("rpc/{INCREMENT_VIEWS_RPC}"))
            .json(&json!({ "article_id": id }));
        let response = send(request).await?;
        if !response.status().is_success() {
            return Err(error_from(response).await);
        }
        Ok(())
    }
}
