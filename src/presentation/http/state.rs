// src/presentation/http/state.rs
use crate::application::articles::ArticleService;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub articles: Arc<ArticleService>,
}

impl HttpState {
    pub fn new(articles: Arc<ArticleService>) -> Self {
        Self { articles }
    }
}
