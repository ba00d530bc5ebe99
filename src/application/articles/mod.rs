// src/application/articles/mod.rs
mod create;
mod delete;
mod failure;
mod get_by_id;
mod get_by_slug;
mod highlights;
mod list;
mod search;
mod service;
mod update;
mod views;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use list::ListArticlesQuery;
pub use service::{ArticleService, DEFAULT_HIGHLIGHT_LIMIT, DEFAULT_PAGE_SIZE};
pub use update::UpdateArticleCommand;
