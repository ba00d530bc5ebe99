// src/infrastructure/repositories/mod.rs
mod error;
mod memory_article;
mod postgres_article;
mod postgrest_article;
mod row;

pub use error::{PGRST_SINGLE_OBJECT, map_postgrest, map_reqwest, map_sqlx};
pub use memory_article::InMemoryArticleStore;
pub use postgres_article::PostgresArticleStore;
pub use postgrest_article::PostgrestArticleStore;
