pub mod entity;
pub mod query;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleChanges, NewArticle};
pub use query::{ArticleColumn, ArticleFilter, ArticleOrder, ArticleQuery, FilterValue};
pub use repository::ArticleStore;
pub use value_objects::{ArticleId, ArticleSlug, ArticleTitle};
