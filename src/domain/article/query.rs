// src/domain/article/query.rs
//! Typed query description handed to an [`ArticleStore`](super::ArticleStore).
//!
//! The builder only records intent; each store adapter renders it into its
//! own dialect (PostgREST query parameters, parameterized SQL, or an
//! in-memory predicate).

use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainError;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleColumn {
    Id,
    CreatedAt,
    Title,
    Slug,
    BodyHtml,
    Url,
    Excerpt,
    CoverImage,
    Published,
    Views,
    Tags,
}

impl ArticleColumn {
    pub const ALL: [Self; 11] = [
        Self::Id,
        Self::CreatedAt,
        Self::Title,
        Self::Slug,
        Self::BodyHtml,
        Self::Url,
        Self::Excerpt,
        Self::CoverImage,
        Self::Published,
        Self::Views,
        Self::Tags,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::CreatedAt => "created_at",
            Self::Title => "title",
            Self::Slug => "slug",
            Self::BodyHtml => "body_html",
            Self::Url => "url",
            Self::Excerpt => "excerpt",
            Self::CoverImage => "cover_image",
            Self::Published => "published",
            Self::Views => "views",
            Self::Tags => "tags",
        }
    }
}

impl fmt::Display for ArticleColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleColumn {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.as_str() == value)
            .ok_or_else(|| DomainError::Validation(format!("unknown article column: {value}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Bool(bool),
    Text(String),
    Id(ArticleId),
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<ArticleId> for FilterValue {
    fn from(value: ArticleId) -> Self {
        Self::Id(value)
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => value.fmt(f),
            Self::Text(value) => f.write_str(value),
            Self::Id(value) => value.fmt(f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleFilter {
    Eq(ArticleColumn, FilterValue),
    /// Case-insensitive substring match against any of `columns`.
    ILikeAny {
        columns: Vec<ArticleColumn>,
        needle: String,
    },
    /// Array column holding every one of `values`.
    Contains(ArticleColumn, Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleOrder {
    pub column: ArticleColumn,
    pub ascending: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    filters: Vec<ArticleFilter>,
    order: Option<ArticleOrder>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl ArticleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: ArticleColumn, value: impl Into<FilterValue>) -> Self {
        self.filters.push(ArticleFilter::Eq(column, value.into()));
        self
    }

    pub fn ilike_any(mut self, columns: &[ArticleColumn], needle: impl Into<String>) -> Self {
        self.filters.push(ArticleFilter::ILikeAny {
            columns: columns.to_vec(),
            needle: needle.into(),
        });
        self
    }

    pub fn contains<I, S>(mut self, column: ArticleColumn, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.push(ArticleFilter::Contains(
            column,
            values.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn order(mut self, column: ArticleColumn, ascending: bool) -> Self {
        self.order = Some(ArticleOrder { column, ascending });
        self
    }

    pub fn limit(mut self, count: u64) -> Self {
        self.limit = Some(count);
        self
    }

    /// Inclusive row range; replaces any previous limit.
    pub fn range(mut self, from: u64, to: u64) -> Self {
        self.offset = Some(from);
        self.limit = Some(to.saturating_sub(from).saturating_add(1));
        self
    }

    pub fn filters(&self) -> &[ArticleFilter] {
        &self.filters
    }

    pub fn ordering(&self) -> Option<ArticleOrder> {
        self.order
    }

    pub fn row_limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn row_offset(&self) -> Option<u64> {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names_round_trip() {
        for column in ArticleColumn::ALL {
            assert_eq!(column.as_str().parse::<ArticleColumn>().unwrap(), column);
        }
        assert!("author".parse::<ArticleColumn>().is_err());
    }

    #[test]
    fn range_sets_offset_and_limit() {
        let query = ArticleQuery::new().limit(3).range(20, 29);
        assert_eq!(query.row_offset(), Some(20));
        assert_eq!(query.row_limit(), Some(10));
    }

    #[test]
    fn builder_records_filters_in_order() {
        let query = ArticleQuery::new()
            .eq(ArticleColumn::Published, true)
            .contains(ArticleColumn::Tags, ["rust"])
            .order(ArticleColumn::Views, false);

        assert_eq!(
            query.filters(),
            &[
                ArticleFilter::Eq(ArticleColumn::Published, FilterValue::Bool(true)),
                ArticleFilter::Contains(ArticleColumn::Tags, vec!["rust".to_string()]),
            ]
        );
        assert_eq!(
            query.ordering(),
            Some(ArticleOrder {
                column: ArticleColumn::Views,
                ascending: false
            })
        );
        assert_eq!(query.row_limit(), None);
    }
}
