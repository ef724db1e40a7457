//! Article records shown in the paged list.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;
use uuid::Uuid;

/// Opaque unique identifier of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(Uuid);

impl ArticleId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable article record.
///
/// Identity is `id`; two articles are equal only if every field matches.
/// Field names on the wire follow the corpus format (`url`, `date`).
/// `date` is written as RFC 3339; on input it may also be an ISO 8601
/// date-time without offset or a bare date, both read as UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    id: ArticleId,
    author: String,
    #[serde(rename = "url")]
    source_url: Url,
    #[serde(rename = "date", deserialize_with = "deserialize_published_at")]
    published_at: DateTime<Utc>,
    title: String,
    body: String,
}

impl Article {
    pub fn new(
        id: ArticleId,
        author: impl Into<String>,
        source_url: Url,
        published_at: DateTime<Utc>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            source_url,
            published_at,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn source_url(&self) -> &Url {
        &self.source_url
    }

    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

fn parse_published_at(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    if let Ok(at) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(at.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|at| at.and_utc())
}

fn deserialize_published_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_published_at(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid article date: {raw}")))
}
