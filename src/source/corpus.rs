//! Loading the article corpus used by the in-memory source.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::article::{Article, ArticleId};

/// Errors that make a corpus unusable. Fatal at startup.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Failed to read corpus file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse corpus file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Corpus contains article '{id}' more than once")]
    DuplicateId { id: ArticleId },
}

/// Reads a JSON array of articles from `path`.
pub fn load_corpus(path: &Path) -> Result<Vec<Article>, CorpusError> {
    let content = fs::read_to_string(path).map_err(|e| CorpusError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let articles = parse_corpus(&content).map_err(|e| match e {
        ParseFailure::Json(source) => CorpusError::ParseError {
            path: path.to_path_buf(),
            source,
        },
        ParseFailure::Duplicate(id) => CorpusError::DuplicateId { id },
    })?;

    tracing::debug!(path = %path.display(), count = articles.len(), "Corpus loaded");
    Ok(articles)
}

enum ParseFailure {
    Json(serde_json::Error),
    Duplicate(ArticleId),
}

fn parse_corpus(content: &str) -> Result<Vec<Article>, ParseFailure> {
    let articles: Vec<Article> = serde_json::from_str(content).map_err(ParseFailure::Json)?;
    let mut seen = HashSet::with_capacity(articles.len());
    for article in &articles {
        if !seen.insert(article.id()) {
            return Err(ParseFailure::Duplicate(article.id()));
        }
    }
    Ok(articles)
}

const SAMPLE_BASE_URL: &str = "https://example.com/articles/";
const SAMPLE_EPOCH_SECS: i64 = 1_567_501_200;

/// Deterministic synthetic corpus of `count` articles.
///
/// Ids are sequential UUIDs, so two calls with the same count produce
/// equal corpora.
pub fn sample_corpus(count: usize) -> Vec<Article> {
    let base = Url::parse(SAMPLE_BASE_URL).expect("sample base url is valid");
    (0..count)
        .map(|index| {
            let number = index + 1;
            let url = base
                .join(&number.to_string())
                .unwrap_or_else(|_| base.clone());
            let published_at =
                DateTime::<Utc>::from_timestamp(SAMPLE_EPOCH_SECS + index as i64 * 3600, 0)
                    .unwrap_or_default();
            Article::new(
                ArticleId::new(Uuid::from_u128(number as u128)),
                format!("Author {}", number % 7 + 1),
                url,
                published_at,
                format!("Article #{}", number),
                format!("Body of article #{}.", number),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_corpus_is_deterministic_and_unique() {
        let a = sample_corpus(60);
        let b = sample_corpus(60);
        assert_eq!(a, b);
        let ids: HashSet<_> = a.iter().map(Article::id).collect();
        assert_eq!(ids.len(), 60);
        assert_eq!(a[0].title(), "Article #1");
        assert_eq!(a[59].source_url().as_str(), "https://example.com/articles/60");
    }

    #[test]
    fn parse_rejects_duplicates() {
        let json = serde_json::to_string(&vec![sample_corpus(1)[0].clone(); 2]).unwrap();
        assert!(matches!(
            parse_corpus(&json),
            Err(ParseFailure::Duplicate(_))
        ));
    }

    #[test]
    fn parse_accepts_serialized_sample() {
        let json = serde_json::to_string(&sample_corpus(3)).unwrap();
        let parsed = parse_corpus(&json).ok().unwrap();
        assert_eq!(parsed, sample_corpus(3));
    }
}
