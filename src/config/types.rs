use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::paging::DEFAULT_PAGE_SIZE;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paging: PagingSettings,
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub view: ViewSettings,
}

/// Pagination settings, fixed for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagingSettings {
    /// Articles requested per fetch (default: 20).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

/// Where articles come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSettings {
    /// JSON corpus file. A synthetic corpus is used when unset.
    #[serde(default)]
    pub corpus_path: Option<PathBuf>,
    /// Simulated fetch latency in milliseconds (default: 1000).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Fail fetches slower than this many milliseconds.
    #[serde(default)]
    pub fetch_timeout_ms: Option<u64>,
    /// Size of the synthetic corpus (default: 100).
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

/// Terminal list settings for the demo harness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    /// Rows visible at once (default: 10).
    #[serde(default = "default_viewport_rows")]
    pub viewport_rows: usize,
    /// Rows from the bottom that trigger loading more (default: 3).
    #[serde(default = "default_near_bottom_rows")]
    pub near_bottom_rows: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_latency_ms() -> u64 {
    1000
}

fn default_sample_size() -> usize {
    100
}

fn default_viewport_rows() -> usize {
    10
}

fn default_near_bottom_rows() -> usize {
    3
}

impl Default for PagingSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            corpus_path: None,
            latency_ms: default_latency_ms(),
            fetch_timeout_ms: None,
            sample_size: default_sample_size(),
        }
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            viewport_rows: default_viewport_rows(),
            near_bottom_rows: default_near_bottom_rows(),
        }
    }
}
