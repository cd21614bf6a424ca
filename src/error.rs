use ::scraper::error::SelectorErrorKind;

use crate::model::{Season, StatCategory};
use crate::scraper::SeasonStage;

/// All errors that can occur while scraping and merging season statistics.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// The expected stats table is missing from a fetched page.
    #[error("table `{selector}` not found")]
    TableNotFound { selector: String },

    /// An expected HTML element was not found on the page.
    #[error("expected element not found: {context}")]
    ElementNotFound { context: &'static str },

    /// None of the canonical columns could be recovered from a table.
    #[error("no known {category} columns found in table")]
    SchemaMismatch { category: StatCategory },

    /// One stage of a season's pipeline failed.
    #[error("season {year} failed at {stage}: {source}")]
    Season {
        year: Season,
        stage: SeasonStage,
        source: Box<ScrapeError>,
    },

    /// Every season in the requested range failed.
    #[error("no data collected for seasons {start}..={end}")]
    NoDataCollected { start: Season, end: Season },

    #[error("csv output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    /// Whether this error came from the transport layer rather than page content.
    pub fn is_network(&self) -> bool {
        match self {
            ScrapeError::Http { .. }
            | ScrapeError::UnexpectedStatus { .. }
            | ScrapeError::ResponseBody { .. } => true,
            ScrapeError::Season { source, .. } => source.is_network(),
            _ => false,
        }
    }

    /// The innermost error, looking through season wrappers.
    pub fn root_cause(&self) -> &ScrapeError {
        match self {
            ScrapeError::Season { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl<'a> From<SelectorErrorKind<'a>> for ScrapeError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        ScrapeError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
