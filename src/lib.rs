//! Scrape season-level NBA player statistics from basketball-reference.com.
//!
//! Each season's per-game and advanced tables are fetched, their columns
//! renamed to canonical names, and the two joined per player. Optionally an
//! award winner is flagged. Seasons are then concatenated into one dataset
//! ready to be written as CSV.

pub use client::SeasonClient;
pub use config::ScraperConfig;
pub use error::{Result, ScrapeError};
pub use model::*;
pub use output::{write_csv, write_csv_file};
pub use crate::scraper::{HttpFetcher, PageSource, SeasonStage};

mod client;
pub mod config;
mod error;
pub mod logging;
mod model;
pub mod output;
pub mod scraper;
