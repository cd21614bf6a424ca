use std::ops::RangeInclusive;

use tracing::instrument;

use crate::config::ScraperConfig;
use crate::error::Result;
use crate::model::*;
use crate::scraper::{self, HttpFetcher, PageSource};

/// The main entry point for scraping season statistics.
///
/// `SeasonClient` pairs a [`PageSource`] (by default the rate-limited
/// [`HttpFetcher`]) with a [`ScraperConfig`] and exposes the pipeline one
/// level at a time: a single stat table, one merged season, or a range of
/// seasons.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> bref_season_scraper::Result<()> {
/// use bref_season_scraper::{Award, ScraperConfig, SeasonClient};
///
/// let client = SeasonClient::with_config(ScraperConfig::default().with_award(Award::Mvp))?;
/// let dataset = client.get_seasons(2020..=2024).await?;
/// println!("Collected {} player-seasons", dataset.len());
/// # Ok(())
/// # }
/// ```
pub struct SeasonClient<S = HttpFetcher> {
    source: S,
    config: ScraperConfig,
}

impl SeasonClient<HttpFetcher> {
    /// Create a client with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(ScraperConfig::default())
    }

    /// Create a client that fetches over HTTP with the given settings.
    pub fn with_config(config: ScraperConfig) -> Result<Self> {
        let source = HttpFetcher::new(&config)?;
        Ok(Self { source, config })
    }
}

impl<S: PageSource> SeasonClient<S> {
    /// Create a client that reads pages from `source`.
    pub fn with_source(source: S, config: ScraperConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Fetch the per-game table for a season.
    #[instrument(skip(self))]
    pub async fn get_basic_stats(&self, year: Season) -> Result<StatTable> {
        scraper::season::get_stats(&self.source, &self.config, StatCategory::Basic, year).await
    }

    /// Fetch the advanced table for a season.
    #[instrument(skip(self))]
    pub async fn get_advanced_stats(&self, year: Season) -> Result<StatTable> {
        scraper::season::get_stats(&self.source, &self.config, StatCategory::Advanced, year).await
    }

    /// Fetch the name of an award's winner for a season.
    #[instrument(skip(self))]
    pub async fn get_award_winner(&self, award: Award, year: Season) -> Result<String> {
        scraper::award::get_award_winner(&self.source, &self.config, award, year).await
    }

    /// Fetch and merge all stat categories of one season, without final cleanup.
    #[instrument(skip(self))]
    pub async fn get_season(&self, year: Season) -> Result<SeasonRecords> {
        scraper::season::get_season(&self.source, &self.config, year).await
    }

    /// Scrape one season into a finished dataset. Any failure fails the call.
    #[instrument(skip(self))]
    pub async fn get_single_season(&self, year: Season) -> Result<AggregateDataset> {
        let season = self.get_season(year).await?;
        Ok(scraper::aggregate::single_season(season, self.config.award))
    }

    /// Scrape a range of seasons, skipping the ones that fail.
    #[instrument(skip(self))]
    pub async fn get_seasons(&self, years: RangeInclusive<Season>) -> Result<AggregateDataset> {
        scraper::aggregate::get_seasons(&self.source, &self.config, years).await
    }
}
