use std::ops::RangeInclusive;

use itertools::Itertools;
use tracing::{error, info, instrument};

use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::model::{AggregateDataset, Award, Column, MergedSeasonRecord, Season, SeasonRecords, Value};
use crate::scraper::season::get_season;
use crate::scraper::PageSource;

/// Scrape every season in `years`, oldest first, into one dataset.
///
/// A failed season is logged and left out. Fails with
/// [`ScrapeError::NoDataCollected`] only when no season succeeds.
#[instrument(skip(source, config))]
pub async fn get_seasons<S: PageSource>(
    source: &S,
    config: &ScraperConfig,
    years: RangeInclusive<Season>,
) -> Result<AggregateDataset> {
    let (start, end) = (*years.start(), *years.end());
    let total = years.len();

    let mut seasons = Vec::with_capacity(total);
    let mut skipped = Vec::new();
    for (idx, year) in years.enumerate() {
        info!(year, progress = %format_args!("{}/{total}", idx + 1), "season");
        match get_season(source, config, year).await {
            Ok(season) => seasons.push(season),
            Err(e) => {
                error!(year, error = %e, "season failed, skipping");
                skipped.push(year);
            }
        }
    }

    if seasons.is_empty() {
        return Err(ScrapeError::NoDataCollected { start, end });
    }

    let dataset = concat_seasons(seasons, skipped, config.award);
    info!(
        rows = dataset.len(),
        seasons = dataset.seasons.len(),
        skipped = dataset.skipped.len(),
        "aggregated seasons"
    );
    Ok(dataset)
}

/// Turn a single season into a dataset with the same cleanup as a multi-season run.
pub fn single_season(season: SeasonRecords, award: Option<Award>) -> AggregateDataset {
    concat_seasons(vec![season], Vec::new(), award)
}

/// Concatenate seasons in ascending order and finalize the cells.
///
/// Columns are the union over all seasons: `Season` first, then canonical
/// order. Listed numeric columns become floats and every absent or
/// unparseable cell becomes 0.
pub fn concat_seasons(
    mut seasons: Vec<SeasonRecords>,
    skipped: Vec<Season>,
    award: Option<Award>,
) -> AggregateDataset {
    // Stable, so rows within a season keep their order.
    seasons.sort_by_key(|s| s.year);

    let columns = seasons
        .iter()
        .flat_map(|s| s.columns.iter().copied())
        .chain([Column::Season])
        .sorted()
        .dedup()
        .collect_vec();

    let years = seasons.iter().map(|s| s.year).collect_vec();
    let mut records = seasons.into_iter().flat_map(|s| s.records).collect_vec();

    coerce_numeric(&mut records);
    fill_missing(&mut records, &columns);

    AggregateDataset {
        columns,
        records,
        seasons: years,
        skipped,
        award,
    }
}

/// Convert every numeric column to a float. Unparseable text becomes `Missing`.
/// Applying this twice changes nothing.
pub fn coerce_numeric(records: &mut [MergedSeasonRecord]) {
    for record in records {
        for (column, value) in record.fields_mut() {
            if column.is_numeric() {
                *value = value.to_float();
            }
        }
    }
}

/// Give every record every column, replacing absent and missing cells with 0.
pub fn fill_missing(records: &mut [MergedSeasonRecord], columns: &[Column]) {
    for record in records {
        for &column in columns {
            let zero = if column.is_numeric() {
                Value::Float(0.0)
            } else {
                Value::Integer(0)
            };
            match record.get(column) {
                Some(value) if !value.is_missing() => {}
                _ => record.insert(column, zero),
            }
        }
    }
}
