use std::collections::HashMap;

use itertools::Itertools;
use tracing::{debug, info, instrument};

use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::model::{
    Column, MergedSeasonRecord, PlayerSeasonRecord, Season, SeasonRecords, StatCategory,
    StatTable, TradedPlayerPolicy, Value,
};
use crate::scraper::award::get_award_winner;
use crate::scraper::normalize::normalize;
use crate::scraper::table::extract_table;
use crate::scraper::PageSource;

/// The fallible stages of one season, in the order they run. A failing stage
/// ends the season; merging and stamping the season cannot fail.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum SeasonStage {
    FetchBasic,
    FetchAdvanced,
    FetchAward,
}

fn at(year: Season, stage: SeasonStage) -> impl FnOnce(ScrapeError) -> ScrapeError {
    move |source| ScrapeError::Season {
        year,
        stage,
        source: Box::new(source),
    }
}

/// Fetch one stat category page for `year` and normalize its table.
#[instrument(skip(source, config))]
pub async fn get_stats<S: PageSource>(
    source: &S,
    config: &ScraperConfig,
    category: StatCategory,
    year: Season,
) -> Result<StatTable> {
    let url = config.url(&category.path(year));
    let document = source.fetch_page(&url).await?;
    let raw = extract_table(&document, category.table_selector())?;
    let stats = normalize(&raw, category)?;
    debug!(%category, year, rows = stats.len(), "extracted stats");
    Ok(stats)
}

/// Build the merged records of one season.
///
/// Basic and advanced stats are required. When the config tracks an award
/// the winner lookup is required too, and its failure fails the season.
/// Errors are wrapped in [`ScrapeError::Season`] naming the failed stage.
#[instrument(skip(source, config))]
pub async fn get_season<S: PageSource>(
    source: &S,
    config: &ScraperConfig,
    year: Season,
) -> Result<SeasonRecords> {
    info!(year, "scraping season");

    let basic = get_stats(source, config, StatCategory::Basic, year)
        .await
        .map_err(at(year, SeasonStage::FetchBasic))?;

    let advanced = get_stats(source, config, StatCategory::Advanced, year)
        .await
        .map_err(at(year, SeasonStage::FetchAdvanced))?;

    let winner = match config.award {
        Some(award) => Some((
            award,
            get_award_winner(source, config, award, year)
                .await
                .map_err(at(year, SeasonStage::FetchAward))?,
        )),
        None => None,
    };

    let (mut columns, mut records) =
        merge_stats(&basic, &advanced, config.traded_player_policy);

    if let Some((award, winner)) = &winner {
        flag_award_winner(&mut records, award.column(), winner);
        columns.push(award.column());
    }
    stamp_season(&mut records, year);
    columns.push(Column::Season);
    columns.sort();

    info!(year, rows = records.len(), "merged season");

    Ok(SeasonRecords {
        year,
        columns,
        records,
    })
}

/// Left join of basic onto advanced records.
///
/// Rows are keyed on `(Player, Team)` when both tables carry a team, on
/// `Player` alone otherwise. Every retained basic row is kept, in order, and
/// matches at most one advanced row.
/// Advanced fields without a match are [`Value::Missing`]. Returns the merged
/// columns in canonical order along with the records.
pub fn merge_stats(
    basic: &StatTable,
    advanced: &StatTable,
    policy: TradedPlayerPolicy,
) -> (Vec<Column>, Vec<MergedSeasonRecord>) {
    let by_team =
        basic.columns.contains(&Column::Team) && advanced.columns.contains(&Column::Team);
    let key = |record: &PlayerSeasonRecord| {
        let team = if by_team { record.team() } else { None };
        (record.player().to_owned(), team.map(str::to_owned))
    };

    let basic_rows = retained_rows(basic, policy);

    let mut advanced_by_key: HashMap<(String, Option<String>), &PlayerSeasonRecord> =
        HashMap::new();
    for record in retained_rows(advanced, policy) {
        advanced_by_key.entry(key(record)).or_insert(record);
    }

    let advanced_columns = advanced
        .columns
        .iter()
        .copied()
        .filter(|c| !matches!(c, Column::Player | Column::Team))
        .collect_vec();

    let mut unmatched = 0usize;
    let records = basic_rows
        .into_iter()
        .map(|record| {
            let mut merged = record.clone();
            let matched = advanced_by_key.get(&key(record));
            if matched.is_none() {
                unmatched += 1;
            }
            for &column in &advanced_columns {
                let value = matched
                    .and_then(|m| m.get(column))
                    .cloned()
                    .unwrap_or(Value::Missing);
                merged.insert(column, value);
            }
            merged
        })
        .collect_vec();

    if unmatched > 0 {
        debug!(unmatched, "basic rows without advanced stats");
    }

    let columns = basic
        .columns
        .iter()
        .chain(&advanced_columns)
        .copied()
        .sorted()
        .dedup()
        .collect_vec();

    (columns, records)
}

fn retained_rows(table: &StatTable, policy: TradedPlayerPolicy) -> Vec<&PlayerSeasonRecord> {
    if policy == TradedPlayerPolicy::PerTeam {
        return table.records.iter().collect();
    }

    // Player -> whether their first row is a combined multi-team row.
    let mut first_row_combined: HashMap<&str, bool> = HashMap::new();
    let mut rows = Vec::with_capacity(table.records.len());
    for record in &table.records {
        let player = record.player();
        match first_row_combined.get(player) {
            Some(true) => continue,
            Some(false) => {}
            None => {
                let combined = record.team().is_some_and(is_combined_team);
                first_row_combined.insert(player, combined);
            }
        }
        rows.push(record);
    }
    rows
}

/// `TOT` on older pages, `2TM`, `3TM`, ... on newer ones.
fn is_combined_team(team: &str) -> bool {
    team == "TOT"
        || team
            .strip_suffix("TM")
            .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

/// Set `column` to 1 on rows whose player is `winner` and to 0 everywhere else.
pub fn flag_award_winner(records: &mut [MergedSeasonRecord], column: Column, winner: &str) {
    for record in records {
        let flag = i64::from(record.player() == winner);
        record.insert(column, Value::Integer(flag));
    }
}

fn stamp_season(records: &mut [MergedSeasonRecord], year: Season) {
    for record in records {
        record.insert(Column::Season, Value::Integer(i64::from(year)));
    }
}
