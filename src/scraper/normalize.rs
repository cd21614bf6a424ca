use std::collections::HashMap;
use std::str::FromStr;

use itertools::Itertools;
use tracing::debug;

use crate::error::{Result, ScrapeError};
use crate::model::{Column, PlayerSeasonRecord, RawTable, StatCategory, StatTable, Value};
use crate::scraper::sanitize_player_name;
use crate::scraper::table::REPEATED_HEADER_MARKER;

/// Rename source columns to canonical names and keep the category's desired columns.
///
/// Headers are looked up in the category's abbreviation table first, then
/// accepted as is when they already carry a canonical name. Headers that
/// resolve to nothing are ignored. Fails with [`ScrapeError::SchemaMismatch`]
/// when no desired column, or no `Player` column, survives.
pub fn normalize(raw: &RawTable, category: StatCategory) -> Result<StatTable> {
    let resolved = resolve_columns(raw, category);

    let columns = category
        .desired_columns()
        .iter()
        .copied()
        .filter(|c| resolved.contains_key(c))
        .collect_vec();

    debug!(
        %category,
        available = ?raw.headers,
        selected = ?columns,
        "normalizing columns"
    );

    if columns.is_empty() || !columns.contains(&Column::Player) {
        return Err(ScrapeError::SchemaMismatch { category });
    }

    let records = raw
        .rows
        .iter()
        .filter_map(|row| {
            let record: PlayerSeasonRecord = columns
                .iter()
                .map(|&column| {
                    let cell = row.get(resolved[&column]).map(String::as_str).unwrap_or_default();
                    let value = match column {
                        Column::Player => Value::Text(sanitize_player_name(cell)),
                        _ => Value::Text(cell.trim().to_string()),
                    };
                    (column, value)
                })
                .collect();
            let player = record.player();
            let keep = !player.is_empty() && player != REPEATED_HEADER_MARKER;
            keep.then_some(record)
        })
        .collect_vec();

    Ok(StatTable {
        category,
        columns,
        records,
    })
}

/// Map each canonical column to the index of the first source header that resolves to it.
fn resolve_columns(raw: &RawTable, category: StatCategory) -> HashMap<Column, usize> {
    let mapping = category.column_mapping();
    let mut resolved = HashMap::new();
    for (idx, header) in raw.headers.iter().enumerate() {
        let column = mapping
            .iter()
            .find(|(abbr, _)| abbr == header)
            .map(|(_, column)| *column)
            .or_else(|| Column::from_str(header).ok());
        if let Some(column) = column {
            resolved.entry(column).or_insert(idx);
        }
    }
    resolved
}
