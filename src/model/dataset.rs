use super::{Award, Column, MergedSeasonRecord, Season};

/// All merged records of one season, in source row order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonRecords {
    pub year: Season,
    /// Columns present in the records, in canonical order.
    pub columns: Vec<Column>,
    pub records: Vec<MergedSeasonRecord>,
}

/// Merged records across every season that was scraped successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateDataset {
    /// Output columns: `Season` first, the rest in canonical order.
    pub columns: Vec<Column>,
    /// Ascending by season, source row order within a season.
    pub records: Vec<MergedSeasonRecord>,
    /// Seasons included in `records`, ascending.
    pub seasons: Vec<Season>,
    /// Seasons that failed and were left out.
    pub skipped: Vec<Season>,
    pub award: Option<Award>,
}

/// Headline numbers about a dataset, logged once a run finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub rows: usize,
    pub first_season: Option<Season>,
    pub last_season: Option<Season>,
    pub skipped_seasons: usize,
    pub award: Option<Award>,
    pub award_winners: usize,
}

impl AggregateDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> DatasetSummary {
        let award_winners = self
            .award
            .map(|award| {
                self.records
                    .iter()
                    .filter(|r| r.get(award.column()).and_then(|v| v.as_f64()) == Some(1.0))
                    .count()
            })
            .unwrap_or(0);

        DatasetSummary {
            rows: self.records.len(),
            first_season: self.seasons.first().copied(),
            last_season: self.seasons.last().copied(),
            skipped_seasons: self.skipped.len(),
            award: self.award,
            award_winners,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    fn record(year: i64, player: &str, mvp: i64) -> MergedSeasonRecord {
        [
            (Column::Season, Value::Integer(year)),
            (Column::Player, Value::Text(player.into())),
            (Column::Mvp, Value::Integer(mvp)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_summary_counts_award_winners() {
        let dataset = AggregateDataset {
            columns: vec![Column::Season, Column::Player, Column::Mvp],
            records: vec![
                record(1981, "A", 1),
                record(1981, "B", 0),
                record(1983, "C", 1),
            ],
            seasons: vec![1981, 1983],
            skipped: vec![1982],
            award: Some(Award::Mvp),
        };

        let summary = dataset.summary();
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.first_season, Some(1981));
        assert_eq!(summary.last_season, Some(1983));
        assert_eq!(summary.skipped_seasons, 1);
        assert_eq!(summary.award_winners, 2);
    }

    #[test]
    fn test_summary_without_award() {
        let dataset = AggregateDataset {
            columns: vec![Column::Season, Column::Player],
            records: vec![record(2025, "A", 1)],
            seasons: vec![2025],
            skipped: vec![],
            award: None,
        };
        assert_eq!(dataset.summary().award_winners, 0);
    }
}
