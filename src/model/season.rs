use serde::Serialize;

use super::Column;

/// A league season, identified by the calendar year in which it ends.
pub type Season = u16;

/// A per-player stats table published once per season.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum StatCategory {
    Basic,
    Advanced,
}

const BASIC_COLUMN_MAPPING: &[(&str, Column)] = &[
    ("Tm", Column::Team),
    ("Pos", Column::Position),
    ("G", Column::Games),
    ("MP", Column::Minutes),
    ("PTS", Column::Points),
    ("TRB", Column::Rebounds),
    ("AST", Column::Assists),
    ("STL", Column::Steals),
    ("BLK", Column::Blocks),
    ("TOV", Column::Turnovers),
    ("FG%", Column::FgPct),
    ("3P%", Column::ThreePointPct),
    ("FT%", Column::FtPct),
];

const BASIC_COLUMNS: &[Column] = &[
    Column::Player,
    Column::Team,
    Column::Position,
    Column::Games,
    Column::Minutes,
    Column::Points,
    Column::Rebounds,
    Column::Assists,
    Column::Steals,
    Column::Blocks,
    Column::Turnovers,
    Column::FgPct,
    Column::ThreePointPct,
    Column::FtPct,
];

const ADVANCED_COLUMN_MAPPING: &[(&str, Column)] = &[
    ("Tm", Column::Team),
    ("PER", Column::PlayerEfficiencyRating),
    ("WS", Column::WinShares),
    ("BPM", Column::BoxPlusMinus),
    ("USG%", Column::UsageRate),
    ("VORP", Column::ValueOverReplacement),
    ("WS/48", Column::WinSharesPer48),
];

// Team is only kept for the (Player, Team) join and never copied into merged rows.
const ADVANCED_COLUMNS: &[Column] = &[
    Column::Player,
    Column::Team,
    Column::PlayerEfficiencyRating,
    Column::WinShares,
    Column::BoxPlusMinus,
    Column::UsageRate,
    Column::ValueOverReplacement,
    Column::WinSharesPer48,
];

impl StatCategory {
    /// Source abbreviation to canonical column.
    pub fn column_mapping(self) -> &'static [(&'static str, Column)] {
        match self {
            StatCategory::Basic => BASIC_COLUMN_MAPPING,
            StatCategory::Advanced => ADVANCED_COLUMN_MAPPING,
        }
    }

    /// The columns kept after renaming, in output order.
    pub fn desired_columns(self) -> &'static [Column] {
        match self {
            StatCategory::Basic => BASIC_COLUMNS,
            StatCategory::Advanced => ADVANCED_COLUMNS,
        }
    }

    pub fn path(self, year: Season) -> String {
        match self {
            StatCategory::Basic => format!("/leagues/NBA_{year}_per_game.html"),
            StatCategory::Advanced => format!("/leagues/NBA_{year}_advanced.html"),
        }
    }

    /// CSS selector for the stats table on the category's page.
    pub fn table_selector(self) -> &'static str {
        match self {
            StatCategory::Basic => "table#per_game_stats",
            StatCategory::Advanced => "table.stats_table",
        }
    }
}

/// A season award whose winner is flagged in the merged rows.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Award {
    Mvp,
    Roy,
    Dpoy,
    Smoy,
    Mip,
}

impl Award {
    pub fn path(self, year: Season) -> String {
        format!("/awards/awards_{year}.html")
    }

    pub fn table_selector(self) -> &'static str {
        match self {
            Award::Mvp => "table#mvp",
            Award::Roy => "table#roy",
            Award::Dpoy => "table#dpoy",
            Award::Smoy => "table#smoy",
            Award::Mip => "table#mip",
        }
    }

    /// The 0/1 flag column written for this award.
    pub fn column(self) -> Column {
        match self {
            Award::Mvp => Column::Mvp,
            Award::Roy => Column::Roy,
            Award::Dpoy => Column::Dpoy,
            Award::Smoy => Column::Smoy,
            Award::Mip => Column::Mip,
        }
    }
}

/// How players who appear once per team (after a mid-season trade) are joined.
#[derive(Default, Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum TradedPlayerPolicy {
    /// Keep the combined multi-team row (`TOT`, `2TM`, ...) and drop the
    /// per-team rows listed after it. Rows of untraded players are all kept,
    /// so different players who share a name stay apart.
    #[default]
    CombinedRow,
    /// Keep every row and join on `(Player, Team)`.
    PerTeam,
}
