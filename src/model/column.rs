use serde::Serialize;

/// A canonical output column.
///
/// Declaration order is the canonical output order, so the derived `Ord`
/// sorts columns the way they are written out.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
pub enum Column {
    Season,
    Player,
    Team,
    Position,
    Games,
    Minutes,
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
    Turnovers,
    #[strum(serialize = "FG_Pct")]
    #[serde(rename = "FG_Pct")]
    FgPct,
    #[strum(serialize = "3P_Pct")]
    #[serde(rename = "3P_Pct")]
    ThreePointPct,
    #[strum(serialize = "FT_Pct")]
    #[serde(rename = "FT_Pct")]
    FtPct,
    #[strum(serialize = "Player_Efficiency_Rating")]
    #[serde(rename = "Player_Efficiency_Rating")]
    PlayerEfficiencyRating,
    #[strum(serialize = "Win_Shares")]
    #[serde(rename = "Win_Shares")]
    WinShares,
    #[strum(serialize = "Box_Plus_Minus")]
    #[serde(rename = "Box_Plus_Minus")]
    BoxPlusMinus,
    #[strum(serialize = "Usage_Rate")]
    #[serde(rename = "Usage_Rate")]
    UsageRate,
    #[strum(serialize = "Value_Over_Replacement")]
    #[serde(rename = "Value_Over_Replacement")]
    ValueOverReplacement,
    #[strum(serialize = "Win_Shares_Per_48")]
    #[serde(rename = "Win_Shares_Per_48")]
    WinSharesPer48,
    #[strum(serialize = "MVP")]
    #[serde(rename = "MVP")]
    Mvp,
    #[strum(serialize = "ROY")]
    #[serde(rename = "ROY")]
    Roy,
    #[strum(serialize = "DPOY")]
    #[serde(rename = "DPOY")]
    Dpoy,
    #[strum(serialize = "SMOY")]
    #[serde(rename = "SMOY")]
    Smoy,
    #[strum(serialize = "MIP")]
    #[serde(rename = "MIP")]
    Mip,
}

impl Column {
    /// Columns coerced to floating point when a dataset is finalized.
    pub const NUMERIC: [Column; 16] = [
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
        Column::PlayerEfficiencyRating,
        Column::WinShares,
        Column::BoxPlusMinus,
        Column::UsageRate,
        Column::ValueOverReplacement,
        Column::WinSharesPer48,
    ];

    pub fn is_numeric(self) -> bool {
        Column::NUMERIC.contains(&self)
    }
}
