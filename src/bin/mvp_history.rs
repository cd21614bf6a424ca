use std::process::ExitCode;

use bref_season_scraper::{logging, write_csv_file, Award, ScraperConfig, SeasonClient};
use tracing::{error, info};

const START_YEAR: u16 = 1981;
const END_YEAR: u16 = 2024;
const OUTPUT_FILE: &str = "nba_mvp_data.csv";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _logging = logging::scoped();

    let config = ScraperConfig::default().with_award(Award::Mvp);
    let dataset = match SeasonClient::with_config(config) {
        Ok(client) => client.get_seasons(START_YEAR..=END_YEAR).await,
        Err(e) => Err(e),
    };
    let dataset = match dataset {
        Ok(dataset) => dataset,
        Err(e) => {
            error!(error = %e, "failed to create the dataset");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = write_csv_file(&dataset, OUTPUT_FILE) {
        error!(error = %e, "failed to write {OUTPUT_FILE}");
        return ExitCode::FAILURE;
    }

    let summary = dataset.summary();
    info!(
        player_seasons = summary.rows,
        mvp_winners = summary.award_winners,
        first_season = ?summary.first_season,
        last_season = ?summary.last_season,
        skipped_seasons = summary.skipped_seasons,
        "dataset statistics"
    );
    ExitCode::SUCCESS
}
