use std::process::ExitCode;

use bref_season_scraper::{logging, write_csv_file, SeasonClient};
use tracing::{error, info};

const YEAR: u16 = 2025;
const OUTPUT_FILE: &str = "nba_2025_season.csv";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _logging = logging::scoped();

    let dataset = match SeasonClient::new() {
        Ok(client) => client.get_single_season(YEAR).await,
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

    info!(players = dataset.len(), season = YEAR, "done");
    ExitCode::SUCCESS
}
