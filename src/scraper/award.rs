use ::scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::model::{Award, Season};
use crate::scraper::table::with_table;
use crate::scraper::{cell_text, sanitize_player_name, PageSource};

/// Fetch the award page for `year` and return the winner's name.
#[instrument(skip(source, config))]
pub async fn get_award_winner<S: PageSource>(
    source: &S,
    config: &ScraperConfig,
    award: Award,
    year: Season,
) -> Result<String> {
    let url = config.url(&award.path(year));
    let document = source.fetch_page(&url).await?;
    let winner = parse_award_winner(&document, award)?;
    debug!(%award, year, %winner, "found award winner");
    Ok(winner)
}

/// The `data-stat="player"` cell of the first body row of the award's voting table.
///
/// A first row without a player name is an error; later rows are never consulted.
pub fn parse_award_winner(document: &Html, award: Award) -> Result<String> {
    with_table(document, award.table_selector(), first_row_player)
}

fn first_row_player(table: ElementRef) -> Result<String> {
    let row_selector = Selector::parse("tbody tr")?;
    let player_selector = Selector::parse(r#"td[data-stat="player"]"#)?;

    table
        .select(&row_selector)
        .next()
        .and_then(|row| row.select(&player_selector).next())
        .map(|cell| sanitize_player_name(&cell_text(&cell)))
        .filter(|name| !name.is_empty())
        .ok_or(ScrapeError::ElementNotFound {
            context: "award winner row",
        })
}
