pub mod aggregate;
pub mod award;
pub mod normalize;
pub mod season;
pub mod table;

use std::time::Duration;

pub use ::scraper::Html;
use ::scraper::ElementRef;
use tracing::{debug, instrument, warn};

use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};

pub use season::SeasonStage;

/// Where pages come from. The live implementation is [`HttpFetcher`]; tests
/// serve fixed HTML instead.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Fetch and parse one page. A failed fetch is final, there are no retries.
    async fn fetch_page(&self, url: &str) -> Result<Html>;
}

/// Rate-limited HTTP page fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
    delay: Duration,
}

impl HttpFetcher {
    /// Build a fetcher that sends the configured `User-Agent` and sleeps
    /// `request_delay` before every request.
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ScrapeError::Http {
                url: config.base_url.clone(),
                source: e,
            })?;
        Ok(Self::with_client(http, config.request_delay))
    }

    /// Use the provided [`reqwest::Client`] as is.
    pub fn with_client(client: reqwest::Client, delay: Duration) -> Self {
        Self {
            http: client,
            delay,
        }
    }
}

impl PageSource for HttpFetcher {
    #[instrument(skip(self))]
    async fn fetch_page(&self, url: &str) -> Result<Html> {
        tokio::time::sleep(self.delay).await;
        get_document(&self.http, url).await.inspect_err(|e| {
            warn!(url, error = %e, "fetch failed");
        })
    }
}

/// Fetch a URL and parse the response body as an HTML document.
pub(crate) async fn get_document(client: &reqwest::Client, url: &str) -> Result<Html> {
    debug!(url, "fetching page");

    let response = client.get(url).send().await.map_err(|e| ScrapeError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| ScrapeError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    Ok(Html::parse_document(&body))
}

/// Extract trimmed text from a table cell.
pub(crate) fn cell_text(el: &ElementRef) -> String {
    el.text()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip whitespace and the trailing `*` hall-of-fame marker from a player name.
pub(crate) fn sanitize_player_name(name: &str) -> String {
    name.trim().trim_end_matches('*').trim_end().to_string()
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    /// Serves fixed HTML by URL and records every request in order.
    #[derive(Default)]
    pub(crate) struct StaticPages {
        pages: HashMap<String, String>,
        pub(crate) requests: RefCell<Vec<String>>,
    }

    impl StaticPages {
        pub(crate) fn with_page(mut self, url: String, html: impl Into<String>) -> Self {
            self.pages.insert(url, html.into());
            self
        }
    }

    /// A per-game page with one `(player, team, points)` row each, plus a
    /// repeated header row after the first player.
    pub(crate) fn basic_page(rows: &[(&str, &str, &str)]) -> String {
        let header = "<tr><th>Rk</th><th>Player</th><th>Tm</th><th>Pos</th><th>G</th><th>MP</th><th>FG%</th><th>PTS</th></tr>";
        let body = rows
            .iter()
            .enumerate()
            .map(|(i, (player, team, points))| {
                let row = format!(
                    "<tr><th>{}</th><td>{player}</td><td>{team}</td><td>G</td><td>70</td><td>34.0</td><td>.500</td><td>{points}</td></tr>",
                    i + 1
                );
                if i == 0 {
                    format!("{row}<tr class=\"thead\">{}</tr>", &header[4..header.len() - 5])
                } else {
                    row
                }
            })
            .collect::<String>();
        format!(
            "<html><body><table id=\"per_game_stats\"><thead>{header}</thead><tbody>{body}</tbody></table></body></html>"
        )
    }

    /// An advanced page with one `(player, team, per)` row each.
    pub(crate) fn advanced_page(rows: &[(&str, &str, &str)]) -> String {
        let body = rows
            .iter()
            .enumerate()
            .map(|(i, (player, team, per))| {
                format!(
                    "<tr><th>{}</th><td>{player}</td><td>{team}</td><td>{per}</td><td>5.0</td><td>.150</td><td>2.5</td><td>20.1</td><td>1.5</td></tr>",
                    i + 1
                )
            })
            .collect::<String>();
        format!(
            "<html><body><table id=\"advanced\" class=\"stats_table sortable\"><thead><tr><th>Rk</th><th>Player</th><th>Tm</th><th>PER</th><th>WS</th><th>WS/48</th><th>BPM</th><th>USG%</th><th>VORP</th></tr></thead><tbody>{body}</tbody></table></body></html>"
        )
    }

    pub(crate) fn awards_page(table_id: &str, winner: &str) -> String {
        format!(
            "<html><body><table id=\"{table_id}\"><thead><tr><th>Rank</th><th>Player</th></tr></thead><tbody><tr><th>1</th><td data-stat=\"player\">{winner}</td></tr><tr><th>2</th><td data-stat=\"player\">Runner Up</td></tr></tbody></table></body></html>"
        )
    }

    impl PageSource for StaticPages {
        async fn fetch_page(&self, url: &str) -> Result<Html> {
            self.requests.borrow_mut().push(url.to_owned());
            self.pages
                .get(url)
                .map(|body| Html::parse_document(body))
                .ok_or_else(|| ScrapeError::UnexpectedStatus {
                    url: url.to_owned(),
                    status: reqwest::StatusCode::NOT_FOUND,
                })
        }
    }
}
