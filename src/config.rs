use std::time::Duration;

use crate::model::{Award, TradedPlayerPolicy};

pub const DEFAULT_BASE_URL: &str = "https://www.basketball-reference.com";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Delay inserted before every request.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(3);

/// Settings shared by every fetch and season build of one run.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub base_url: String,
    pub user_agent: String,
    pub request_delay: Duration,
    /// When set, the winner of this award is flagged in every season.
    pub award: Option<Award>,
    pub traded_player_policy: TradedPlayerPolicy,
}

impl ScraperConfig {
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        base_url.trim_end_matches('/').clone_into(&mut self.base_url);
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        user_agent.clone_into(&mut self.user_agent);
        self
    }

    #[must_use]
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    #[must_use]
    pub fn with_award(mut self, award: Award) -> Self {
        self.award = Some(award);
        self
    }

    #[must_use]
    pub fn with_traded_player_policy(mut self, policy: TradedPlayerPolicy) -> Self {
        self.traded_player_policy = policy;
        self
    }

    /// Absolute URL for a site path such as `/leagues/NBA_2025_per_game.html`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            request_delay: DEFAULT_REQUEST_DELAY,
            award: None,
            traded_player_policy: TradedPlayerPolicy::default(),
        }
    }
}
