//! Blocking HTTP client for the trending listings

use std::time::Duration;

use log::debug;
use ureq::Agent;

use crate::error::TrendingError;
use crate::extract::{self, developers, repositories};
use crate::models::{TrendingDeveloper, TrendingPeriod, TrendingRepository};
use crate::GITHUB_ORIGIN;

const USER_AGENT: &str = concat!("github-trending/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const REPOSITORIES_PATH: &str = "/trending";
const DEVELOPERS_PATH: &str = "/trending/developers";

/// Client for the trending pages. One fetch plus one parse-and-extract
/// pass per call; no caching, no retries, no state shared between calls.
#[derive(Debug)]
pub struct TrendingClient {
    agent: Agent,
}

impl TrendingClient {
    /// Client with a default agent: crate user-agent, 30 s global timeout.
    pub fn new() -> Self {
        let config = Agent::config_builder()
            .user_agent(USER_AGENT)
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build();
        Self {
            agent: config.new_agent(),
        }
    }

    /// Client over a caller-configured agent (proxy, timeouts, TLS).
    pub fn with_agent(agent: Agent) -> Self {
        Self { agent }
    }

    /// Fetch the trending-repositories listing.
    ///
    /// `language` filters by repository language, `spoken_language` by the
    /// spoken-language code; both are skipped when `None` or empty. The
    /// period is only sent when it differs from the page default (daily).
    pub fn fetch_trending_repositories(
        &self,
        language: Option<&str>,
        period: TrendingPeriod,
        spoken_language: Option<&str>,
    ) -> Result<Vec<TrendingRepository>, TrendingError> {
        let url = build_trending_url(REPOSITORIES_PATH, language, period, spoken_language);
        let body = self.fetch(&url)?;
        let doc = extract::parse_document(&body)?;
        Ok(repositories::extract_repositories(&doc))
    }

    /// Fetch the trending-developers listing.
    pub fn fetch_trending_developers(
        &self,
        language: Option<&str>,
        period: TrendingPeriod,
    ) -> Result<Vec<TrendingDeveloper>, TrendingError> {
        let url = build_trending_url(DEVELOPERS_PATH, language, period, None);
        let body = self.fetch(&url)?;
        let doc = extract::parse_document(&body)?;
        Ok(developers::extract_developers(&doc))
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>, TrendingError> {
        debug!("fetching {url}");
        let resp = self.agent.get(url).call()?;
        if !resp.status().is_success() {
            return Err(TrendingError::Status(resp.status().as_u16()));
        }
        Ok(resp.into_body().read_to_vec()?)
    }
}

impl Default for TrendingClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble the listing URL. Query parameters are only emitted when they
/// carry a non-default value, matching what the page itself links to.
fn build_trending_url(
    path: &str,
    language: Option<&str>,
    period: TrendingPeriod,
    spoken_language: Option<&str>,
) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if let Some(lang) = language.filter(|l| !l.is_empty()) {
        query.append_pair("l", lang);
    }
    if period != TrendingPeriod::Daily {
        query.append_pair("since", period.as_query());
    }
    if let Some(spoken) = spoken_language.filter(|s| !s.is_empty()) {
        query.append_pair("spoken_language_code", spoken);
    }

    let query = query.finish();
    if query.is_empty() {
        format!("{GITHUB_ORIGIN}{path}")
    } else {
        format!("{GITHUB_ORIGIN}{path}?{query}")
    }
}
