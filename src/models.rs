//! Record types produced by the trending-page extractors
//!
//! All of these are plain immutable values: they are assembled once per
//! card during an extraction pass and keep no reference back to the
//! document they came from.

use serde::{Deserialize, Serialize};

/// One entry in the trending-repositories listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingRepository {
    /// Owner login, empty when the card's repository link is malformed.
    pub author: String,
    /// Repository name, empty when the card's repository link is malformed.
    pub name: String,
    /// Absolute repository URL, empty when the card has no repository link.
    pub url: String,
    pub description: Option<String>,
    /// Primary language name as shown on the card.
    pub language: Option<String>,
    /// Color token from the language swatch, e.g. `#FA7343`.
    pub language_color: Option<String>,
    pub stars: u64,
    pub forks: u64,
    /// Stars gained over the listing's period ("123 stars today").
    pub current_period_stars: u64,
    /// Featured contributors, at most [`MAX_CONTRIBUTORS`](crate::extract::repositories::MAX_CONTRIBUTORS).
    pub contributors: Vec<TrendingContributor>,
}

/// A contributor avatar shown on a repository card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingContributor {
    pub name: String,
    /// Avatar image URL.
    pub profile_url: String,
}

/// One entry in the trending-developers listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingDeveloper {
    /// Login handle, empty when missing from the card.
    pub user_name: String,
    /// Display name, absent when the developer has none on the card.
    pub name: Option<String>,
    /// Absolute profile URL, empty when missing from the card.
    pub url: String,
    /// Avatar image URL, empty when missing from the card.
    pub profile_url: String,
    /// The developer's featured repository. Always filled by extraction,
    /// though its individual fields may be empty.
    pub repo: Option<TrendingDeveloperRepo>,
}

/// The featured repository shown on a developer card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingDeveloperRepo {
    pub name: Option<String>,
    pub url: String,
    pub description: String,
}

/// Time window of a trending listing, the page's `since` filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendingPeriod {
    /// The page's own default; omitted from the query string.
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl TrendingPeriod {
    /// Lowercase token used as the `since` query value.
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}
