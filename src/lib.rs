//! Client for GitHub's public trending pages
//!
//! Fetches the trending listings and extracts typed records from the
//! page markup:
//! - trending repositories (with up to five featured contributors)
//! - trending developers (with their featured repository)
//!
//! The page is uncontrolled markup, so every per-card field is extracted
//! on a best-effort basis: a missing description, language swatch or star
//! count degrades to its default instead of dropping the card. Only a
//! transport failure or an unparsable response surfaces as an error.

pub mod client;
pub mod error;
pub mod extract;
pub mod models;
mod text;

pub use client::TrendingClient;
pub use error::TrendingError;
pub use models::{
    TrendingContributor, TrendingDeveloper, TrendingDeveloperRepo, TrendingPeriod,
    TrendingRepository,
};

/// Scheme+host prefix used to absolutize every relative href on the page.
pub const GITHUB_ORIGIN: &str = "https://github.com";
