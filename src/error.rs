//! Error taxonomy for trending-page fetching and extraction

use thiserror::Error;

/// Errors surfaced by the trending client.
///
/// Per-field problems inside a card are never errors; they degrade to the
/// field's default value. Only transport failures and an unparsable
/// response body reach the caller.
#[derive(Error, Debug)]
pub enum TrendingError {
    /// The HTTP request could not be completed.
    #[error("request failed: {0}")]
    Transport(#[from] ureq::Error),

    /// The server answered with a non-success status code.
    #[error("server responded with status {0}")]
    Status(u16),

    /// The response body could not be decoded and parsed as an HTML document.
    #[error("failed to parse trending page")]
    ParsingFailed,
}
