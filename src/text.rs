//! Text and numeric normalization for page content
//!
//! Star and fork counts on the page are cosmetic, locale-formatted text.
//! The parsers here never fail: anything unreadable becomes 0 so a noisy
//! count can't block extraction of the rest of the record.

/// Parse a comma-grouped count like "12,345". Returns 0 when the text is
/// not numeric after stripping the grouping commas.
pub(crate) fn parse_grouped_int(text: &str) -> u64 {
    text.trim().replace(',', "").parse().unwrap_or(0)
}

/// Parse the integer out of free text like "1,234 stars today": keep only
/// digits and `.`, then take the portion before any decimal point.
/// Returns 0 when no digits remain.
pub(crate) fn digits_only_int(text: &str) -> u64 {
    let filtered: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    filtered
        .split('.')
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

/// Prefix the site origin onto a relative href. Plain concatenation: the
/// page never emits hrefs that would need slash or `..` normalization.
pub(crate) fn absolutize(origin: &str, href: &str) -> String {
    format!("{origin}{href}")
}
