//! Developer-card extraction
//!
//! Same tolerant shape as the repository pipeline: one card per trending
//! developer, every field resolved independently with an empty-string or
//! absent fallback.

use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::extract::{first_attr, first_text};
use crate::models::{TrendingDeveloper, TrendingDeveloperRepo};
use crate::text::absolutize;
use crate::GITHUB_ORIGIN;

const DEVELOPER_CARD: &str = r#"article[class="Box-row d-flex"]"#;
/// Left column of the card: display name, handle and profile link.
const INFO_COLUMN: &str = r#"div[class="d-sm-flex flex-auto"] > div[class="col-sm-8 d-md-flex"] > div[class="col-md-6"]:nth-of-type(1)"#;
const AVATAR: &str = r#"div[class="mx-3"] > a > img[class="rounded avatar-user"]"#;
const REPO_NAME: &str = r#"h1[class="h4 lh-condensed"]"#;
const REPO_LINK: &str = r#"h1[class="h4 lh-condensed"] > a"#;
const REPO_DESCRIPTION: &str = r#"div[class="f6 color-text-secondary mt-1"]"#;

/// Extract every developer card from a trending-developers document, in
/// document order. Zero matching cards is a valid empty listing.
pub fn extract_developers(doc: &Html) -> Vec<TrendingDeveloper> {
    let card_sel = match Selector::parse(DEVELOPER_CARD) {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    let developers: Vec<TrendingDeveloper> = doc.select(&card_sel).map(extract_card).collect();
    debug!("extracted {} developer cards", developers.len());
    developers
}

fn extract_card(card: ElementRef<'_>) -> TrendingDeveloper {
    let name = first_text(card, &format!("{INFO_COLUMN} > h1"));
    let user_name = first_text(card, &format!("{INFO_COLUMN} > p")).unwrap_or_default();
    let url = first_attr(card, &format!("{INFO_COLUMN} > h1 > a"), "href")
        .map(|href| absolutize(GITHUB_ORIGIN, href.trim()))
        .unwrap_or_default();
    let profile_url = first_attr(card, AVATAR, "src")
        .map(|src| src.trim().to_string())
        .unwrap_or_default();

    // The featured repository is always attached, even when every one of
    // its fields came up empty.
    let repo = TrendingDeveloperRepo {
        name: first_text(card, REPO_NAME),
        url: first_attr(card, REPO_LINK, "href")
            .map(|href| absolutize(GITHUB_ORIGIN, href.trim()))
            .unwrap_or_default(),
        description: first_text(card, REPO_DESCRIPTION).unwrap_or_default(),
    };

    TrendingDeveloper {
        user_name,
        name,
        url,
        profile_url,
        repo: Some(repo),
    }
}
