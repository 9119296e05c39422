//! Repository-card extraction
//!
//! Walks the trending-repositories listing: one `article.Box-row` per
//! ranked repository, fields resolved independently so a card with a
//! missing description or an odd star count still produces a record.

use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::extract::{first_attr, first_text, select_first};
use crate::models::{TrendingContributor, TrendingRepository};
use crate::text::{absolutize, digits_only_int, parse_grouped_int};
use crate::GITHUB_ORIGIN;

/// The page shows at most five contributor avatars per card.
pub const MAX_CONTRIBUTORS: usize = 5;

const REPOSITORY_CARD: &str = r#"article[class="Box-row"]"#;
const REPOSITORY_LINK: &str = r#"h2[class="h3 lh-condensed"] > a"#;
const DESCRIPTION: &str = r#"p[class="col-9 color-fg-muted my-1 pr-4"]"#;
const LANGUAGE_SWATCH: &str = r#"span[class="d-inline-block ml-0 mr-3"] > span:nth-of-type(1)"#;
const LANGUAGE_NAME: &str = r#"span[class="d-inline-block ml-0 mr-3"] > span:nth-of-type(2)"#;
const STARS_LINK: &str = r#"div[class="f6 color-fg-muted mt-2"] > a:nth-of-type(1)"#;
const FORKS_LINK: &str = r#"div[class="f6 color-fg-muted mt-2"] > a:nth-of-type(2)"#;
const PERIOD_STARS: &str =
    r#"div[class="f6 color-fg-muted mt-2"] > span[class="d-inline-block float-sm-right"]"#;
const CONTRIBUTOR_REGION: &str =
    r#"div[class="f6 color-fg-muted mt-2"] > span[class="d-inline-block mr-3"]"#;
const CONTRIBUTOR_AVATAR: &str = r#"img[class="avatar mb-1 avatar-user"]"#;

/// Extract every repository card from a trending-repositories document,
/// in document order. Zero matching cards is a valid empty listing.
pub fn extract_repositories(doc: &Html) -> Vec<TrendingRepository> {
    let card_sel = match Selector::parse(REPOSITORY_CARD) {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    let repositories: Vec<TrendingRepository> = doc.select(&card_sel).map(extract_card).collect();
    debug!("extracted {} repository cards", repositories.len());
    repositories
}

fn extract_card(card: ElementRef<'_>) -> TrendingRepository {
    let mut repo = TrendingRepository {
        author: String::new(),
        name: String::new(),
        url: String::new(),
        description: None,
        language: None,
        language_color: None,
        stars: 0,
        forks: 0,
        current_period_stars: 0,
        contributors: Vec::new(),
    };

    if let Some(href) = first_attr(card, REPOSITORY_LINK, "href") {
        repo.url = absolutize(GITHUB_ORIGIN, &href);
        // "/author/name": a malformed href leaves both fields empty
        // rather than failing the card.
        let mut segments = href.split('/').filter(|s| !s.is_empty());
        if let (Some(author), Some(name)) = (segments.next(), segments.next()) {
            repo.author = author.to_string();
            repo.name = name.to_string();
        }
    }

    repo.description = first_text(card, DESCRIPTION);

    if let Some(style) = first_attr(card, LANGUAGE_SWATCH, "style") {
        // "background-color:#FA7343" -> "#FA7343"
        if let Some((_, color)) = style.split_once(':') {
            repo.language_color = Some(color.trim().to_string());
        }
    }
    repo.language = first_text(card, LANGUAGE_NAME);

    if let Some(stars) = first_text(card, STARS_LINK) {
        repo.stars = parse_grouped_int(&stars);
    }
    if let Some(forks) = first_text(card, FORKS_LINK) {
        repo.forks = parse_grouped_int(&forks);
    }
    if let Some(today) = first_text(card, PERIOD_STARS) {
        repo.current_period_stars = digits_only_int(&today);
    }

    repo.contributors = extract_contributors(card);
    repo
}

/// Scan the fixed contributor slots. A slot yields a record only when
/// both the anchor href and the avatar src resolve; partial slots are
/// skipped, not padded.
fn extract_contributors(card: ElementRef<'_>) -> Vec<TrendingContributor> {
    let mut contributors = Vec::new();

    for slot in 1..=MAX_CONTRIBUTORS {
        let anchor_sel =
            format!(r#"{CONTRIBUTOR_REGION} > a[class="d-inline-block"]:nth-of-type({slot})"#);
        let Some(anchor) = select_first(card, &anchor_sel) else {
            continue;
        };

        let href = anchor.value().attr("href").map(str::trim);
        let src = first_attr(anchor, CONTRIBUTOR_AVATAR, "src");
        if let (Some(href), Some(src)) = (href, src) {
            // href is "/login"; drop the leading separator.
            let mut chars = href.chars();
            let _ = chars.next();
            contributors.push(TrendingContributor {
                name: chars.as_str().to_string(),
                profile_url: src.trim().to_string(),
            });
        }
    }

    contributors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(cards: &str) -> Html {
        Html::parse_document(&format!("<html><body>{cards}</body></html>"))
    }

    fn full_card() -> &'static str {
        r##"
        <article class="Box-row">
          <h2 class="h3 lh-condensed">
            <a href="/octocat/Hello-World">octocat / Hello-World</a>
          </h2>
          <p class="col-9 color-fg-muted my-1 pr-4">
            My first repository on GitHub!
          </p>
          <div class="f6 color-fg-muted mt-2">
            <span class="d-inline-block ml-0 mr-3">
              <span style="background-color:#FA7343"></span>
              <span>Swift</span>
            </span>
            <a href="/octocat/Hello-World/stargazers">1,000</a>
            <a href="/octocat/Hello-World/forks">500</a>
            <span class="d-inline-block mr-3">
              <a class="d-inline-block" href="/alice"><img class="avatar mb-1 avatar-user" src="https://avatars.example.com/u/1"></a>
              <a class="d-inline-block" href="/bob"><img class="avatar mb-1 avatar-user" src="https://avatars.example.com/u/2"></a>
            </span>
            <span class="d-inline-block float-sm-right">50 stars today</span>
          </div>
        </article>
        "##
    }

    #[test]
    fn full_card_round_trip() {
        let repos = extract_repositories(&page(full_card()));
        assert_eq!(repos.len(), 1);

        let repo = &repos[0];
        assert_eq!(repo.author, "octocat");
        assert_eq!(repo.name, "Hello-World");
        assert_eq!(repo.url, "https://github.com/octocat/Hello-World");
        assert_eq!(
            repo.description.as_deref(),
            Some("My first repository on GitHub!")
        );
        assert_eq!(repo.language.as_deref(), Some("Swift"));
        assert_eq!(repo.language_color.as_deref(), Some("#FA7343"));
        assert_eq!(repo.stars, 1000);
        assert_eq!(repo.forks, 500);
        assert_eq!(repo.current_period_stars, 50);
        assert_eq!(repo.contributors.len(), 2);
        assert_eq!(repo.contributors[0].name, "alice");
        assert_eq!(
            repo.contributors[0].profile_url,
            "https://avatars.example.com/u/1"
        );
        assert_eq!(repo.contributors[1].name, "bob");
    }

    #[test]
    fn cards_keep_document_order() {
        let cards = r#"
        <article class="Box-row"><h2 class="h3 lh-condensed"><a href="/a/one"></a></h2></article>
        <article class="Box-row"><h2 class="h3 lh-condensed"><a href="/b/two"></a></h2></article>
        <article class="Box-row"><h2 class="h3 lh-condensed"><a href="/c/three"></a></h2></article>
        "#;
        let repos = extract_repositories(&page(cards));
        let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["one", "two", "three"]);
    }

    #[test]
    fn malformed_href_leaves_author_and_name_empty() {
        let cards = r##"
        <article class="Box-row">
          <h2 class="h3 lh-condensed"><a href="/onlyauthor"></a></h2>
          <div class="f6 color-fg-muted mt-2">
            <a href="#">42</a>
          </div>
        </article>
        "##;
        let repos = extract_repositories(&page(cards));
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].author, "");
        assert_eq!(repos[0].name, "");
        // The rest of the record is untouched by the bad link.
        assert_eq!(repos[0].url, "https://github.com/onlyauthor");
        assert_eq!(repos[0].stars, 42);
    }

    #[test]
    fn bare_card_degrades_to_defaults() {
        let repos = extract_repositories(&page(r#"<article class="Box-row"></article>"#));
        assert_eq!(repos.len(), 1);

        let repo = &repos[0];
        assert_eq!(repo.author, "");
        assert_eq!(repo.name, "");
        assert_eq!(repo.url, "");
        assert_eq!(repo.description, None);
        assert_eq!(repo.language, None);
        assert_eq!(repo.language_color, None);
        assert_eq!(repo.stars, 0);
        assert_eq!(repo.forks, 0);
        assert_eq!(repo.current_period_stars, 0);
        assert!(repo.contributors.is_empty());
    }

    #[test]
    fn swatch_without_colon_is_skipped() {
        let cards = r#"
        <article class="Box-row">
          <span class="d-inline-block ml-0 mr-3">
            <span style="nonsense"></span>
            <span>Rust</span>
          </span>
        </article>
        "#;
        let repos = extract_repositories(&page(cards));
        assert_eq!(repos[0].language_color, None);
        assert_eq!(repos[0].language.as_deref(), Some("Rust"));
    }

    #[test]
    fn partial_contributor_slots_are_skipped() {
        // Slots 1, 2 and 4 carry both href and avatar; slot 3 has no
        // avatar, slot 5 has no href.
        let cards = r#"
        <article class="Box-row">
          <div class="f6 color-fg-muted mt-2">
            <span class="d-inline-block mr-3">
              <a class="d-inline-block" href="/one"><img class="avatar mb-1 avatar-user" src="u1"></a>
              <a class="d-inline-block" href="/two"><img class="avatar mb-1 avatar-user" src="u2"></a>
              <a class="d-inline-block" href="/three"></a>
              <a class="d-inline-block" href="/four"><img class="avatar mb-1 avatar-user" src="u4"></a>
              <a class="d-inline-block"><img class="avatar mb-1 avatar-user" src="u5"></a>
            </span>
          </div>
        </article>
        "#;
        let repos = extract_repositories(&page(cards));
        let names: Vec<&str> = repos[0].contributors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["one", "two", "four"]);
    }

    #[test]
    fn empty_document_yields_empty_list() {
        assert!(extract_repositories(&page("")).is_empty());
    }

    #[test]
    fn developer_cards_are_not_repository_cards() {
        let repos = extract_repositories(&page(r#"<article class="Box-row d-flex"></article>"#));
        assert!(repos.is_empty());
    }

    #[test]
    fn extraction_is_idempotent() {
        let doc = page(full_card());
        assert_eq!(extract_repositories(&doc), extract_repositories(&doc));
    }
}
