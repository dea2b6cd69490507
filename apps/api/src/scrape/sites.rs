//! Per-board page URLs and HTML extraction.
//!
//! Boards A/B-test their markup constantly, so every extraction runs a
//! fallback chain of selectors and takes the first element that matches.

use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Card data as it comes off a board page. Empty strings mean the card did
/// not carry the field; validation and backfill happen in the runner.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawListing {
    pub company: String,
    pub role: String,
    pub location: String,
    pub stipend: String,
    pub apply_link: String,
}

/// One scrapeable job board.
///
/// `parse_page` is synchronous on purpose: `scraper::Html` is not `Send`,
/// so the parsed document must never live across an await point.
pub trait JobSite: Send + Sync {
    fn name(&self) -> &'static str;

    /// URL of the given 1-based results page.
    fn page_url(&self, keyword: &str, page: usize) -> String;

    fn max_pages(&self) -> usize;

    /// How many listings this board may contribute toward the target.
    fn source_cap(&self, target: usize) -> usize {
        target / 4
    }

    /// Extracts the raw listing from every card on the page.
    fn parse_page(&self, html: &str) -> Vec<RawListing>;
}

// ── Internshala ──────────────────────────────────────────────────────────

pub struct Internshala;

impl JobSite for Internshala {
    fn name(&self) -> &'static str {
        "Internshala"
    }

    fn page_url(&self, keyword: &str, page: usize) -> String {
        format!(
            "https://internshala.com/internships/keywords-{}/page-{}",
            urlencoding::encode(keyword),
            page
        )
    }

    fn max_pages(&self) -> usize {
        5
    }

    fn parse_page(&self, html: &str) -> Vec<RawListing> {
        let doc = Html::parse_document(html);
        let card_sel = sel("div.internship_meta");
        let mut listings = Vec::new();

        for card in doc.select(&card_sel) {
            let apply_link = first_href(
                card,
                &["a.view_detail_button", r#"a[href*="/internship/detail/"]"#],
            )
            .map(|href| absolute_link("https://internshala.com", &href))
            .unwrap_or_default();

            listings.push(RawListing {
                company: first_text(card, &["p.company-name", "a.link_display_like_text"]),
                role: first_text(card, &["h3.heading_4_5", "p.profile"]),
                location: first_text(card, &["p.location-names", r#"a[id*="location_names_"]"#]),
                stipend: first_text(card, &["span.stipend", "p.stipend"]),
                apply_link,
            });
        }

        listings
    }
}

// ── Naukri ───────────────────────────────────────────────────────────────

pub struct Naukri;

impl JobSite for Naukri {
    fn name(&self) -> &'static str {
        "Naukri"
    }

    fn page_url(&self, keyword: &str, page: usize) -> String {
        let kw = urlencoding::encode(keyword);
        format!("https://www.naukri.com/{kw}-jobs?k={kw}&l=&page={page}")
    }

    fn max_pages(&self) -> usize {
        5
    }

    fn parse_page(&self, html: &str) -> Vec<RawListing> {
        let doc = Html::parse_document(html);
        let mut listings = Vec::new();

        let cards = select_cards(
            &doc,
            &[
                "article.jobTuple",
                "div.jobTuple",
                "div.row",
                "div[data-job-id]",
            ],
        );

        for card in cards {
            let apply_link = first_href(
                card,
                &["a.title", "a.jobTitle", r#"a[href*="/job-listings-"]"#],
            )
            .map(|href| absolute_link("https://www.naukri.com", &href))
            .unwrap_or_default();

            listings.push(RawListing {
                company: first_text(
                    card,
                    &[
                        "a.subTitle",
                        "span.companyName",
                        "div.companyName",
                        "a.companyName",
                    ],
                ),
                role: first_text(card, &["a.title", "h3.title", "a.jobTitle", "div.title"]),
                location: first_text(
                    card,
                    &["span.locationsContainer", "div.location", "span.location"],
                ),
                stipend: first_text(card, &["span.salary", "div.salary", "span.salaryRange"]),
                apply_link,
            });
        }

        listings
    }
}

// ── LinkedIn ─────────────────────────────────────────────────────────────

pub struct Linkedin;

impl JobSite for Linkedin {
    fn name(&self) -> &'static str {
        "LinkedIn"
    }

    fn page_url(&self, keyword: &str, _page: usize) -> String {
        format!(
            "https://www.linkedin.com/jobs/search?keywords={}&location=India&geoId=102713980&f_TPR=r86400&position=1&pageNum=0",
            urlencoding::encode(keyword)
        )
    }

    fn max_pages(&self) -> usize {
        1
    }

    /// LinkedIn gets a flat cap instead of a share of the target.
    fn source_cap(&self, _target: usize) -> usize {
        15
    }

    fn parse_page(&self, html: &str) -> Vec<RawListing> {
        let doc = Html::parse_document(html);
        let mut listings = Vec::new();

        let cards = select_cards(
            &doc,
            &["div.base-card", "div.job-search-card", "li.result-card"],
        );

        for card in cards {
            let apply_link = first_href(
                card,
                &["a.base-card__full-link", "a.result-card__title-link"],
            )
            .map(|href| absolute_link("https://www.linkedin.com", &href))
            .unwrap_or_default();

            listings.push(RawListing {
                company: first_text(
                    card,
                    &[
                        "h4.base-search-card__subtitle",
                        "a.hidden-nested-link",
                        "span.job-search-card__subtitle-link",
                    ],
                ),
                role: first_text(
                    card,
                    &["h3.base-search-card__title", "a.result-card__title-link"],
                ),
                location: first_text(
                    card,
                    &[
                        "span.job-search-card__location",
                        "span.job-result-card__location",
                    ],
                ),
                // Search results never show pay; backfill supplies it.
                stipend: String::new(),
                apply_link,
            });
        }

        listings
    }
}

// ── Glassdoor ────────────────────────────────────────────────────────────

pub struct Glassdoor;

impl JobSite for Glassdoor {
    fn name(&self) -> &'static str {
        "Glassdoor"
    }

    fn page_url(&self, keyword: &str, page: usize) -> String {
        format!(
            "https://www.glassdoor.co.in/Job/jobs.htm?sc.keyword={}&locT=N&locId=115&p={}",
            urlencoding::encode(keyword),
            page
        )
    }

    fn max_pages(&self) -> usize {
        3
    }

    fn parse_page(&self, html: &str) -> Vec<RawListing> {
        let doc = Html::parse_document(html);
        let mut listings = Vec::new();

        let cards = select_cards(
            &doc,
            &[
                "li.react-job-listing",
                "div.jobContainer",
                "article.jobContainer",
            ],
        );

        for card in cards {
            let apply_link = first_href(card, &[r#"a[data-test="job-title"]"#, "a.jobTitle"])
                .map(|href| absolute_link("https://www.glassdoor.co.in", &href))
                .unwrap_or_default();

            listings.push(RawListing {
                company: first_text(card, &["span.employerName", "div.employerName"]),
                role: first_text(card, &[r#"a[data-test="job-title"]"#, "span.jobTitle"]),
                location: first_text(card, &["span.jobLocation", "div.jobLocation"]),
                stipend: first_text(card, &["span.salaryText", "div.salaryEstimate"]),
                apply_link,
            });
        }

        listings
    }
}

// ── Shared extraction helpers ────────────────────────────────────────────

/// Selectors here are compile-time constants, so a parse failure is a bug.
fn sel(selector: &str) -> Selector {
    Selector::parse(selector).expect("selector must be valid CSS")
}

/// Returns the card list for the first selector that matches anything.
fn select_cards<'a>(doc: &'a Html, selectors: &[&str]) -> Vec<ElementRef<'a>> {
    for s in selectors {
        let selector = sel(s);
        let cards: Vec<ElementRef<'a>> = doc.select(&selector).collect();
        if !cards.is_empty() {
            return cards;
        }
    }
    Vec::new()
}

/// First element under `card` matching any selector, in chain order.
fn first_el<'a>(card: ElementRef<'a>, selectors: &[&str]) -> Option<ElementRef<'a>> {
    for s in selectors {
        let selector = sel(s);
        if let Some(el) = card.select(&selector).next() {
            return Some(el);
        }
    }
    None
}

/// Text of the first matching element, cleaned; empty when nothing matches.
fn first_text(card: ElementRef, selectors: &[&str]) -> String {
    first_el(card, selectors).map(element_text).unwrap_or_default()
}

/// Href of the first matching element. The chain picks the element, not
/// the attribute: an anchor without an href still ends the search.
fn first_href(card: ElementRef, selectors: &[&str]) -> Option<String> {
    first_el(card, selectors)?
        .value()
        .attr("href")
        .map(str::to_string)
}

fn element_text(el: ElementRef) -> String {
    clean_text(&el.text().collect::<Vec<_>>().join(" "))
}

/// Collapses whitespace runs to single spaces and trims.
fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Joins a relative href against the board's base URL; absolute hrefs pass
/// through untouched.
fn absolute_link(base: &str, href: &str) -> String {
    if href.starts_with("http") {
        return href.to_string();
    }
    Url::parse(base)
        .and_then(|b| b.join(href))
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}
