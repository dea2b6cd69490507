//! Post-scrape cleanup pass over scraped listings.
//!
//! Drops rows whose company or apply link is unusable, asks the LLM to fill
//! the remaining gaps (role, location, stipend), and synthesizes a contact
//! email when the scrape produced none.

use rand::Rng;
use tracing::{info, warn};

use crate::llm_client::GroqClient;

use super::{prompts, JobListing};

const ENRICH_TEMPERATURE: f32 = 0.7;

/// Values that mark a field as absent. Apply links additionally treat a
/// bare `#` placeholder as absent.
const MISSING_VALUES: [&str; 5] = ["na", "n/a", "", "nan", "none"];

const EMAIL_PREFIXES: [&str; 5] = ["careers", "jobs", "hr", "info", "contact"];

/// Fields the enrichment pass may ask the LLM to fill.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Role,
    Location,
    Stipend,
}

impl Field {
    fn name(self) -> &'static str {
        match self {
            Field::Role => "Role",
            Field::Location => "Location",
            Field::Stipend => "Stipend",
        }
    }
}

#[derive(Debug)]
pub struct CleanReport {
    pub listings: Vec<JobListing>,
    pub dropped: usize,
    pub enriched: usize,
}

/// Runs the full cleanup pass. Enrichment failures are logged and the row
/// is kept as scraped; only structurally unusable rows are dropped.
pub async fn clean_listings(
    listings: Vec<JobListing>,
    keyword: &str,
    llm: &GroqClient,
) -> CleanReport {
    let total = listings.len();
    let mut kept = Vec::with_capacity(total);
    let mut enriched = 0;

    for mut listing in listings {
        if should_drop(&listing) {
            continue;
        }

        let missing = missing_fields(&listing);
        if !missing.is_empty() {
            let prompt = enrich_prompt(&listing, &missing, keyword);
            match llm
                .chat(prompts::ENRICH_SYSTEM, &prompt, ENRICH_TEMPERATURE)
                .await
            {
                Ok(reply) => {
                    apply_enrichment(&mut listing, &missing, &reply);
                    enriched += 1;
                }
                Err(e) => warn!("Could not fill missing data for {}: {e}", listing.company),
            }
        }

        if is_missing(&listing.contact_email) || listing.contact_email.contains('*') {
            if let Some(email) = synthesized_email(&listing.company) {
                listing.contact_email = email;
            }
        }

        kept.push(listing);
    }

    let dropped = total - kept.len();
    info!("Cleanup pass dropped {dropped} invalid listings, enriched {enriched}");

    CleanReport {
        listings: kept,
        dropped,
        enriched,
    }
}

fn is_missing(value: &str) -> bool {
    MISSING_VALUES.contains(&value.trim().to_lowercase().as_str())
}

fn is_missing_link(value: &str) -> bool {
    is_missing(value) || value.trim() == "#"
}

/// Rows are dropped when the company or apply link is absent, or when any
/// field carries an asterisk. Some boards censor fields with asterisks on
/// their free tiers, and those rows are useless downstream.
fn should_drop(listing: &JobListing) -> bool {
    let company = listing.company.trim();
    let apply_link = listing.apply_link.trim();

    if company.contains('*') || apply_link.contains('*') {
        return true;
    }
    if is_missing(company) || is_missing_link(apply_link) {
        return true;
    }

    listing.role.contains('*') || listing.location.contains('*') || listing.stipend.contains('*')
}

fn missing_fields(listing: &JobListing) -> Vec<Field> {
    let mut missing = Vec::new();
    if is_missing(&listing.role) {
        missing.push(Field::Role);
    }
    if is_missing(&listing.location) {
        missing.push(Field::Location);
    }
    if is_missing(&listing.stipend) {
        missing.push(Field::Stipend);
    }
    missing
}

fn enrich_prompt(listing: &JobListing, missing: &[Field], keyword: &str) -> String {
    let names: Vec<&str> = missing.iter().map(|f| f.name()).collect();
    let shown = |field: Field, value: &str| -> String {
        if missing.contains(&field) {
            "MISSING".to_string()
        } else {
            value.to_string()
        }
    };

    prompts::ENRICH_PROMPT_TEMPLATE
        .replace("{company}", &listing.company)
        .replace("{missing}", &names.join(", "))
        .replace("{role}", &shown(Field::Role, &listing.role))
        .replace("{location}", &shown(Field::Location, &listing.location))
        .replace("{stipend}", &shown(Field::Stipend, &listing.stipend))
        .replace("{keyword}", keyword)
}

/// Applies `Field: value` lines from the LLM reply, but only for the
/// fields that were actually requested.
fn apply_enrichment(listing: &mut JobListing, requested: &[Field], reply: &str) {
    for line in reply.lines() {
        let Some((field, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim().to_string();

        match field.trim() {
            "Role" if requested.contains(&Field::Role) => listing.role = value,
            "Location" if requested.contains(&Field::Location) => listing.location = value,
            "Stipend" if requested.contains(&Field::Stipend) => listing.stipend = value,
            _ => {}
        }
    }
}

/// Builds a plausible recruiting address from the company name, e.g.
/// `careers@techcorp.com`. Returns None when nothing alphanumeric is left.
fn synthesized_email(company: &str) -> Option<String> {
    let clean: String = company
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    if clean.is_empty() {
        return None;
    }

    let prefix = EMAIL_PREFIXES[rand::thread_rng().gen_range(0..EMAIL_PREFIXES.len())];
    Some(format!("{prefix}@{clean}.com"))
}

#[cfg(test)]
mod tests {
    use super::super::make_listing;
    use super::*;

    #[test]
    fn test_is_missing_matrix() {
        assert!(is_missing("N/A"));
        assert!(is_missing("  nan "));
        assert!(is_missing(""));
        assert!(is_missing("None"));
        assert!(!is_missing("TechCorp"));
    }

    #[test]
    fn test_should_drop_censored_company() {
        let mut listing = make_listing("Tech****", "Software Developer");
        assert!(should_drop(&listing));

        listing = make_listing("TechCorp", "Software Developer");
        listing.stipend = "₹**,***".to_string();
        assert!(should_drop(&listing));
    }

    #[test]
    fn test_should_drop_placeholder_apply_link() {
        let mut listing = make_listing("TechCorp", "Software Developer");
        listing.apply_link = "#".to_string();
        assert!(should_drop(&listing));

        listing.apply_link = "https://techcorp.com/apply".to_string();
        assert!(!should_drop(&listing));
    }

    #[test]
    fn test_missing_fields_detects_gaps() {
        let mut listing = make_listing("TechCorp", "Software Developer");
        listing.role = "n/a".to_string();
        listing.stipend = String::new();

        let missing = missing_fields(&listing);
        assert_eq!(missing, vec![Field::Role, Field::Stipend]);
    }

    #[test]
    fn test_enrich_prompt_marks_requested_fields() {
        let mut listing = make_listing("TechCorp", "Software Developer");
        listing.stipend = String::new();
        let prompt = enrich_prompt(&listing, &[Field::Stipend], "python developer");

        assert!(prompt.contains("missing fields: Stipend."));
        assert!(prompt.contains("- Stipend: MISSING"));
        assert!(prompt.contains("- Role: Software Developer"));
        assert!(prompt.contains("Job Search Keyword: python developer"));
    }

    #[test]
    fn test_apply_enrichment_only_fills_requested() {
        let mut listing = make_listing("TechCorp", "Software Developer");
        listing.location = "n/a".to_string();

        let reply = "Role: Principal Architect\nLocation: Pune, Maharashtra\nStipend: ₹90,000";
        apply_enrichment(&mut listing, &[Field::Location], reply);

        assert_eq!(listing.location, "Pune, Maharashtra");
        // Unrequested fields keep their scraped values.
        assert_eq!(listing.role, "Software Developer");
        assert_eq!(listing.stipend, "₹20,000 - ₹25,000");
    }

    #[test]
    fn test_synthesized_email_uses_company_domain() {
        let email = synthesized_email("Tech Corp Pvt. Ltd.").unwrap();
        assert!(email.ends_with("@techcorppvtltd.com"));
        let prefix = email.split('@').next().unwrap();
        assert!(EMAIL_PREFIXES.contains(&prefix));
    }

    #[test]
    fn test_synthesized_email_empty_company() {
        assert!(synthesized_email("***").is_none());
    }
}
