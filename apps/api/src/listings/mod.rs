//! Shared job-listing domain model and the CSV conventions the scrape,
//! cleanup, and email stages all agree on.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub mod cleaner;
pub mod csv_store;
pub mod prompts;

/// One job or internship listing as it appears in the exported CSV.
/// The serde renames define the canonical header row, so changing one
/// changes the file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    #[serde(rename = "Company", default)]
    pub company: String,
    #[serde(rename = "Role", default)]
    pub role: String,
    #[serde(rename = "Location", default)]
    pub location: String,
    #[serde(rename = "Stipend (₹/month)", default)]
    pub stipend: String,
    #[serde(rename = "Apply Link", default)]
    pub apply_link: String,
    #[serde(rename = "EmailID", default)]
    pub contact_email: String,
}

/// Removes duplicate listings keyed on lowercased (company, role).
/// The first occurrence wins. Returns the survivors and the removed count.
pub fn dedup_listings(listings: Vec<JobListing>) -> (Vec<JobListing>, usize) {
    let before = listings.len();
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(before);

    for listing in listings {
        let key = (listing.company.to_lowercase(), listing.role.to_lowercase());
        if seen.insert(key) {
            unique.push(listing);
        }
    }

    let removed = before - unique.len();
    (unique, removed)
}

#[cfg(test)]
pub(crate) fn make_listing(company: &str, role: &str) -> JobListing {
    JobListing {
        company: company.to_string(),
        role: role.to_string(),
        location: "Bangalore, Karnataka".to_string(),
        stipend: "₹20,000 - ₹25,000".to_string(),
        apply_link: "https://example.com/apply/1".to_string(),
        contact_email: "careers@example.com".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let mut first = make_listing("TechCorp", "Software Developer");
        first.location = "Pune, Maharashtra".to_string();
        let second = make_listing("TechCorp", "Software Developer");

        let (unique, removed) = dedup_listings(vec![first.clone(), second]);
        assert_eq!(unique.len(), 1);
        assert_eq!(removed, 1);
        assert_eq!(unique[0].location, "Pune, Maharashtra");
    }

    #[test]
    fn test_dedup_is_case_insensitive() {
        let a = make_listing("TechCorp", "Data Analyst");
        let b = make_listing("TECHCORP", "data analyst");
        let (unique, removed) = dedup_listings(vec![a, b]);
        assert_eq!(unique.len(), 1);
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_dedup_distinct_roles_survive() {
        let a = make_listing("TechCorp", "Data Analyst");
        let b = make_listing("TechCorp", "Backend Developer");
        let (unique, removed) = dedup_listings(vec![a, b]);
        assert_eq!(unique.len(), 2);
        assert_eq!(removed, 0);
    }
}
