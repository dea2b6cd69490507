//! CSV persistence for job listings.
//!
//! The raw scrape is written to `jobs_internships_{timestamp}.csv` and the
//! cleanup pass writes `cleaned_{original name}` next to it. These files are
//! the only durable output the service produces.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use super::JobListing;

/// Writes listings to a timestamped CSV under `dir` and returns its path.
pub fn save_scraped(dir: &Path, listings: &[JobListing]) -> Result<PathBuf> {
    let filename = format!(
        "jobs_internships_{}.csv",
        Local::now().format("%Y%m%d_%H%M%S")
    );
    let path = dir.join(filename);
    write_csv(&path, listings)?;
    Ok(path)
}

/// Writes the cleaned listings next to the raw file as `cleaned_{name}`.
pub fn save_cleaned(raw_path: &Path, listings: &[JobListing]) -> Result<PathBuf> {
    let name = raw_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("listings.csv");
    let path = raw_path.with_file_name(format!("cleaned_{name}"));
    write_csv(&path, listings)?;
    Ok(path)
}

/// Reads a listings CSV back into memory. Missing columns deserialize as
/// empty strings, so hand-edited files still load.
pub fn load(path: &Path) -> Result<Vec<JobListing>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV {}", path.display()))?;

    let mut listings = Vec::new();
    for record in reader.deserialize() {
        let listing: JobListing =
            record.with_context(|| format!("Malformed row in {}", path.display()))?;
        listings.push(listing);
    }
    Ok(listings)
}

/// Renders listings as CSV text, used for the email attachment.
pub fn render_string(listings: &[JobListing]) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        for listing in listings {
            writer.serialize(listing)?;
        }
        writer.flush()?;
    }
    String::from_utf8(buf).context("CSV output was not valid UTF-8")
}

fn write_csv(path: &Path, listings: &[JobListing]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV {}", path.display()))?;
    for listing in listings {
        writer
            .serialize(listing)
            .with_context(|| format!("Failed to write row for {}", listing.company))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::make_listing;
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let listings = vec![
            make_listing("TechCorp", "Software Developer"),
            make_listing("DataWorks", "Data Analyst"),
        ];

        let path = save_scraped(dir.path(), &listings).unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("jobs_internships_"));
        assert!(name.ends_with(".csv"));

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, listings);
    }

    #[test]
    fn test_header_row_matches_export_format() {
        let listings = vec![make_listing("TechCorp", "Software Developer")];
        let rendered = render_string(&listings).unwrap();
        let header = rendered.lines().next().unwrap();
        assert_eq!(
            header,
            "Company,Role,Location,Stipend (₹/month),Apply Link,EmailID"
        );
    }

    #[test]
    fn test_save_cleaned_prefixes_filename() {
        let dir = tempfile::tempdir().unwrap();
        let raw = dir.path().join("jobs_internships_20250101_120000.csv");
        write_csv(&raw, &[make_listing("TechCorp", "Software Developer")]).unwrap();

        let cleaned = save_cleaned(&raw, &[make_listing("TechCorp", "Software Developer")]).unwrap();
        assert_eq!(
            cleaned.file_name().unwrap().to_str().unwrap(),
            "cleaned_jobs_internships_20250101_120000.csv"
        );
        assert_eq!(load(&cleaned).unwrap().len(), 1);
    }

    #[test]
    fn test_load_tolerates_missing_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.csv");
        std::fs::write(&path, "Company,Role\nTechCorp,Software Developer\n").unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].company, "TechCorp");
        assert_eq!(loaded[0].location, "");
        assert_eq!(loaded[0].contact_email, "");
    }
}
