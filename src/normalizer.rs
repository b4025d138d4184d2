// src/normalizer.rs
//! Best-effort recovery of a JSON object from free-form model output.
//!
//! Models prepend prose and wrap objects in markdown fences despite being
//! told not to, so the candidate object is taken greedily from the first
//! `{` to the last `}`. If the text contains no brace pair the whole input
//! is handed to the parser. A response with several brace-delimited blocks
//! will mis-extract; that is an accepted limitation of the heuristic.

use crate::errors::NormalizationError;
use crate::types::JobPosting;

/// Parse the model's raw output into a [`JobPosting`].
///
/// Keys the model omitted deserialize to `None` and come back out as
/// `null`, so the record always carries the full schema.
pub fn normalize(raw: &str) -> Result<JobPosting, NormalizationError> {
    let candidate = match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if start < end => &raw[start..=end],
        _ => raw,
    };

    serde_json::from_str(candidate).map_err(|e| NormalizationError::InvalidJson(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_object_from_surrounding_prose() {
        let raw = "Sure! Here is the extracted data:\n```json\n{\"jobTitle\": \"Baker\", \"company\": \"Breadworks\"}\n```\nLet me know if you need more.";
        let record = normalize(raw).expect("object inside prose should parse");
        assert_eq!(record.job_title.as_deref(), Some("Baker"));
        assert_eq!(record.company.as_deref(), Some("Breadworks"));
        assert_eq!(record.location, None);
    }

    #[test]
    fn test_idempotent_on_valid_record_json() {
        let raw = r#"{"jobTitle":"Senior Backend Engineer","company":"Acme Corp","location":"Remote","salaryRange":{"min":120000,"max":150000,"currency":"USD"}}"#;
        let record = normalize(raw).expect("valid record should parse");

        assert_eq!(record.job_title.as_deref(), Some("Senior Backend Engineer"));
        assert_eq!(record.company.as_deref(), Some("Acme Corp"));
        assert_eq!(record.location.as_deref(), Some("Remote"));
        let salary = record.salary_range.as_ref().expect("salary range present");
        assert_eq!(salary.min, Some(120000.0));
        assert_eq!(salary.max, Some(150000.0));
        assert_eq!(salary.currency.as_deref(), Some("USD"));

        // Round-tripping the normalized record changes nothing
        let serialized = serde_json::to_string(&record).expect("serialize");
        let again = normalize(&serialized).expect("reparse");
        assert_eq!(record, again);

        // Every other schema field comes out as an explicit null
        let value = serde_json::to_value(&record).expect("serialize");
        for key in [
            "workType",
            "employmentType",
            "contractType",
            "experience",
            "skills",
            "qualifications",
            "driverLicense",
            "educationLevel",
            "benefits",
            "department",
            "industry",
            "description",
        ] {
            assert!(value[key].is_null(), "{} should be null", key);
        }
    }

    #[test]
    fn test_required_keys_default_to_null() {
        let record = normalize(r#"{"skills": ["Rust"]}"#).expect("parse");
        assert_eq!(record.job_title, None);
        assert_eq!(record.company, None);
        assert_eq!(record.location, None);

        let value = serde_json::to_value(&record).expect("serialize");
        assert!(value["jobTitle"].is_null());
        assert!(value["company"].is_null());
        assert!(value["location"].is_null());
    }

    #[test]
    fn test_rejects_non_json() {
        let err = normalize("not json at all").expect_err("should fail");
        assert!(err.to_string().starts_with("Invalid JSON response from AI"));
    }

    #[test]
    fn test_rejects_unbalanced_braces() {
        assert!(normalize("the model said { nothing useful").is_err());
    }
}
