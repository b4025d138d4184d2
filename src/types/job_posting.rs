// src/types/job_posting.rs
//! The structured job-posting record extracted from an AI response.
//!
//! Every field is optional. Serialization always emits every declared key,
//! null when absent, so consumers never need existence checks. Keys the
//! model invented beyond the schema are carried through untouched.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// remote / hybrid / onsite
    #[serde(default)]
    pub work_type: Option<String>,
    /// full-time / part-time / contract
    #[serde(default)]
    pub employment_type: Option<String>,
    /// Free-form contract wording, e.g. "A durée indéterminée"
    #[serde(default)]
    pub contract_type: Option<String>,
    #[serde(default)]
    pub salary_range: Option<SalaryRange>,
    #[serde(default)]
    pub experience: Option<ExperienceRequirement>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub qualifications: Option<Vec<String>>,
    #[serde(default)]
    pub driver_license: Option<String>,
    #[serde(default)]
    pub education_level: Option<String>,
    #[serde(default)]
    pub benefits: Option<Vec<String>>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Anything the model emitted outside the fixed schema
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalaryRange {
    #[serde(default, deserialize_with = "lenient_number")]
    pub min: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub max: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRequirement {
    #[serde(default, deserialize_with = "lenient_number")]
    pub years_required: Option<f64>,
    /// entry / mid / senior / executive
    #[serde(default)]
    pub level: Option<String>,
}

/// Models are told "number or null" but routinely quote the number anyway,
/// so accept a JSON number, a numeric string, or null.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().replace(',', "").parse().ok(),
        _ => None,
    })
}
