use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::PipelineError;

/// A single input value: numbers for numeric columns, strings for categorical ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Number(f64),
    Category(String),
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        FeatureValue::Number(value)
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        FeatureValue::Category(value.to_string())
    }
}

/// Field name → value. Keys are external names before mapping, internal
/// column names after.
pub type FeatureRecord = BTreeMap<String, FeatureValue>;

/// Request body shared by the prediction and explanation endpoints.
///
/// Field names follow the external (underscore) convention; unknown fields are
/// rejected so a client built against an older schema fails loudly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(non_snake_case)]
pub struct CareerInput {
    pub Acedamic_percentage_in_Operating_Systems: f64,
    pub Percentage_in_Algorithms: f64,
    pub Percentage_in_Programming_Concepts: f64,
    pub Percentage_in_Software_Engineering: f64,
    pub Percentage_in_Computer_Networks: f64,
    pub Percentage_in_Electronics_Subjects: f64,
    pub Percentage_in_Computer_Architecture: f64,
    pub Percentage_in_Mathematics: f64,
    pub Percentage_in_Communication_skills: f64,
    pub Hours_working_per_day: f64,
    pub Logical_quotient_rating: f64,
    pub Hackathons: i64,
    pub Coding_skills_rating: f64,
    pub Public_speaking_points: f64,

    pub Can_work_long_time_before_system: String,
    pub Self_learning_capability: String,
    pub Extra_courses_did: String,
    pub Certifications: String,
    pub Workshops: String,
    pub Reading_and_writing_skills: String,
    pub Memory_capability_score: String,
    pub Interested_subjects: String,
    pub Interested_career_area: String,
    pub Job_Higher_Studies: String,
    pub Type_of_company_want_to_settle_in: String,
    pub Management_or_Technical: String,
    pub Hard_smart_worker: String,
    pub Worked_in_teams_ever: String,
}

impl CareerInput {
    /// Converts the typed body into a record keyed by external field names.
    pub fn into_record(self) -> Result<FeatureRecord, PipelineError> {
        let value = serde_json::to_value(self)
            .map_err(|e| PipelineError::InvalidInput(format!("unserializable input: {e}")))?;
        serde_json::from_value(value)
            .map_err(|e| PipelineError::InvalidInput(format!("unsupported input value: {e}")))
    }
}
