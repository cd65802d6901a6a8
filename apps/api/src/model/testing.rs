//! Test fixtures: a small artifact over the real 28-column schema.
//!
//! The classifier has one ReLU hidden unit per class. The "interested career
//! area" one-hot block drives the matching unit, with smaller contributions from
//! a few numeric columns, so predictions are easy to reason about in tests.

use std::sync::Arc;

use crate::model::artifact::{ClassifierParams, EncoderParams, PipelineArtifact, ScalerParams};
use crate::model::fields::{FieldKind, FIELDS};
use crate::model::mlp::{Activation, OutputActivation};
use crate::model::pipeline::CareerPipeline;
use crate::model::record::CareerInput;

pub const CLASSES: [&str; 6] = [
    "Applications Developer",
    "Business Analyst",
    "Cloud Engineer",
    "Network Security Engineer",
    "Software Developer",
    "Software Quality Assurance (QA) / Testing",
];

/// Career-area category and the class index it votes for.
const CAREER_AREAS: [(&str, usize); 6] = [
    ("Business process analyst", 1),
    ("cloud computing", 2),
    ("developer", 0),
    ("security", 3),
    ("system developer", 4),
    ("testing", 5),
];

fn categories_for(column: &str) -> Vec<String> {
    let cats: &[&str] = match column {
        "certifications" => &[
            "app development",
            "distro making",
            "full stack",
            "hadoop",
            "information security",
            "machine learning",
            "python",
            "r programming",
            "shell programming",
        ],
        "workshops" => &[
            "cloud computing",
            "data science",
            "database security",
            "game development",
            "hacking",
            "system designing",
            "testing",
            "web technologies",
        ],
        "reading and writing skills" | "memory capability score" => {
            &["excellent", "medium", "poor"]
        }
        "Interested subjects" => &[
            "Computer Architecture",
            "IOT",
            "Management",
            "Software Engineering",
            "cloud computing",
            "data engineering",
            "hacking",
            "networks",
            "parallel computing",
            "programming",
        ],
        "interested career area " => &[
            "Business process analyst",
            "cloud computing",
            "developer",
            "security",
            "system developer",
            "testing",
        ],
        "Job/Higher Studies?" => &["higherstudies", "job"],
        "Type of company want to settle in?" => &[
            "BPA",
            "Cloud Services",
            "Finance",
            "Product based",
            "SAaS services",
            "Sales and Marketing",
            "Service Based",
            "Testing and Maintainance Services",
            "Web Services",
            "product development",
        ],
        "Management or Technical" => &["Management", "Technical"],
        "hard/smart worker" => &["hard worker", "smart worker"],
        _ => &["no", "yes"],
    };
    cats.iter().map(|c| c.to_string()).collect()
}

fn scaler_for(column: &str) -> (f64, f64) {
    match column {
        "Hours working per day" => (7.5, 1.7),
        "hackathons" => (3.0, 2.0),
        "Logical quotient rating" | "coding skills rating" | "public speaking points" => {
            (5.0, 2.6)
        }
        _ => (77.0, 10.0),
    }
}

pub fn fixture_artifact() -> PipelineArtifact {
    let num_cols: Vec<String> = FIELDS
        .iter()
        .filter(|f| f.kind == FieldKind::Numeric)
        .map(|f| f.internal.to_string())
        .collect();
    let cat_cols: Vec<String> = FIELDS
        .iter()
        .filter(|f| f.kind == FieldKind::Categorical)
        .map(|f| f.internal.to_string())
        .collect();

    let (mean, scale): (Vec<f64>, Vec<f64>) = num_cols.iter().map(|c| scaler_for(c)).unzip();
    let categories: Vec<Vec<String>> = cat_cols.iter().map(|c| categories_for(c)).collect();

    let n_features = num_cols.len() + categories.iter().map(Vec::len).sum::<usize>();
    let n_classes = CLASSES.len();

    let mut hidden = vec![vec![0.0; n_classes]; n_features];
    let num_index = |name: &str| num_cols.iter().position(|c| c == name).unwrap();
    hidden[num_index("Percentage in Programming Concepts")][0] = 0.5;
    hidden[num_index("Percentage in Programming Concepts")][4] = 0.5;
    hidden[num_index("coding skills rating")][4] = 0.3;
    hidden[num_index("Percentage in Computer Networks")][3] = 0.3;

    let area_column = cat_cols
        .iter()
        .position(|c| c == "interested career area ")
        .unwrap();
    let area_offset = num_cols.len()
        + categories[..area_column]
            .iter()
            .map(Vec::len)
            .sum::<usize>();
    for (k, category) in categories[area_column].iter().enumerate() {
        let (_, class) = CAREER_AREAS
            .iter()
            .find(|(area, _)| *area == category.as_str())
            .unwrap();
        hidden[area_offset + k][*class] = 1.0;
    }

    let output: Vec<Vec<f64>> = (0..n_classes)
        .map(|i| (0..n_classes).map(|j| if i == j { 5.0 } else { 0.0 }).collect())
        .collect();

    PipelineArtifact {
        classes: CLASSES.iter().map(|c| c.to_string()).collect(),
        num_cols,
        cat_cols,
        scaler: ScalerParams { mean, scale },
        encoder: EncoderParams { categories },
        classifier: ClassifierParams {
            activation: Activation::Relu,
            out_activation: OutputActivation::Softmax,
            coefs: vec![hidden, output],
            intercepts: vec![vec![0.0; n_classes], vec![0.0; n_classes]],
        },
    }
}

pub fn fixture_pipeline() -> Arc<CareerPipeline> {
    Arc::new(CareerPipeline::from_artifact(&fixture_artifact()).unwrap())
}

/// A student whose answers match a "Software Developer" training row.
pub fn sample_input() -> CareerInput {
    CareerInput {
        Acedamic_percentage_in_Operating_Systems: 85.0,
        Percentage_in_Algorithms: 82.0,
        Percentage_in_Programming_Concepts: 88.0,
        Percentage_in_Software_Engineering: 79.0,
        Percentage_in_Computer_Networks: 80.0,
        Percentage_in_Electronics_Subjects: 70.0,
        Percentage_in_Computer_Architecture: 75.0,
        Percentage_in_Mathematics: 84.0,
        Percentage_in_Communication_skills: 72.0,
        Hours_working_per_day: 8.0,
        Logical_quotient_rating: 7.0,
        Hackathons: 2,
        Coding_skills_rating: 8.0,
        Public_speaking_points: 5.0,
        Can_work_long_time_before_system: "yes".to_string(),
        Self_learning_capability: "yes".to_string(),
        Extra_courses_did: "yes".to_string(),
        Certifications: "python".to_string(),
        Workshops: "web technologies".to_string(),
        Reading_and_writing_skills: "excellent".to_string(),
        Memory_capability_score: "medium".to_string(),
        Interested_subjects: "programming".to_string(),
        Interested_career_area: "system developer".to_string(),
        Job_Higher_Studies: "job".to_string(),
        Type_of_company_want_to_settle_in: "product development".to_string(),
        Management_or_Technical: "Technical".to_string(),
        Hard_smart_worker: "smart worker".to_string(),
        Worked_in_teams_ever: "yes".to_string(),
    }
}

pub fn input_with_career_area(area: &str) -> CareerInput {
    CareerInput {
        Interested_career_area: area.to_string(),
        ..sample_input()
    }
}
