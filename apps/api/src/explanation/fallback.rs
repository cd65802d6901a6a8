use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::explanation::insights::{feature_insight, summarize};
use crate::explanation::service::{AttributionSource, ExplanationResult, Impact, TopFactor};

const FALLBACK_SEED: u64 = 42;

const FALLBACK_FEATURES: [&str; 5] = [
    "Programming Concepts",
    "Algorithms",
    "Coding Skills",
    "Communication Skills",
    "Software Engineering",
];

/// Synthetic explanation served when real attribution fails.
///
/// Seeded, so every fallback response is identical for a given role.
pub fn fallback_explanation(role: &str) -> ExplanationResult {
    let mut rng = StdRng::seed_from_u64(FALLBACK_SEED);

    let top_factors: Vec<TopFactor> = FALLBACK_FEATURES
        .iter()
        .map(|feature| {
            let value: f64 = rng.gen_range(0.1..0.3);
            let impact = if rng.gen_bool(0.5) {
                Impact::Positive
            } else {
                Impact::Negative
            };
            TopFactor {
                feature: feature.to_string(),
                impact,
                contribution: round3(value),
                insight: feature_insight(feature),
            }
        })
        .collect();

    ExplanationResult {
        career: role.to_string(),
        summary: summarize(&FALLBACK_FEATURES),
        top_factors,
        visualization: None,
        attribution_source: AttributionSource::Fallback,
        attributed_role: None,
    }
}

pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
