// Static, human-readable explanation text keyed by feature display label.

const FEATURE_INSIGHTS: &[(&str, &str)] = &[
    (
        "Programming Concepts",
        "Strong programming fundamentals increase your suitability for this role.",
    ),
    (
        "Algorithms",
        "Algorithmic thinking is crucial for efficient problem solving in software roles.",
    ),
    (
        "Coding Skills",
        "Excellent coding skills help you build robust and efficient software.",
    ),
    (
        "Communication Skills",
        "Good communication is essential for teamwork and project success.",
    ),
    (
        "Software Engineering",
        "Knowledge of software engineering principles is vital for scalable development.",
    ),
    (
        "Operating Systems",
        "Understanding operating systems helps you reason about performance and reliability.",
    ),
    (
        "Computer Networks",
        "Networking knowledge underpins distributed, cloud and security work.",
    ),
    (
        "Mathematics",
        "A solid mathematical foundation supports analytical and data-driven work.",
    ),
    (
        "Logical Quotient",
        "Strong logical reasoning helps you break down complex problems.",
    ),
    (
        "Hackathons",
        "Hackathon experience shows you can deliver working solutions under pressure.",
    ),
    (
        "Interested Career Area",
        "Your stated career interest aligns closely with the day-to-day work of this role.",
    ),
    (
        "Certifications",
        "Your certifications demonstrate verified, role-relevant skills.",
    ),
    (
        "Interested Subjects",
        "The subjects you enjoy map well onto the knowledge this role draws on.",
    ),
    (
        "Management or Technical",
        "Your preference between management and technical tracks shapes which roles fit best.",
    ),
    (
        "Teamwork",
        "Experience working in teams prepares you for collaborative engineering environments.",
    ),
];

/// Insight sentence for a feature, or a generic one for unlisted features.
pub fn feature_insight(feature: &str) -> String {
    FEATURE_INSIGHTS
        .iter()
        .find(|(name, _)| *name == feature)
        .map(|(_, text)| text.to_string())
        .unwrap_or_else(|| format!("Your strength in {feature} is valuable for this role."))
}

/// One-sentence summary naming the first three features.
pub fn summarize(features: &[&str]) -> String {
    let main: Vec<&str> = features.iter().take(3).copied().collect();
    format!(
        "Your strengths in {} make you well-suited for this role.",
        main.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_feature_has_specific_insight() {
        assert_eq!(
            feature_insight("Algorithms"),
            "Algorithmic thinking is crucial for efficient problem solving in software roles."
        );
    }

    #[test]
    fn test_unknown_feature_gets_template() {
        assert_eq!(
            feature_insight("Workshops"),
            "Your strength in Workshops is valuable for this role."
        );
    }

    #[test]
    fn test_summary_names_top_three_only() {
        let summary = summarize(&["Algorithms", "Mathematics", "Hackathons", "Teamwork"]);
        assert_eq!(
            summary,
            "Your strengths in Algorithms, Mathematics, Hackathons make you well-suited for this role."
        );
    }
}
