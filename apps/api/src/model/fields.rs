//! The canonical input schema: one row per field the classifier was fitted on.
//!
//! Every other view of the schema (the mapper, the startup artifact check, the
//! display labels used by explanations) is derived from `FIELDS`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Numeric,
    Categorical,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Name used by API clients (underscore style).
    pub external: &'static str,
    /// Column name in the training CSV, as stored in the artifact.
    pub internal: &'static str,
    pub kind: FieldKind,
    /// Short human-readable name shown in explanations.
    pub label: &'static str,
}

const fn num(external: &'static str, internal: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        external,
        internal,
        kind: FieldKind::Numeric,
        label,
    }
}

const fn cat(external: &'static str, internal: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        external,
        internal,
        kind: FieldKind::Categorical,
        label,
    }
}

// Internal names are the raw CSV headers, including their inconsistent casing,
// typos and the trailing space in "interested career area ".
pub const FIELDS: &[FieldSpec] = &[
    num(
        "Acedamic_percentage_in_Operating_Systems",
        "Acedamic percentage in Operating Systems",
        "Operating Systems",
    ),
    num("Percentage_in_Algorithms", "percentage in Algorithms", "Algorithms"),
    num(
        "Percentage_in_Programming_Concepts",
        "Percentage in Programming Concepts",
        "Programming Concepts",
    ),
    num(
        "Percentage_in_Software_Engineering",
        "Percentage in Software Engineering",
        "Software Engineering",
    ),
    num(
        "Percentage_in_Computer_Networks",
        "Percentage in Computer Networks",
        "Computer Networks",
    ),
    num(
        "Percentage_in_Electronics_Subjects",
        "Percentage in Electronics Subjects",
        "Electronics",
    ),
    num(
        "Percentage_in_Computer_Architecture",
        "Percentage in Computer Architecture",
        "Computer Architecture",
    ),
    num("Percentage_in_Mathematics", "Percentage in Mathematics", "Mathematics"),
    num(
        "Percentage_in_Communication_skills",
        "Percentage in Communication skills",
        "Communication Skills",
    ),
    num("Hours_working_per_day", "Hours working per day", "Working Hours"),
    num("Logical_quotient_rating", "Logical quotient rating", "Logical Quotient"),
    num("Hackathons", "hackathons", "Hackathons"),
    num("Coding_skills_rating", "coding skills rating", "Coding Skills"),
    num("Public_speaking_points", "public speaking points", "Public Speaking"),
    cat(
        "Can_work_long_time_before_system",
        "can work long time before system?",
        "Long Hours at a System",
    ),
    cat("Self_learning_capability", "self-learning capability?", "Self-Learning"),
    cat("Extra_courses_did", "Extra-courses did", "Extra Courses"),
    cat("Certifications", "certifications", "Certifications"),
    cat("Workshops", "workshops", "Workshops"),
    cat(
        "Reading_and_writing_skills",
        "reading and writing skills",
        "Reading and Writing",
    ),
    cat(
        "Memory_capability_score",
        "memory capability score",
        "Memory Capability",
    ),
    cat("Interested_subjects", "Interested subjects", "Interested Subjects"),
    cat(
        "Interested_career_area",
        "interested career area ",
        "Interested Career Area",
    ),
    cat("Job_Higher_Studies", "Job/Higher Studies?", "Job or Higher Studies"),
    cat(
        "Type_of_company_want_to_settle_in",
        "Type of company want to settle in?",
        "Preferred Company Type",
    ),
    cat(
        "Management_or_Technical",
        "Management or Technical",
        "Management or Technical",
    ),
    cat("Hard_smart_worker", "hard/smart worker", "Hard/Smart Worker"),
    cat("Worked_in_teams_ever", "worked in teams ever?", "Teamwork"),
];

pub fn by_external(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.external == name)
}

pub fn by_internal(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.internal == name)
}

/// Display label for an internal column; unknown columns are shown as-is.
pub fn label_for(internal: &str) -> &str {
    by_internal(internal).map(|f| f.label).unwrap_or(internal)
}
