/// Roadmap prompt template. Replace every `{role}` before sending.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Generate a comprehensive career roadmap for the role: "{role}".

Provide a detailed response in the following JSON format:
{
  "skills": [list of 8-12 essential technical and soft skills],
  "certifications": [list of 5-8 relevant professional certifications],
  "projects": [list of 5-8 practical projects to build experience]
}

Make sure each item is specific, actionable, and relevant to the {role} role. Return ONLY the JSON object, no additional text."#;

pub fn build_roadmap_prompt(role: &str) -> String {
    ROADMAP_PROMPT_TEMPLATE.replace("{role}", role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_is_substituted_everywhere() {
        let prompt = build_roadmap_prompt("Data Scientist");
        assert!(!prompt.contains("{role}"));
        assert_eq!(prompt.matches("Data Scientist").count(), 2);
    }

    #[test]
    fn test_prompt_names_all_three_keys() {
        let prompt = build_roadmap_prompt("x");
        for key in ["\"skills\"", "\"certifications\"", "\"projects\""] {
            assert!(prompt.contains(key), "missing {key}");
        }
    }
}
