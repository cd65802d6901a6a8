// Career roadmaps: skills, certifications and projects for a role, generated by
// the external LLM. All LLM calls go through llm_client.

pub mod handlers;
pub mod prompts;
pub mod provider;
