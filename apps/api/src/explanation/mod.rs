// Explanations: which inputs pushed a prediction up or down, as ranked factors
// with insight text and an optional chart. Falls back to seeded synthetic values.

pub mod chart;
pub mod fallback;
pub mod handlers;
pub mod insights;
pub mod service;
pub mod shapley;
