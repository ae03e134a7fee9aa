use serde::{Deserialize, Serialize};

/// Persona and task for one run. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSpec {
    pub persona: String,
    pub job_to_be_done: String,
}

impl JobSpec {
    /// Relevance query: persona and job joined by a single space.
    pub fn query(&self) -> String {
        format!("{} {}", self.persona, self.job_to_be_done)
    }
}
