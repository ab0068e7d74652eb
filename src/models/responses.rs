use serde::{Deserialize, Serialize};
use crate::models::domain::ScoredMatch;

/// Ranked matches for one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub matches: Vec<ScoredMatch>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}
