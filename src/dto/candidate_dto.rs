use serde::{Deserialize, Serialize};

use crate::models::candidate::{Candidate, CandidateProfile, PipelineStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CandidateListQuery {
    pub search: Option<String>,
    pub status: Option<PipelineStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateListResponse {
    pub items: Vec<Candidate>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateDetailResponse {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub profile: Option<CandidateProfile>,
}
