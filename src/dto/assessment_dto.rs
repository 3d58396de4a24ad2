use serde::{Deserialize, Serialize};

use crate::models::assessment::{Assessment, AssessmentKind, AssessmentResult};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AssessmentListQuery {
    pub search: Option<String>,
    pub kind: Option<AssessmentKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentListResponse {
    pub items: Vec<Assessment>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResultsResponse {
    pub items: Vec<AssessmentResult>,
}
