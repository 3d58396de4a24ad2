use serde::{Deserialize, Serialize};

use crate::models::talent::{Availability, TalentPoolMember};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TalentListQuery {
    pub search: Option<String>,
    pub location: Option<String>,
    pub experience: Option<String>,
    pub skill: Option<String>,
    pub availability: Option<Availability>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalentListResponse {
    pub items: Vec<TalentPoolMember>,
    pub total: usize,
}
