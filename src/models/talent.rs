use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Passive,
}

/// A sourced candidate kept warm outside any live pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalentPoolMember {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub title: String,
    pub location: String,
    pub experience: String,
    pub skills: Vec<String>,
    pub tags: Vec<String>,
    pub last_active: NaiveDate,
    pub ai_score: i32,
    pub availability: Availability,
    pub previous_applications: Vec<String>,
}
