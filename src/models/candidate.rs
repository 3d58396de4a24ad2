use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::assessment::AssessmentOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStatus {
    Applied,
    Screening,
    Interview,
    Hired,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: String,
    pub status: PipelineStatus,
    pub ai_score: i32,
    pub experience: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkHistoryEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub year: String,
}

/// Structured fields lifted from the candidate's resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedResume {
    pub experience: Vec<WorkHistoryEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EligibilityVerdict {
    Pass,
    Fail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityCheck {
    pub rule: String,
    pub verdict: EligibilityVerdict,
    pub evidence: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateAssessment {
    pub name: String,
    #[serde(flatten)]
    pub outcome: AssessmentOutcome,
}

/// Detail-view payload behind a candidate row: location, links, resume
/// extraction, screening-rule results and assessment history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub location: String,
    pub applied_date: NaiveDate,
    pub resume_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub resume: ParsedResume,
    pub eligibility: Vec<EligibilityCheck>,
    pub assessments: Vec<CandidateAssessment>,
}
