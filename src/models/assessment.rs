use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentKind {
    Technical,
    Aptitude,
    Portfolio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentStatus {
    Active,
    Draft,
    Archived,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub id: Uuid,
    pub name: String,
    pub kind: AssessmentKind,
    pub duration_minutes: i32,
    pub questions: i32,
    pub candidates: i32,
    pub avg_score: i32,
    pub status: AssessmentStatus,
    pub created_date: NaiveDate,
}

/// A result either carries a score or it doesn't exist yet. Making the
/// two shapes explicit variants keeps "pending" rows from leaking null
/// scores into consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum AssessmentOutcome {
    InProgress,
    Completed {
        score: i32,
        completed_date: NaiveDate,
        #[serde(skip_serializing_if = "Option::is_none")]
        time_spent: Option<String>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub id: Uuid,
    pub candidate_name: String,
    pub assessment_name: String,
    #[serde(flatten)]
    pub outcome: AssessmentOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_outcome_serializes_with_score() {
        let outcome = AssessmentOutcome::Completed {
            score: 92,
            completed_date: NaiveDate::from_ymd_opt(2026, 1, 18).expect("valid date"),
            time_spent: None,
        };
        let json = serde_json::to_value(&outcome).expect("serialize");
        assert_eq!(json["status"], "completed");
        assert_eq!(json["score"], 92);
    }

    #[test]
    fn in_progress_outcome_has_no_score_field() {
        let json = serde_json::to_value(AssessmentOutcome::InProgress).expect("serialize");
        assert_eq!(json["status"], "in-progress");
        assert!(json.get("score").is_none());
    }
}
