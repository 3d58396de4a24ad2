use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::interview::{
    Interview, InterviewKind, InterviewStatus, Interviewer, ScheduleForm, ScheduleSummary,
};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InterviewListQuery {
    pub search: Option<String>,
    pub status: Option<InterviewStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewListResponse {
    pub items: Vec<Interview>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewStatsResponse {
    pub scheduled: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterResponse {
    pub interviewers: Vec<Interviewer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlotsResponse {
    pub slots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SchedulePayload {
    #[validate(length(min = 1))]
    pub candidate_name: String,
    #[validate(length(min = 1))]
    pub position: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration_minutes: Option<i32>,
    pub kind: InterviewKind,
    pub interviewer_ids: Vec<Uuid>,
    pub notes: Option<String>,
}

/// Mirrors the scheduling screen's partially-filled state; used to derive
/// the summary panel without touching stored interviews.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PreviewPayload {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub kind: Option<InterviewKind>,
    pub duration_minutes: Option<i32>,
    pub interviewer_ids: Vec<Uuid>,
}

impl From<PreviewPayload> for ScheduleForm {
    fn from(payload: PreviewPayload) -> Self {
        Self {
            date: payload.date,
            time: payload.time,
            kind: payload.kind,
            duration_minutes: payload.duration_minutes,
            interviewer_ids: payload.interviewer_ids,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub summary: Option<ScheduleSummary>,
}
