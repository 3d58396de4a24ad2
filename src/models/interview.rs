use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterviewKind {
    Video,
    Phone,
    InPerson,
}

impl InterviewKind {
    /// Default location label per modality, as shown on the interview list.
    pub fn default_location(&self) -> &'static str {
        match self {
            InterviewKind::Video => "Zoom Meeting",
            InterviewKind::Phone => "Phone Call",
            InterviewKind::InPerson => "Conference Room A",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
    Rescheduled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interview {
    pub id: Uuid,
    pub candidate_name: String,
    pub position: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration_minutes: i32,
    pub kind: InterviewKind,
    pub status: InterviewStatus,
    pub interviewers: Vec<String>,
    pub location: String,
    pub notes: Option<String>,
}

impl Interview {
    /// A booking occupies its interviewers unless it was cancelled.
    pub fn occupies(&self, interviewer: &str, date: NaiveDate, time: &str) -> bool {
        self.status != InterviewStatus::Cancelled
            && self.date == date
            && self.time == time
            && self.interviewers.iter().any(|name| name == interviewer)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interviewer {
    pub id: Uuid,
    pub name: String,
    pub title: String,
}

/// Partially filled scheduling form. The summary panel derives from it;
/// nothing here is persisted until the form passes submission checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleForm {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub kind: Option<InterviewKind>,
    pub duration_minutes: Option<i32>,
    pub interviewer_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub date: NaiveDate,
    pub time: String,
    pub duration_minutes: i32,
    pub kind: InterviewKind,
    pub interviewers: Vec<String>,
}

/// The summary renders exactly when date, time and type are chosen and at
/// least one interviewer is selected. Unknown interviewer ids are skipped
/// rather than failing the preview; submission validates them strictly.
pub fn preview(form: &ScheduleForm, roster: &[Interviewer]) -> Option<ScheduleSummary> {
    let date = form.date?;
    let time = form.time.clone()?;
    let kind = form.kind?;
    if form.interviewer_ids.is_empty() {
        return None;
    }
    let interviewers: Vec<String> = form
        .interviewer_ids
        .iter()
        .filter_map(|id| roster.iter().find(|i| i.id == *id))
        .map(|i| i.name.clone())
        .collect();
    if interviewers.is_empty() {
        return None;
    }
    Some(ScheduleSummary {
        date,
        time,
        duration_minutes: form.duration_minutes.unwrap_or(60),
        kind,
        interviewers,
    })
}
