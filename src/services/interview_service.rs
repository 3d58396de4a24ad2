use chrono::NaiveDate;
use uuid::Uuid;

use crate::dto::interview_dto::{
    InterviewListQuery, InterviewStatsResponse, PreviewPayload, SchedulePayload,
};
use crate::error::{Error, Result};
use crate::models::interview::{
    self, Interview, InterviewStatus, Interviewer, ScheduleSummary,
};
use crate::store::Store;
use crate::utils::time;

const DEFAULT_DURATION_MINUTES: i32 = 60;

#[derive(Clone)]
pub struct InterviewService {
    store: Store,
}

impl InterviewService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn list(&self, query: InterviewListQuery) -> Vec<Interview> {
        filter_interviews(
            self.store.interviews(),
            query.search.as_deref().unwrap_or(""),
            query.status,
        )
    }

    pub fn stats(&self) -> InterviewStatsResponse {
        let interviews = self.store.interviews();
        let count = |status: InterviewStatus| {
            interviews
                .iter()
                .filter(|interview| interview.status == status)
                .count()
        };
        InterviewStatsResponse {
            scheduled: count(InterviewStatus::Scheduled),
            completed: count(InterviewStatus::Completed),
            cancelled: count(InterviewStatus::Cancelled),
            total: interviews.len(),
        }
    }

    pub fn roster(&self) -> Vec<Interviewer> {
        self.store.interviewers().to_vec()
    }

    pub fn time_slots(&self) -> Vec<String> {
        self.store.time_slots().to_vec()
    }

    /// Derived summary for a partially filled form; never persists.
    pub fn preview(&self, payload: PreviewPayload) -> Option<ScheduleSummary> {
        interview::preview(&payload.into(), self.store.interviewers())
    }

    /// Validates the composite form and books the interview. Every check
    /// mirrors a rule the scheduling screen enforces, plus the overlap
    /// rejection a booking service is expected to perform.
    pub fn schedule(&self, payload: SchedulePayload) -> Result<Interview> {
        self.schedule_on(payload, time::today())
    }

    fn schedule_on(&self, payload: SchedulePayload, today: NaiveDate) -> Result<Interview> {
        if payload.date < today {
            return Err(Error::BadRequest(
                "Interview date must be today or later".to_string(),
            ));
        }
        if !self.store.time_slots().contains(&payload.time) {
            return Err(Error::BadRequest(format!(
                "Time {} is not an offered slot",
                payload.time
            )));
        }
        if payload.interviewer_ids.is_empty() {
            return Err(Error::BadRequest(
                "At least one interviewer is required".to_string(),
            ));
        }

        let roster = self.store.interviewers();
        let mut interviewers = Vec::with_capacity(payload.interviewer_ids.len());
        for id in &payload.interviewer_ids {
            let interviewer = roster
                .iter()
                .find(|candidate| candidate.id == *id)
                .ok_or_else(|| Error::BadRequest(format!("Unknown interviewer: {}", id)))?;
            if !interviewers.contains(&interviewer.name) {
                interviewers.push(interviewer.name.clone());
            }
        }

        let booked = self.store.interviews();
        for name in &interviewers {
            if booked
                .iter()
                .any(|existing| existing.occupies(name, payload.date, &payload.time))
            {
                return Err(Error::Conflict(format!(
                    "{} is already booked at {} on {}",
                    name, payload.time, payload.date
                )));
            }
        }

        let kind = payload.kind;
        let interview = Interview {
            id: Uuid::new_v4(),
            candidate_name: payload.candidate_name,
            position: payload.position,
            date: payload.date,
            time: payload.time,
            duration_minutes: payload.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES),
            kind,
            status: InterviewStatus::Scheduled,
            interviewers,
            location: kind.default_location().to_string(),
            notes: payload.notes,
        };
        self.store.add_interview(interview.clone());
        tracing::info!(
            interview_id = %interview.id,
            candidate = %interview.candidate_name,
            "interview scheduled"
        );
        Ok(interview)
    }
}

/// Search spans candidate name and position; the status filter is exact.
fn filter_interviews(
    interviews: Vec<Interview>,
    search: &str,
    status: Option<InterviewStatus>,
) -> Vec<Interview> {
    let needle = search.to_lowercase();
    interviews
        .into_iter()
        .filter(|interview| {
            needle.is_empty()
                || interview.candidate_name.to_lowercase().contains(&needle)
                || interview.position.to_lowercase().contains(&needle)
        })
        .filter(|interview| status.map_or(true, |wanted| interview.status == wanted))
        .collect()
}
