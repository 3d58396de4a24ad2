use uuid::Uuid;

use crate::dto::job_dto::{JobListQuery, JobStatsResponse, UpdateDraftPayload};
use crate::error::{Error, Result};
use crate::models::job::{Job, JobDraft, JobStatus, JobType, WizardStep};
use crate::store::Store;
use crate::utils::time;

#[derive(Clone)]
pub struct JobService {
    store: Store,
}

impl JobService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn list(&self, query: JobListQuery) -> Vec<Job> {
        filter_jobs(
            self.store.jobs(),
            query.search.as_deref().unwrap_or(""),
            query.status,
        )
    }

    pub fn get(&self, id: Uuid) -> Result<Job> {
        self.store
            .job(id)
            .ok_or_else(|| Error::NotFound(format!("Job {} not found", id)))
    }

    pub fn stats(&self) -> JobStatsResponse {
        let jobs = self.store.jobs();
        JobStatsResponse {
            active: jobs.iter().filter(|j| j.status == JobStatus::Active).count(),
            draft: jobs.iter().filter(|j| j.status == JobStatus::Draft).count(),
            closed: jobs.iter().filter(|j| j.status == JobStatus::Closed).count(),
            total_applicants: jobs.iter().map(|j| j.applicants).sum(),
        }
    }

    // Wizard --------------------------------------------------------------

    pub fn create_draft(&self) -> JobDraft {
        let draft = JobDraft::new(self.store.channel_catalog());
        self.store.insert_draft(draft.clone());
        draft
    }

    pub fn draft(&self, id: Uuid) -> Result<JobDraft> {
        self.store
            .draft(id)
            .ok_or_else(|| Error::NotFound(format!("Draft {} not found", id)))
    }

    pub fn update_draft(&self, id: Uuid, payload: UpdateDraftPayload) -> Result<JobDraft> {
        self.store
            .update_draft(id, |draft| {
                payload.apply_to(&mut draft.form);
                draft.clone()
            })
            .ok_or_else(|| Error::NotFound(format!("Draft {} not found", id)))
    }

    pub fn advance_draft(&self, id: Uuid) -> Result<JobDraft> {
        let (moved, draft) = self
            .store
            .update_draft(id, |draft| (draft.advance(), draft.clone()))
            .ok_or_else(|| Error::NotFound(format!("Draft {} not found", id)))?;
        if !moved {
            return Err(Error::BadRequest(match draft.step {
                WizardStep::Details => {
                    "Title and location are required before continuing".to_string()
                }
                _ => "Already at the final step".to_string(),
            }));
        }
        Ok(draft)
    }

    pub fn back_draft(&self, id: Uuid) -> Result<JobDraft> {
        let (moved, draft) = self
            .store
            .update_draft(id, |draft| (draft.back(), draft.clone()))
            .ok_or_else(|| Error::NotFound(format!("Draft {} not found", id)))?;
        if !moved {
            return Err(Error::BadRequest("Already at the first step".to_string()));
        }
        Ok(draft)
    }

    pub fn toggle_channel(&self, id: Uuid, channel: &str) -> Result<JobDraft> {
        let (toggled, draft) = self
            .store
            .update_draft(id, |draft| (draft.toggle_channel(channel), draft.clone()))
            .ok_or_else(|| Error::NotFound(format!("Draft {} not found", id)))?;
        if !toggled {
            return Err(Error::NotFound(format!(
                "Unknown distribution channel: {}",
                channel
            )));
        }
        Ok(draft)
    }

    /// Turns a finished draft into a live posting. The selected channels
    /// travel with the job; a posting-distribution service would pick the
    /// job up from here.
    pub fn publish_draft(&self, id: Uuid) -> Result<Job> {
        let draft = self.draft(id)?;
        if !draft.ready_to_publish() {
            return Err(Error::BadRequest(
                "Draft must reach the distribution step before publishing".to_string(),
            ));
        }

        let form = &draft.form;
        let job = Job {
            id: Uuid::new_v4(),
            title: form.title.clone(),
            location: form.location.clone(),
            // The details step labels job type as required but never
            // enforces it; unset drafts publish as full-time.
            job_type: form.job_type.unwrap_or(JobType::FullTime),
            department: form.department.clone(),
            experience_level: form.experience_level,
            status: JobStatus::Active,
            applicants: 0,
            description: non_blank(&form.description),
            requirements: non_blank(&form.requirements),
            benefits: non_blank(&form.benefits),
            channels: draft.selected_channels(),
            created_at: time::now(),
            created_date: time::today(),
        };

        self.store.add_job(job.clone());
        self.store.remove_draft(id);
        tracing::info!(job_id = %job.id, title = %job.title, "job published");
        Ok(job)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Case-insensitive substring match on the title plus an exact status
/// match when a filter is active.
fn filter_jobs(jobs: Vec<Job>, search: &str, status: Option<JobStatus>) -> Vec<Job> {
    let needle = search.to_lowercase();
    jobs.into_iter()
        .filter(|job| job.title.to_lowercase().contains(&needle))
        .filter(|job| status.map_or(true, |wanted| job.status == wanted))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::job_dto::JobListQuery;

    fn service() -> JobService {
        JobService::new(Store::seeded())
    }

    #[test]
    fn empty_search_returns_every_job() {
        let service = service();
        let all = service.list(JobListQuery::default());
        assert_eq!(all.len(), service.store.jobs().len());
    }

    #[test]
    fn status_filter_returns_exactly_the_matching_subset() {
        let service = service();
        let active = service.list(JobListQuery {
            search: None,
            status: Some(JobStatus::Active),
        });
        assert!(!active.is_empty());
        assert!(active.iter().all(|job| job.status == JobStatus::Active));

        let expected = service
            .store
            .jobs()
            .iter()
            .filter(|job| job.status == JobStatus::Active)
            .count();
        assert_eq!(active.len(), expected);
    }

    #[test]
    fn search_is_case_insensitive_substring_on_title() {
        let service = service();
        let hits = service.list(JobListQuery {
            search: Some("frontend".into()),
            status: None,
        });
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Senior Frontend Developer");

        let none = service.list(JobListQuery {
            search: Some("zzz".into()),
            status: None,
        });
        assert!(none.is_empty());
    }

    #[test]
    fn publish_carries_selected_channels_onto_the_job() {
        let service = service();
        let draft = service.create_draft();
        service
            .update_draft(
                draft.id,
                UpdateDraftPayload {
                    title: Some("Staff Engineer".into()),
                    location: Some("Remote".into()),
                    job_type: Some(JobType::FullTime),
                    department: Some("Engineering".into()),
                    experience_level: None,
                    description: Some("Own the platform".into()),
                    requirements: None,
                    benefits: None,
                },
            )
            .expect("update");
        service.advance_draft(draft.id).expect("to description");
        service.advance_draft(draft.id).expect("to distribution");
        service
            .toggle_channel(draft.id, "Stack Overflow")
            .expect("toggle");

        let job = service.publish_draft(draft.id).expect("publish");
        assert_eq!(job.status, JobStatus::Active);
        assert_eq!(
            job.channels,
            vec!["LinkedIn", "Indeed", "Stack Overflow"]
        );
        assert!(service.store.draft(draft.id).is_none());
        assert!(service.store.job(job.id).is_some());
    }

    #[test]
    fn publish_requires_the_distribution_step() {
        let service = service();
        let draft = service.create_draft();
        let err = service.publish_draft(draft.id).unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }
}
