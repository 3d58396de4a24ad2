use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::job::{
    ChannelSelection, ExperienceLevel, Job, JobDraft, JobForm, JobStatus, JobType, WizardStep,
};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobListQuery {
    pub search: Option<String>,
    pub status: Option<JobStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponse {
    pub items: Vec<Job>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatsResponse {
    pub active: usize,
    pub draft: usize,
    pub closed: usize,
    pub total_applicants: i64,
}

/// Field-level wizard update: only the provided keys change, everything
/// else in the form is preserved. Blank values are legal here; the step
/// machine is what refuses to advance past an incomplete details step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDraftPayload {
    pub title: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub department: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
}

impl UpdateDraftPayload {
    pub fn apply_to(&self, form: &mut JobForm) {
        if let Some(title) = &self.title {
            form.title = title.clone();
        }
        if let Some(location) = &self.location {
            form.location = location.clone();
        }
        if let Some(job_type) = self.job_type {
            form.job_type = Some(job_type);
        }
        if let Some(department) = &self.department {
            form.department = Some(department.clone());
        }
        if let Some(level) = self.experience_level {
            form.experience_level = Some(level);
        }
        if let Some(description) = &self.description {
            form.description = description.clone();
        }
        if let Some(requirements) = &self.requirements {
            form.requirements = requirements.clone();
        }
        if let Some(benefits) = &self.benefits {
            form.benefits = benefits.clone();
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftResponse {
    pub id: Uuid,
    pub step: WizardStep,
    pub form: JobForm,
    pub channels: Vec<ChannelSelection>,
    pub can_advance: bool,
    pub can_go_back: bool,
    pub ready_to_publish: bool,
}

impl From<JobDraft> for DraftResponse {
    fn from(draft: JobDraft) -> Self {
        let can_advance = draft.can_advance();
        let can_go_back = draft.step != WizardStep::Details;
        let ready_to_publish = draft.ready_to_publish();
        Self {
            id: draft.id,
            step: draft.step,
            form: draft.form,
            channels: draft.channels,
            can_advance,
            can_go_back,
            ready_to_publish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_update_preserves_other_fields() {
        let mut form = JobForm {
            title: "Engineer".into(),
            location: "Remote".into(),
            ..Default::default()
        };
        let payload = UpdateDraftPayload {
            title: None,
            location: Some("Austin, TX".into()),
            job_type: Some(JobType::Contract),
            department: None,
            experience_level: None,
            description: None,
            requirements: None,
            benefits: None,
        };
        payload.apply_to(&mut form);
        assert_eq!(form.title, "Engineer");
        assert_eq!(form.location, "Austin, TX");
        assert_eq!(form.job_type, Some(JobType::Contract));
    }
}
