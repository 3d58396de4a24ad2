pub mod seed;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::models::analytics::{AnalyticsSnapshot, VideoInsights, VideoInterview};
use crate::models::assessment::{Assessment, AssessmentResult};
use crate::models::candidate::{Candidate, CandidateProfile};
use crate::models::content::{FeaturePage, HelpArticle, HelpCategory};
use crate::models::integration::Integration;
use crate::models::interview::{Interview, Interviewer};
use crate::models::job::{ChannelOption, Job, JobDraft};
use crate::models::offer::{Offer, OnboardingTask};
use crate::models::talent::TalentPoolMember;
use crate::models::template::CommunicationTemplate;

/// In-memory dataset behind every endpoint. Collections that the UI can
/// mutate sit behind locks; everything else is a seeded catalog that only
/// changes on restart. There is no persistence: restarting the process
/// resets every collection to its seed.
pub struct StoreInner {
    jobs: RwLock<Vec<Job>>,
    drafts: RwLock<HashMap<Uuid, JobDraft>>,
    interviews: RwLock<Vec<Interview>>,
    templates: RwLock<Vec<CommunicationTemplate>>,
    integrations: RwLock<Vec<Integration>>,

    candidates: Vec<Candidate>,
    profiles: HashMap<Uuid, CandidateProfile>,
    offers: Vec<Offer>,
    onboarding_tasks: Vec<OnboardingTask>,
    assessments: Vec<Assessment>,
    assessment_results: Vec<AssessmentResult>,
    talent_pool: Vec<TalentPoolMember>,
    interviewers: Vec<Interviewer>,
    time_slots: Vec<String>,
    channel_catalog: Vec<ChannelOption>,
    analytics: AnalyticsSnapshot,
    video_interviews: Vec<VideoInterview>,
    video_insights: HashMap<Uuid, VideoInsights>,
    features: Vec<FeaturePage>,
    help_categories: Vec<HelpCategory>,
    help_articles: Vec<HelpArticle>,
}

#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    pub fn seeded() -> Self {
        Self {
            inner: Arc::new(seed::seed()),
        }
    }

    // Jobs ----------------------------------------------------------------

    pub fn jobs(&self) -> Vec<Job> {
        self.inner.jobs.read().expect("store lock poisoned").clone()
    }

    pub fn job(&self, id: Uuid) -> Option<Job> {
        self.jobs().into_iter().find(|job| job.id == id)
    }

    pub fn add_job(&self, job: Job) {
        self.inner
            .jobs
            .write()
            .expect("store lock poisoned")
            .push(job);
    }

    // Wizard drafts -------------------------------------------------------

    pub fn insert_draft(&self, draft: JobDraft) {
        self.inner
            .drafts
            .write()
            .expect("store lock poisoned")
            .insert(draft.id, draft);
    }

    pub fn draft(&self, id: Uuid) -> Option<JobDraft> {
        self.inner
            .drafts
            .read()
            .expect("store lock poisoned")
            .get(&id)
            .cloned()
    }

    /// Runs `apply` against the draft under the write lock, so a step
    /// transition fully resolves before the next request observes it.
    pub fn update_draft<R>(&self, id: Uuid, apply: impl FnOnce(&mut JobDraft) -> R) -> Option<R> {
        self.inner
            .drafts
            .write()
            .expect("store lock poisoned")
            .get_mut(&id)
            .map(apply)
    }

    pub fn remove_draft(&self, id: Uuid) -> Option<JobDraft> {
        self.inner
            .drafts
            .write()
            .expect("store lock poisoned")
            .remove(&id)
    }

    // Interviews ----------------------------------------------------------

    pub fn interviews(&self) -> Vec<Interview> {
        self.inner
            .interviews
            .read()
            .expect("store lock poisoned")
            .clone()
    }

    pub fn add_interview(&self, interview: Interview) {
        self.inner
            .interviews
            .write()
            .expect("store lock poisoned")
            .push(interview);
    }

    pub fn interviewers(&self) -> &[Interviewer] {
        &self.inner.interviewers
    }

    pub fn time_slots(&self) -> &[String] {
        &self.inner.time_slots
    }

    // Templates -----------------------------------------------------------

    pub fn templates(&self) -> Vec<CommunicationTemplate> {
        self.inner
            .templates
            .read()
            .expect("store lock poisoned")
            .clone()
    }

    pub fn add_template(&self, template: CommunicationTemplate) {
        self.inner
            .templates
            .write()
            .expect("store lock poisoned")
            .push(template);
    }

    pub fn update_template<R>(
        &self,
        id: Uuid,
        apply: impl FnOnce(&mut CommunicationTemplate) -> R,
    ) -> Option<R> {
        self.inner
            .templates
            .write()
            .expect("store lock poisoned")
            .iter_mut()
            .find(|template| template.id == id)
            .map(apply)
    }

    pub fn remove_template(&self, id: Uuid) -> bool {
        let mut templates = self.inner.templates.write().expect("store lock poisoned");
        let before = templates.len();
        templates.retain(|template| template.id != id);
        templates.len() < before
    }

    // Integrations --------------------------------------------------------

    pub fn integrations(&self) -> Vec<Integration> {
        self.inner
            .integrations
            .read()
            .expect("store lock poisoned")
            .clone()
    }

    pub fn update_integration<R>(
        &self,
        id: Uuid,
        apply: impl FnOnce(&mut Integration) -> R,
    ) -> Option<R> {
        self.inner
            .integrations
            .write()
            .expect("store lock poisoned")
            .iter_mut()
            .find(|integration| integration.id == id)
            .map(apply)
    }

    // Seeded catalogs -----------------------------------------------------

    pub fn candidates(&self) -> &[Candidate] {
        &self.inner.candidates
    }

    pub fn candidate_profile(&self, id: Uuid) -> Option<&CandidateProfile> {
        self.inner.profiles.get(&id)
    }

    pub fn offers(&self) -> &[Offer] {
        &self.inner.offers
    }

    pub fn onboarding_tasks(&self) -> &[OnboardingTask] {
        &self.inner.onboarding_tasks
    }

    pub fn assessments(&self) -> &[Assessment] {
        &self.inner.assessments
    }

    pub fn assessment_results(&self) -> &[AssessmentResult] {
        &self.inner.assessment_results
    }

    pub fn talent_pool(&self) -> &[TalentPoolMember] {
        &self.inner.talent_pool
    }

    pub fn channel_catalog(&self) -> &[ChannelOption] {
        &self.inner.channel_catalog
    }

    pub fn analytics(&self) -> &AnalyticsSnapshot {
        &self.inner.analytics
    }

    pub fn video_interviews(&self) -> &[VideoInterview] {
        &self.inner.video_interviews
    }

    pub fn video_insights(&self, id: Uuid) -> Option<&VideoInsights> {
        self.inner.video_insights.get(&id)
    }

    pub fn features(&self) -> &[FeaturePage] {
        &self.inner.features
    }

    pub fn help_categories(&self) -> &[HelpCategory] {
        &self.inner.help_categories
    }

    pub fn help_articles(&self) -> &[HelpArticle] {
        &self.inner.help_articles
    }
}
