pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

use crate::services::{
    analytics_service::AnalyticsService, assessment_service::AssessmentService,
    candidate_service::CandidateService, content_service::ContentService,
    integration_service::IntegrationService, interview_service::InterviewService,
    job_service::JobService, offer_service::OfferService, talent_service::TalentService,
    template_service::TemplateService,
};
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub job_service: JobService,
    pub candidate_service: CandidateService,
    pub interview_service: InterviewService,
    pub offer_service: OfferService,
    pub assessment_service: AssessmentService,
    pub template_service: TemplateService,
    pub integration_service: IntegrationService,
    pub talent_service: TalentService,
    pub analytics_service: AnalyticsService,
    pub content_service: ContentService,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        let job_service = JobService::new(store.clone());
        let candidate_service = CandidateService::new(store.clone());
        let interview_service = InterviewService::new(store.clone());
        let offer_service = OfferService::new(store.clone());
        let assessment_service = AssessmentService::new(store.clone());
        let template_service = TemplateService::new(store.clone());
        let integration_service = IntegrationService::new(store.clone());
        let talent_service = TalentService::new(store.clone());
        let analytics_service = AnalyticsService::new(store.clone());
        let content_service = ContentService::new(store.clone());

        Self {
            store,
            job_service,
            candidate_service,
            interview_service,
            offer_service,
            assessment_service,
            template_service,
            integration_service,
            talent_service,
            analytics_service,
            content_service,
        }
    }
}
