pub mod analytics_service;
pub mod assessment_service;
pub mod candidate_service;
pub mod content_service;
pub mod integration_service;
pub mod interview_service;
pub mod job_service;
pub mod offer_service;
pub mod talent_service;
pub mod template_service;
