pub mod analytics_dto;
pub mod assessment_dto;
pub mod candidate_dto;
pub mod integration_dto;
pub mod interview_dto;
pub mod job_dto;
pub mod offer_dto;
pub mod talent_dto;
pub mod template_dto;
