pub mod analytics;
pub mod assessment;
pub mod candidate;
pub mod content;
pub mod integration;
pub mod interview;
pub mod job;
pub mod offer;
pub mod talent;
pub mod template;
