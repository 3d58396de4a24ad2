use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::template::{CommunicationTemplate, TemplateCategory, TemplateChannel};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateListResponse {
    pub items: Vec<CommunicationTemplate>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTemplatePayload {
    #[validate(length(min = 1))]
    pub name: String,
    pub channel: TemplateChannel,
    #[serde(default)]
    pub subject: String,
    #[validate(length(min = 1))]
    pub content: String,
    pub category: TemplateCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTemplatePayload {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub channel: Option<TemplateChannel>,
    pub subject: Option<String>,
    #[validate(length(min = 1))]
    pub content: Option<String>,
    pub category: Option<TemplateCategory>,
}

/// Inputs of the editor's insert-at-cursor action: the field text, the
/// active selection, and the token being inserted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SplicePayload {
    pub text: String,
    pub selection_start: usize,
    pub selection_end: usize,
    #[validate(length(min = 1))]
    pub insertion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpliceResponse {
    pub text: String,
    pub cursor: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceholdersResponse {
    pub placeholders: Vec<String>,
}
