use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateChannel {
    Email,
    Sms,
    Whatsapp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    General,
    Acknowledgment,
    Interview,
    Reminder,
    Rejection,
    Offer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunicationTemplate {
    pub id: Uuid,
    pub name: String,
    pub channel: TemplateChannel,
    pub subject: String,
    pub content: String,
    pub category: TemplateCategory,
    pub usage: i64,
}

impl CommunicationTemplate {
    /// Clone with a fresh id, "(Copy)" appended to the name and the usage
    /// counter reset. The original is left untouched.
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: format!("{} (Copy)", self.name),
            usage: 0,
            ..self.clone()
        }
    }
}

/// Placeholder tokens offered by the editor. Substitution happens in the
/// delivery service, not here; templates store the raw tokens.
pub const PLACEHOLDERS: &[&str] = &[
    "{{candidate.name}}",
    "{{candidate.email}}",
    "{{job.title}}",
    "{{company.name}}",
    "{{recruiter.name}}",
    "{{interview.date}}",
    "{{interview.time}}",
    "{{interview.link}}",
    "{{review.timeframe}}",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_resets_usage_and_renames() {
        let original = CommunicationTemplate {
            id: Uuid::new_v4(),
            name: "Interview Invitation".into(),
            channel: TemplateChannel::Email,
            subject: "Interview Invitation - {{job.title}} Position".into(),
            content: "Dear {{candidate.name}},".into(),
            category: TemplateCategory::Interview,
            usage: 45,
        };
        let copy = original.duplicate();
        assert_eq!(copy.name, "Interview Invitation (Copy)");
        assert_eq!(copy.usage, 0);
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.subject, original.subject);
        assert_eq!(original.usage, 45);
    }
}
