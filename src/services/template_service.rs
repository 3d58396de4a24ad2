use uuid::Uuid;

use crate::dto::template_dto::{CreateTemplatePayload, SplicePayload, SpliceResponse, UpdateTemplatePayload};
use crate::error::{Error, Result};
use crate::models::template::{CommunicationTemplate, PLACEHOLDERS};
use crate::store::Store;
use crate::utils::text;

#[derive(Clone)]
pub struct TemplateService {
    store: Store,
}

impl TemplateService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<CommunicationTemplate> {
        self.store.templates()
    }

    pub fn create(&self, payload: CreateTemplatePayload) -> CommunicationTemplate {
        let template = CommunicationTemplate {
            id: Uuid::new_v4(),
            name: payload.name,
            channel: payload.channel,
            subject: payload.subject,
            content: payload.content,
            category: payload.category,
            usage: 0,
        };
        self.store.add_template(template.clone());
        template
    }

    pub fn update(&self, id: Uuid, payload: UpdateTemplatePayload) -> Result<CommunicationTemplate> {
        self.store
            .update_template(id, |template| {
                if let Some(name) = &payload.name {
                    template.name = name.clone();
                }
                if let Some(channel) = payload.channel {
                    template.channel = channel;
                }
                if let Some(subject) = &payload.subject {
                    template.subject = subject.clone();
                }
                if let Some(content) = &payload.content {
                    template.content = content.clone();
                }
                if let Some(category) = payload.category {
                    template.category = category;
                }
                template.clone()
            })
            .ok_or_else(|| Error::NotFound(format!("Template {} not found", id)))
    }

    /// Removal is immediate; there is no confirmation step and no undo.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        if self.store.remove_template(id) {
            Ok(())
        } else {
            Err(Error::NotFound(format!("Template {} not found", id)))
        }
    }

    pub fn duplicate(&self, id: Uuid) -> Result<CommunicationTemplate> {
        let original = self
            .store
            .templates()
            .into_iter()
            .find(|template| template.id == id)
            .ok_or_else(|| Error::NotFound(format!("Template {} not found", id)))?;
        let copy = original.duplicate();
        self.store.add_template(copy.clone());
        Ok(copy)
    }

    pub fn splice(&self, payload: SplicePayload) -> SpliceResponse {
        let (text, cursor) = text::splice_selection(
            &payload.text,
            payload.selection_start,
            payload.selection_end,
            &payload.insertion,
        );
        SpliceResponse { text, cursor }
    }

    pub fn placeholders(&self) -> Vec<String> {
        PLACEHOLDERS.iter().map(|token| token.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::template::{TemplateCategory, TemplateChannel};

    fn service() -> TemplateService {
        TemplateService::new(Store::seeded())
    }

    #[test]
    fn create_appends_with_zero_usage() {
        let service = service();
        let before = service.list().len();
        let created = service.create(CreateTemplatePayload {
            name: "Offer Letter".into(),
            channel: TemplateChannel::Email,
            subject: "Your offer from {{company.name}}".into(),
            content: "Hi {{candidate.name}}, we are delighted to extend an offer.".into(),
            category: TemplateCategory::Offer,
        });
        assert_eq!(created.usage, 0);
        assert_eq!(service.list().len(), before + 1);
    }

    #[test]
    fn duplicate_renames_and_resets_usage_leaving_the_original_alone() {
        let service = service();
        let original = service
            .list()
            .into_iter()
            .find(|template| template.name == "Interview Invitation")
            .expect("seeded template");
        assert_eq!(original.usage, 45);

        let copy = service.duplicate(original.id).expect("duplicate");
        assert_eq!(copy.name, "Interview Invitation (Copy)");
        assert_eq!(copy.usage, 0);
        assert_ne!(copy.id, original.id);

        let kept = service
            .list()
            .into_iter()
            .find(|template| template.id == original.id)
            .expect("original still present");
        assert_eq!(kept.usage, 45);
        assert_eq!(kept.name, "Interview Invitation");
    }

    #[test]
    fn update_replaces_only_the_given_fields() {
        let service = service();
        let target = service.list()[0].clone();
        let updated = service
            .update(
                target.id,
                UpdateTemplatePayload {
                    name: Some("Renamed".into()),
                    channel: None,
                    subject: None,
                    content: None,
                    category: None,
                },
            )
            .expect("update");
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.content, target.content);
        assert_eq!(updated.usage, target.usage);
    }

    #[test]
    fn delete_removes_by_id() {
        let service = service();
        let target = service.list()[0].clone();
        service.delete(target.id).expect("delete");
        assert!(service.list().iter().all(|template| template.id != target.id));
        assert!(matches!(service.delete(target.id), Err(Error::NotFound(_))));
    }

    #[test]
    fn splice_inserts_a_placeholder_at_the_cursor() {
        let service = service();
        let result = service.splice(SplicePayload {
            text: "Dear ,".into(),
            selection_start: 5,
            selection_end: 5,
            insertion: "{{candidate.name}}".into(),
        });
        assert_eq!(result.text, "Dear {{candidate.name}},");
    }
}
