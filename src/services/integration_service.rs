use uuid::Uuid;

use crate::dto::integration_dto::{IntegrationCategoryGroup, UpdateSettingsPayload};
use crate::error::{Error, Result};
use crate::models::integration::{Integration, IntegrationCategory};
use crate::store::Store;

#[derive(Clone)]
pub struct IntegrationService {
    store: Store,
}

impl IntegrationService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn list_grouped(&self) -> Vec<IntegrationCategoryGroup> {
        let integrations = self.store.integrations();
        IntegrationCategory::ALL
            .into_iter()
            .map(|category| IntegrationCategoryGroup {
                id: category,
                name: category.label().to_string(),
                integrations: integrations
                    .iter()
                    .filter(|integration| integration.category == category)
                    .cloned()
                    .collect(),
            })
            .collect()
    }

    /// Connection is simulated: no credential exchange happens, the
    /// integration flips to connected with its category defaults.
    pub fn connect(&self, id: Uuid) -> Result<Integration> {
        let integration = self
            .store
            .update_integration(id, |integration| {
                integration.connect();
                integration.clone()
            })
            .ok_or_else(|| Error::NotFound(format!("Integration {} not found", id)))?;
        tracing::info!(name = %integration.name, "integration connected");
        Ok(integration)
    }

    pub fn disconnect(&self, id: Uuid) -> Result<Integration> {
        self.store
            .update_integration(id, |integration| {
                integration.disconnect();
                integration.clone()
            })
            .ok_or_else(|| Error::NotFound(format!("Integration {} not found", id)))
    }

    pub fn update_settings(&self, id: Uuid, payload: UpdateSettingsPayload) -> Result<Integration> {
        self.store
            .update_integration(id, |integration| {
                // Reject unknown keys before touching anything, so a bad
                // payload never half-applies.
                for key in payload.settings.keys() {
                    if !integration.settings.contains_key(key) {
                        return Err(Error::BadRequest(format!(
                            "Unknown setting for {}: {}",
                            integration.name, key
                        )));
                    }
                }
                for (key, value) in &payload.settings {
                    integration.settings.insert(key.clone(), *value);
                }
                Ok(integration.clone())
            })
            .ok_or_else(|| Error::NotFound(format!("Integration {} not found", id)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::integration::IntegrationStatus;
    use std::collections::BTreeMap;

    fn service() -> IntegrationService {
        IntegrationService::new(Store::seeded())
    }

    fn find(service: &IntegrationService, name: &str) -> Integration {
        service
            .store
            .integrations()
            .into_iter()
            .find(|integration| integration.name == name)
            .expect("seeded integration")
    }

    #[test]
    fn listing_groups_by_category() {
        let service = service();
        let groups = service.list_grouped();
        assert_eq!(groups.len(), 4);
        assert!(groups
            .iter()
            .all(|group| group.integrations.len() == 2));
    }

    #[test]
    fn connect_marks_connected_immediately() {
        let service = service();
        let slack = find(&service, "Slack");
        assert_eq!(slack.status, IntegrationStatus::Available);

        let connected = service.connect(slack.id).expect("connect");
        assert_eq!(connected.status, IntegrationStatus::Connected);
    }

    #[test]
    fn settings_toggle_known_keys_and_reject_unknown_ones() {
        let service = service();
        let workday = find(&service, "Workday");
        assert_eq!(workday.settings.get("sync_employee_data"), Some(&false));

        let mut settings = BTreeMap::new();
        settings.insert("sync_employee_data".to_string(), true);
        let updated = service
            .update_settings(workday.id, UpdateSettingsPayload { settings })
            .expect("update");
        assert_eq!(updated.settings.get("sync_employee_data"), Some(&true));

        let mut bogus = BTreeMap::new();
        bogus.insert("does_not_exist".to_string(), true);
        assert!(matches!(
            service.update_settings(workday.id, UpdateSettingsPayload { settings: bogus }),
            Err(Error::BadRequest(_))
        ));
    }

    #[test]
    fn disconnect_clears_settings() {
        let service = service();
        let calendar = find(&service, "Google Calendar");
        assert!(!calendar.settings.is_empty());

        let disconnected = service.disconnect(calendar.id).expect("disconnect");
        assert_eq!(disconnected.status, IntegrationStatus::Available);
        assert!(disconnected.settings.is_empty());
    }
}
