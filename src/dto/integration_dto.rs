use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::integration::{Integration, IntegrationCategory};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationCategoryGroup {
    pub id: IntegrationCategory,
    pub name: String,
    pub integrations: Vec<Integration>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationListResponse {
    pub categories: Vec<IntegrationCategoryGroup>,
}

/// Partial settings update: each provided key flips one toggle. Keys that
/// the integration does not expose are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSettingsPayload {
    pub settings: BTreeMap<String, bool>,
}
