use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationCategory {
    Hris,
    Calendar,
    Communication,
    Background,
}

impl IntegrationCategory {
    pub fn label(&self) -> &'static str {
        match self {
            IntegrationCategory::Hris => "HRIS & Payroll",
            IntegrationCategory::Calendar => "Calendar & Scheduling",
            IntegrationCategory::Communication => "Communication",
            IntegrationCategory::Background => "Background Checks",
        }
    }

    /// Settings installed when a connection is established.
    pub fn default_settings(&self) -> BTreeMap<String, bool> {
        let entries: &[(&str, bool)] = match self {
            IntegrationCategory::Hris => &[
                ("auto_sync", true),
                ("sync_new_hires", true),
                ("sync_employee_data", false),
            ],
            IntegrationCategory::Calendar => &[
                ("auto_calendar_sync", true),
                ("reminder_emails", true),
                ("video_meetings", true),
            ],
            _ => &[],
        };
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), *value))
            .collect()
    }

    pub const ALL: [IntegrationCategory; 4] = [
        IntegrationCategory::Hris,
        IntegrationCategory::Calendar,
        IntegrationCategory::Communication,
        IntegrationCategory::Background,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationStatus {
    Connected,
    Available,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Integration {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub category: IntegrationCategory,
    pub features: Vec<String>,
    pub status: IntegrationStatus,
    pub settings: BTreeMap<String, bool>,
}

impl Integration {
    /// Connecting is simulated: it succeeds immediately and installs the
    /// category defaults. Real credential exchange belongs to an external
    /// connection service.
    pub fn connect(&mut self) {
        self.status = IntegrationStatus::Connected;
        self.settings = self.category.default_settings();
    }

    pub fn disconnect(&mut self) {
        self.status = IntegrationStatus::Available;
        self.settings.clear();
    }
}
