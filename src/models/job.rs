use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Draft,
    Active,
    Closed,
    Archived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Temporary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub location: String,
    pub job_type: JobType,
    pub department: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub status: JobStatus,
    pub applicants: i64,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub channels: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub created_date: NaiveDate,
}

/// One publishable destination in the distribution step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelOption {
    pub name: String,
    pub description: String,
    pub recommended: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelSelection {
    pub name: String,
    pub description: String,
    pub recommended: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Details,
    Description,
    Distribution,
}

/// Working form state of the create-job wizard. Field-level updates keep
/// every other field intact; only the step machine below gates movement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobForm {
    pub title: String,
    pub location: String,
    pub job_type: Option<JobType>,
    pub department: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub description: String,
    pub requirements: String,
    pub benefits: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDraft {
    pub id: Uuid,
    pub step: WizardStep,
    pub form: JobForm,
    pub channels: Vec<ChannelSelection>,
    pub created_at: DateTime<Utc>,
}

impl JobDraft {
    /// A fresh draft starts at the details step with recommended channels
    /// pre-selected, matching the wizard's initial screen.
    pub fn new(catalog: &[ChannelOption]) -> Self {
        Self {
            id: Uuid::new_v4(),
            step: WizardStep::Details,
            form: JobForm::default(),
            channels: catalog
                .iter()
                .map(|option| ChannelSelection {
                    name: option.name.clone(),
                    description: option.description.clone(),
                    recommended: option.recommended,
                    selected: option.recommended,
                })
                .collect(),
            created_at: chrono::Utc::now(),
        }
    }

    /// Step 1 requires a title and a location before Next unlocks; step 2
    /// always advances; step 3 has nowhere further to go.
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Details => {
                !self.form.title.trim().is_empty() && !self.form.location.trim().is_empty()
            }
            WizardStep::Description => true,
            WizardStep::Distribution => false,
        }
    }

    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.step = match self.step {
            WizardStep::Details => WizardStep::Description,
            WizardStep::Description => WizardStep::Distribution,
            WizardStep::Distribution => return false,
        };
        true
    }

    pub fn back(&mut self) -> bool {
        self.step = match self.step {
            WizardStep::Details => return false,
            WizardStep::Description => WizardStep::Details,
            WizardStep::Distribution => WizardStep::Description,
        };
        true
    }

    pub fn toggle_channel(&mut self, name: &str) -> bool {
        match self
            .channels
            .iter_mut()
            .find(|channel| channel.name.eq_ignore_ascii_case(name))
        {
            Some(channel) => {
                channel.selected = !channel.selected;
                true
            }
            None => false,
        }
    }

    pub fn ready_to_publish(&self) -> bool {
        self.step == WizardStep::Distribution
    }

    pub fn selected_channels(&self) -> Vec<String> {
        self.channels
            .iter()
            .filter(|channel| channel.selected)
            .map(|channel| channel.name.clone())
            .collect()
    }
}
