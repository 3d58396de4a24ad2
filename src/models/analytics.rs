use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kpi {
    pub title: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetric {
    pub source: String,
    pub applications: i64,
    pub hires: i64,
    pub cost: String,
}

impl SourceMetric {
    /// Hire conversion as a percentage with one decimal, the figure the
    /// source-effectiveness table displays next to each row.
    pub fn conversion_rate(&self) -> String {
        if self.applications == 0 {
            return "0.0".to_string();
        }
        format!(
            "{:.1}",
            self.hires as f64 / self.applications as f64 * 100.0
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunnelStage {
    pub stage: String,
    pub count: i64,
    pub percentage: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiversityStanding {
    OnTrack,
    Behind,
    Exceeded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiversityMetric {
    pub metric: String,
    pub current: String,
    pub target: String,
    pub standing: DiversityStanding,
}

/// Precomputed reporting figures. Nothing here is aggregated at request
/// time; an analytics pipeline would hand this snapshot over wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub kpis: Vec<Kpi>,
    pub sources: Vec<SourceMetric>,
    pub funnel: Vec<FunnelStage>,
    pub diversity: Vec<DiversityMetric>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoInterviewKind {
    Recorded,
    Live,
}

/// Analysis only exists once a recording completes; scheduled sessions
/// have no score to show. The tag doubles as the row's status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum VideoOutcome {
    Scheduled,
    InProgress,
    Completed { ai_score: i32, sentiment: Sentiment },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoInterview {
    pub id: Uuid,
    pub candidate_name: String,
    pub initials: String,
    pub position: String,
    pub kind: VideoInterviewKind,
    pub date: NaiveDate,
    pub duration: String,
    #[serde(flatten)]
    pub outcome: VideoOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentPoint {
    pub time: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehavioralMetrics {
    pub confidence: i32,
    pub clarity: i32,
    pub enthusiasm: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoInsights {
    pub sentiment_timeline: Vec<SentimentPoint>,
    pub behavioral_metrics: BehavioralMetrics,
    pub keywords: Vec<String>,
}
