use serde::{Deserialize, Serialize};

use crate::models::analytics::{
    DiversityMetric, FunnelStage, Kpi, SourceMetric, VideoInterview,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiListResponse {
    pub items: Vec<Kpi>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRow {
    #[serde(flatten)]
    pub metric: SourceMetric,
    pub conversion_rate: String,
}

impl From<SourceMetric> for SourceRow {
    fn from(metric: SourceMetric) -> Self {
        let conversion_rate = metric.conversion_rate();
        Self {
            metric,
            conversion_rate,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceListResponse {
    pub items: Vec<SourceRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunnelResponse {
    pub stages: Vec<FunnelStage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiversityResponse {
    pub items: Vec<DiversityMetric>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoInterviewListResponse {
    pub items: Vec<VideoInterview>,
}
