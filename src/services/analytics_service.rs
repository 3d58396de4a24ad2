use uuid::Uuid;

use crate::dto::analytics_dto::SourceRow;
use crate::error::{Error, Result};
use crate::models::analytics::{
    DiversityMetric, FunnelStage, Kpi, VideoInsights, VideoInterview,
};
use crate::store::Store;

#[derive(Clone)]
pub struct AnalyticsService {
    store: Store,
}

impl AnalyticsService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn kpis(&self) -> Vec<Kpi> {
        self.store.analytics().kpis.clone()
    }

    pub fn sources(&self) -> Vec<SourceRow> {
        self.store
            .analytics()
            .sources
            .iter()
            .cloned()
            .map(SourceRow::from)
            .collect()
    }

    pub fn funnel(&self) -> Vec<FunnelStage> {
        self.store.analytics().funnel.clone()
    }

    pub fn diversity(&self) -> Vec<DiversityMetric> {
        self.store.analytics().diversity.clone()
    }

    pub fn video_interviews(&self) -> Vec<VideoInterview> {
        self.store.video_interviews().to_vec()
    }

    /// Insights are only available once the recording has been analyzed;
    /// scheduled sessions 404 here.
    pub fn video_insights(&self, id: Uuid) -> Result<VideoInsights> {
        if !self
            .store
            .video_interviews()
            .iter()
            .any(|interview| interview.id == id)
        {
            return Err(Error::NotFound(format!("Video interview {} not found", id)));
        }
        self.store
            .video_insights(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("No insights yet for interview {}", id)))
    }
}
