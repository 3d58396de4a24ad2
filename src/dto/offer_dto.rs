use serde::{Deserialize, Serialize};

use crate::models::offer::{Offer, OfferStatus, OnboardingTask};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OfferListQuery {
    pub search: Option<String>,
    pub status: Option<OfferStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferResponse {
    #[serde(flatten)]
    pub offer: Offer,
    pub expiring_soon: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferListResponse {
    pub items: Vec<OfferResponse>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferStatsResponse {
    pub pending: usize,
    pub accepted: usize,
    pub negotiating: usize,
    pub expiring_soon: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingResponse {
    pub items: Vec<OnboardingTask>,
}
