use chrono::NaiveDate;

use crate::dto::offer_dto::{OfferListQuery, OfferResponse, OfferStatsResponse};
use crate::models::offer::{Offer, OfferStatus, OnboardingTask};
use crate::store::Store;
use crate::utils::time;

#[derive(Clone)]
pub struct OfferService {
    store: Store,
}

impl OfferService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn list(&self, query: OfferListQuery) -> Vec<OfferResponse> {
        self.list_on(query, time::today())
    }

    fn list_on(&self, query: OfferListQuery, today: NaiveDate) -> Vec<OfferResponse> {
        filter_offers(
            self.store.offers(),
            query.search.as_deref().unwrap_or(""),
            query.status,
        )
        .into_iter()
        .map(|offer| {
            let expiring_soon = offer.is_expiring_soon(today);
            OfferResponse {
                offer,
                expiring_soon,
            }
        })
        .collect()
    }

    pub fn stats(&self) -> OfferStatsResponse {
        self.stats_on(time::today())
    }

    fn stats_on(&self, today: NaiveDate) -> OfferStatsResponse {
        let offers = self.store.offers();
        let count = |status: OfferStatus| {
            offers.iter().filter(|offer| offer.status == status).count()
        };
        OfferStatsResponse {
            pending: count(OfferStatus::Pending),
            accepted: count(OfferStatus::Accepted),
            negotiating: count(OfferStatus::Negotiating),
            expiring_soon: offers
                .iter()
                .filter(|offer| offer.is_expiring_soon(today))
                .count(),
        }
    }

    pub fn onboarding(&self) -> Vec<OnboardingTask> {
        self.store.onboarding_tasks().to_vec()
    }
}

fn filter_offers(offers: &[Offer], search: &str, status: Option<OfferStatus>) -> Vec<Offer> {
    let needle = search.to_lowercase();
    offers
        .iter()
        .filter(|offer| {
            needle.is_empty()
                || offer.candidate_name.to_lowercase().contains(&needle)
                || offer.position.to_lowercase().contains(&needle)
        })
        .filter(|offer| status.map_or(true, |wanted| offer.status == wanted))
        .cloned()
        .collect()
}
