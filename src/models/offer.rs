use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    Pending,
    Accepted,
    Declined,
    Negotiating,
    Expired,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: Uuid,
    pub candidate_name: String,
    pub position: String,
    pub department: String,
    pub salary: Decimal,
    pub currency: String,
    pub start_date: NaiveDate,
    pub status: OfferStatus,
    pub sent_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub accepted_date: Option<NaiveDate>,
}

impl Offer {
    /// An offer is flagged when its expiry is at most two days out but not
    /// yet past; already-expired offers are a separate state, not "soon".
    pub fn is_expiring_soon(&self, today: NaiveDate) -> bool {
        match self.expiry_date {
            Some(expiry) => {
                let days = crate::utils::time::days_until(today, expiry);
                days > 0 && days <= 2
            }
            None => false,
        }
    }
}

/// Post-acceptance onboarding progress for a hire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingTask {
    pub id: Uuid,
    pub candidate_name: String,
    pub position: String,
    pub start_date: NaiveDate,
    pub completed_tasks: i32,
    pub total_tasks: i32,
    pub next_task: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(expiry: Option<NaiveDate>) -> Offer {
        Offer {
            id: Uuid::new_v4(),
            candidate_name: "Sarah Johnson".into(),
            position: "Senior Frontend Developer".into(),
            department: "Engineering".into(),
            salary: Decimal::from(120_000),
            currency: "USD".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 2, 1).expect("valid date"),
            status: OfferStatus::Pending,
            sent_date: NaiveDate::from_ymd_opt(2026, 1, 18).expect("valid date"),
            expiry_date: expiry,
            accepted_date: None,
        }
    }

    #[test]
    fn expiring_in_two_days_is_flagged() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 20).expect("valid date");
        let offer = offer(NaiveDate::from_ymd_opt(2026, 1, 22));
        assert!(offer.is_expiring_soon(today));
    }

    #[test]
    fn expiring_in_three_days_is_not_flagged() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 20).expect("valid date");
        let offer = offer(NaiveDate::from_ymd_opt(2026, 1, 23));
        assert!(!offer.is_expiring_soon(today));
    }

    #[test]
    fn past_expiry_is_expired_not_expiring() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 20).expect("valid date");
        let offer = offer(NaiveDate::from_ymd_opt(2026, 1, 19));
        assert!(!offer.is_expiring_soon(today));
    }

    #[test]
    fn offers_without_expiry_never_flag() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 20).expect("valid date");
        assert!(!offer(None).is_expiring_soon(today));
    }
}
