use chrono::{DateTime, NaiveDate, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Whole days from `from` until `until`; negative when `until` is in the past.
pub fn days_until(from: NaiveDate, until: NaiveDate) -> i64 {
    (until - from).num_days()
}
