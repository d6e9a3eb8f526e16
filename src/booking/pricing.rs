use chrono::{DateTime, Utc};

/// Number of whole rental days charged for an interval. Any started day
/// counts, and a rental is never shorter than one day.
pub fn rental_days(pickup_at: DateTime<Utc>, dropoff_at: DateTime<Utc>) -> i64 {
    let duration = dropoff_at - pickup_at;
    let days = duration.num_days();
    let has_remainder = duration - chrono::Duration::days(days) > chrono::Duration::zero();
    (days + i64::from(has_remainder)).max(1)
}

/// Total in cents: days times daily rate, minus an optional percent discount.
pub fn total_cents(days: i64, daily_rate_cents: i64, discount_percent: Option<i32>) -> i64 {
    let gross = days * daily_rate_cents;
    match discount_percent {
        Some(pct) => gross - gross * i64::from(pct.clamp(0, 100)) / 100,
        None => gross,
    }
}
