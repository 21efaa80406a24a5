//! Expiry status derivation
//!
//! End dates are compared at the start of the local day, so a subscription
//! ending today is already expired once the day has begun.

use crate::constants::NEAR_EXPIRY_DAYS;
use crate::types::SubscriptionStatus;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

fn end_instant(end_date: NaiveDate) -> NaiveDateTime {
    end_date.and_time(NaiveTime::MIN)
}

/// True once `now` is past the start of the end date
pub fn is_expired(end_date: NaiveDate, now: NaiveDateTime) -> bool {
    now > end_instant(end_date)
}

/// Whole days left until the end date, rounded up
pub fn days_until(end_date: NaiveDate, now: NaiveDateTime) -> i64 {
    let millis = (end_instant(end_date) - now).num_milliseconds();
    // ceil(millis / day) for both signs
    -(-millis).div_euclid(MILLIS_PER_DAY)
}

/// Between 1 and NEAR_EXPIRY_DAYS days left, inclusive
pub fn is_nearing_expiry(end_date: NaiveDate, now: NaiveDateTime) -> bool {
    let days = days_until(end_date, now);
    (1..=NEAR_EXPIRY_DAYS).contains(&days)
}

impl SubscriptionStatus {
    pub fn evaluate(end_date: NaiveDate, now: NaiveDateTime) -> Self {
        if is_expired(end_date, now) {
            SubscriptionStatus::Expired
        } else if is_nearing_expiry(end_date, now) {
            SubscriptionStatus::NearingExpiry
        } else {
            SubscriptionStatus::Active
        }
    }
}
