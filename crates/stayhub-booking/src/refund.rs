//! Refund calculation for cancelled reservations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stayhub_entity::reservation::StayRange;

/// The refund owed for a cancellation, relative to a given day.
///
/// Not persisted; computed for display before the guest confirms and again
/// when the cancellation is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundQuote {
    /// Nights whose cost is returned to the guest.
    pub refundable_nights: i64,
    /// The stay has already fully elapsed; no refund applies. When set, the
    /// amount is zero and the caller renders the no-refund message instead
    /// of a sum.
    pub delayed: bool,
    /// Refund amount in integer currency units.
    pub amount: i64,
}

/// Quote the refund for cancelling `range` on `today`.
///
/// Policy, in precedence order:
/// 1. before arrival — every night is refunded;
/// 2. on the arrival day — one night is forfeited (never going negative);
/// 3. after check-out — nothing is refunded and the quote is delayed;
/// 4. mid-stay — the nights remaining from `today` are refunded.
pub fn quote(today: NaiveDate, range: &StayRange, nightly_price: i64) -> RefundQuote {
    let (refundable_nights, delayed) = if today < range.check_in {
        (range.nights(), false)
    } else if today == range.check_in {
        ((range.nights() - 1).max(0), false)
    } else if today > range.check_out {
        (0, true)
    } else {
        ((range.check_out - today).num_days(), false)
    };

    RefundQuote {
        refundable_nights,
        delayed,
        amount: refundable_nights * nightly_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NIGHTLY: i64 = 700;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(check_in: NaiveDate, check_out: NaiveDate) -> StayRange {
        StayRange::new(check_in, check_out).unwrap()
    }

    #[test]
    fn test_cancel_before_arrival_refunds_everything() {
        let r = range(date(2022, 9, 17), date(2022, 9, 27));
        let q = quote(date(2022, 9, 10), &r, NIGHTLY);
        assert_eq!(q.refundable_nights, 10);
        assert!(!q.delayed);
        assert_eq!(q.amount, 7000);
    }

    #[test]
    fn test_cancel_on_arrival_day_forfeits_one_night() {
        let r = range(date(2022, 9, 17), date(2022, 9, 27));
        let q = quote(date(2022, 9, 17), &r, NIGHTLY);
        assert_eq!(q.refundable_nights, 9);
        assert!(!q.delayed);
        assert_eq!(q.amount, 6300);
    }

    #[test]
    fn test_one_night_stay_cancelled_on_arrival_day_clamps_to_zero() {
        let r = range(date(2022, 9, 27), date(2022, 9, 28));
        let q = quote(date(2022, 9, 27), &r, NIGHTLY);
        assert_eq!(q.refundable_nights, 0);
        assert!(!q.delayed);
        assert_eq!(q.amount, 0);
    }

    #[test]
    fn test_mid_stay_cancellation_refunds_remaining_nights() {
        let r = range(date(2022, 9, 17), date(2022, 9, 27));
        let q = quote(date(2022, 9, 20), &r, NIGHTLY);
        assert_eq!(q.refundable_nights, 7);
        assert!(!q.delayed);
        assert_eq!(q.amount, 7 * NIGHTLY);
    }

    #[test]
    fn test_cancel_on_check_out_day_refunds_nothing_but_is_not_delayed() {
        let r = range(date(2022, 9, 17), date(2022, 9, 27));
        let q = quote(date(2022, 9, 27), &r, NIGHTLY);
        assert_eq!(q.refundable_nights, 0);
        assert!(!q.delayed);
        assert_eq!(q.amount, 0);
    }

    #[test]
    fn test_cancel_after_stay_elapsed_is_delayed() {
        let r = range(date(2022, 9, 17), date(2022, 9, 27));
        let q = quote(date(2022, 10, 3), &r, NIGHTLY);
        assert_eq!(q.refundable_nights, 0);
        assert!(q.delayed);
        assert_eq!(q.amount, 0);
    }
}
