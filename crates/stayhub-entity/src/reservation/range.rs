//! Stay range value object.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;

/// A half-open `[check_in, check_out)` date interval representing a stay.
///
/// The check-out day is not occupied, so a range ending on a given day and
/// a range starting on that same day do not overlap. This is what allows
/// same-day turnover of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StayRange {
    /// Arrival date (first occupied night).
    pub check_in: NaiveDate,
    /// Departure date (not occupied).
    pub check_out: NaiveDate,
}

impl StayRange {
    /// Build a validated range. A same-day or inverted range is rejected.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> AppResult<Self> {
        if check_in >= check_out {
            return Err(AppError::invalid_range(format!(
                "Check-in {check_in} must be before check-out {check_out}"
            )));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Number of nights in the stay.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Canonical half-open interval overlap test.
    ///
    /// Two ranges overlap iff each starts before the other ends. Back-to-back
    /// ranges (one's check-out equals the other's check-in) do not overlap.
    pub fn overlaps(&self, other: &StayRange) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

impl std::fmt::Display for StayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.check_in, self.check_out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(a: NaiveDate, b: NaiveDate) -> StayRange {
        StayRange::new(a, b).unwrap()
    }

    #[test]
    fn test_rejects_same_day_range() {
        let d = date(2022, 9, 27);
        assert!(StayRange::new(d, d).is_err());
    }

    #[test]
    fn test_rejects_inverted_range() {
        assert!(StayRange::new(date(2022, 9, 28), date(2022, 9, 27)).is_err());
    }

    #[test]
    fn test_nights() {
        let r = range(date(2022, 9, 17), date(2022, 9, 27));
        assert_eq!(r.nights(), 10);
        let one = range(date(2022, 9, 27), date(2022, 9, 28));
        assert_eq!(one.nights(), 1);
    }

    #[test]
    fn test_back_to_back_ranges_do_not_overlap() {
        let a = range(date(2022, 9, 1), date(2022, 9, 5));
        let b = range(date(2022, 9, 5), date(2022, 9, 9));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_partial_overlap() {
        let a = range(date(2022, 9, 1), date(2022, 9, 6));
        let b = range(date(2022, 9, 5), date(2022, 9, 9));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = range(date(2022, 9, 1), date(2022, 9, 30));
        let inner = range(date(2022, 9, 10), date(2022, 9, 12));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_identical_ranges_overlap() {
        let a = range(date(2022, 9, 1), date(2022, 9, 5));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_disjoint_with_gap() {
        let a = range(date(2022, 9, 1), date(2022, 9, 3));
        let b = range(date(2022, 9, 10), date(2022, 9, 12));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }
}
