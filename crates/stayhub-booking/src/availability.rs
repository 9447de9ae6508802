//! Availability and user-conflict checks.
//!
//! Both checks are pure functions over a snapshot of existing stay ranges;
//! fetching the relevant ranges is the repository's job. Every overlap
//! decision in the application goes through [`StayRange::overlaps`], and
//! every reservation in the snapshot is examined.

use stayhub_entity::reservation::StayRange;

/// Whether a room is free for the requested range.
///
/// Returns `true` iff `requested` overlaps none of the room's existing
/// reservations. A room with no reservations is always available.
pub fn is_available(requested: &StayRange, existing: &[StayRange]) -> bool {
    existing.iter().all(|r| !requested.overlaps(r))
}

/// Whether a guest already holds a reservation overlapping the range.
///
/// `existing` is the guest's reservations across every room; one guest
/// cannot hold two simultaneous bookings regardless of room.
pub fn has_conflict(requested: &StayRange, existing: &[StayRange]) -> bool {
    existing.iter().any(|r| requested.overlaps(r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range(in_day: u32, out_day: u32) -> StayRange {
        StayRange::new(
            NaiveDate::from_ymd_opt(2022, 9, in_day).unwrap(),
            NaiveDate::from_ymd_opt(2022, 9, out_day).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_snapshot_is_available() {
        assert!(is_available(&range(1, 5), &[]));
        assert!(!has_conflict(&range(1, 5), &[]));
    }

    #[test]
    fn test_back_to_back_turnover_allowed() {
        let existing = vec![range(1, 5)];
        assert!(is_available(&range(5, 9), &existing));
    }

    #[test]
    fn test_overlap_blocks_availability() {
        let existing = vec![range(1, 5)];
        assert!(!is_available(&range(4, 9), &existing));
    }

    #[test]
    fn test_every_reservation_is_examined() {
        // The first reservation does not overlap; a later one does. A scan
        // that stopped at the first entry would wrongly report the room free.
        let existing = vec![range(1, 3), range(10, 20)];
        assert!(!is_available(&range(12, 14), &existing));
        assert!(has_conflict(&range(12, 14), &existing));
    }

    #[test]
    fn test_conflict_iff_some_overlap() {
        let existing = vec![range(1, 3), range(5, 8)];
        assert!(!has_conflict(&range(3, 5), &existing));
        assert!(has_conflict(&range(7, 9), &existing));
    }

    #[test]
    fn test_availability_and_conflict_are_duals() {
        let existing = vec![range(1, 4), range(6, 9)];
        for (a, b) in [(1, 2), (4, 6), (8, 12), (20, 25)] {
            let requested = range(a, b);
            assert_eq!(
                is_available(&requested, &existing),
                !has_conflict(&requested, &existing)
            );
        }
    }
}
