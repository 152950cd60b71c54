//! Donor eligibility rules.
//!
//! A donor must wait 63 days (9 weeks) between whole-blood donations. The
//! release instant is derived from the most recent donation and never stored
//! independently of it.

use chrono::{DateTime, Days, Utc};

/// Mandatory waiting period between donations, in calendar days.
pub const DONATION_INTERVAL_DAYS: u64 = 63;

/// Earliest instant a donor may donate again after donating at `donation`.
///
/// Calendar-day addition in UTC; the time-of-day component carries over
/// unchanged.
pub fn next_eligible_date(donation: DateTime<Utc>) -> DateTime<Utc> {
    donation + Days::new(DONATION_INTERVAL_DAYS)
}

/// Whether a donor may donate at `now`.
///
/// Donors with no release instant (never donated, or the record predates
/// tracking) are always eligible. Otherwise the gate is inclusive: a donor
/// becomes eligible the instant `now` reaches the release instant.
pub fn is_eligible(next_eligible: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match next_eligible {
        None => true,
        Some(release) => release <= now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_next_eligible_is_63_days_out() {
        let donation = instant("2025-09-01T12:00:00Z");
        let release = next_eligible_date(donation);
        assert_eq!(release, instant("2025-11-03T12:00:00Z"));
        assert_eq!((release.date_naive() - donation.date_naive()).num_days(), 63);
    }

    #[test]
    fn test_next_eligible_preserves_time_of_day() {
        let donation = Utc.with_ymd_and_hms(2025, 3, 15, 23, 59, 58).unwrap();
        let release = next_eligible_date(donation);
        assert_eq!(release.time(), donation.time());
        assert_eq!((release.date_naive() - donation.date_naive()).num_days(), 63);
    }

    #[test]
    fn test_next_eligible_crosses_leap_february() {
        let donation = instant("2024-01-15T08:30:00Z");
        assert_eq!(next_eligible_date(donation), instant("2024-03-18T08:30:00Z"));
    }

    #[test]
    fn test_eligible_when_never_donated() {
        assert!(is_eligible(None, Utc::now()));
    }

    #[test]
    fn test_eligible_exactly_at_release_instant() {
        let release = instant("2025-11-03T12:00:00Z");
        assert!(is_eligible(Some(release), release));
    }

    #[test]
    fn test_eligible_after_release_instant() {
        let release = instant("2025-11-03T12:00:00Z");
        assert!(is_eligible(Some(release), instant("2025-11-03T12:00:01Z")));
    }

    #[test]
    fn test_ineligible_before_release_instant() {
        let release = instant("2025-11-03T12:00:00Z");
        assert!(!is_eligible(Some(release), instant("2025-11-03T11:59:59Z")));
    }
}
