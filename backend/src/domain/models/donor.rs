//! Domain model for registered blood donors.

use chrono::{DateTime, Utc};
use shared::BloodType;

use crate::domain::eligibility;

/// A donor record as held by the directory.
///
/// The two donation-date fields move together: `next_eligible_date` is present
/// exactly when `last_donation_date` is, and is always 63 calendar days after
/// it. No write path sets one without the other.
#[derive(Debug, Clone, PartialEq)]
pub struct Donor {
    pub id: String,
    pub name: String,
    pub blood_type: BloodType,
    pub district: String,
    pub contact_number: String,
    pub last_donation_date: Option<DateTime<Utc>>,
    pub next_eligible_date: Option<DateTime<Utc>>,
    /// Assigned by the directory at creation, never mutated afterwards
    pub created_at: DateTime<Utc>,
}

/// A validated donor that has not been persisted yet.
///
/// Produced by registration validation; the directory assigns `id` and
/// `created_at` when the document is created.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDonor {
    pub name: String,
    pub blood_type: BloodType,
    pub district: String,
    pub contact_number: String,
    pub last_donation_date: Option<DateTime<Utc>>,
    pub next_eligible_date: Option<DateTime<Utc>>,
}

/// Search-result projection of a donor, classified at a fixed instant.
#[derive(Debug, Clone, PartialEq)]
pub struct DonorView {
    pub id: String,
    pub name: String,
    pub contact_number: String,
    pub last_donation_date: Option<DateTime<Utc>>,
    pub next_eligible_date: Option<DateTime<Utc>>,
    pub eligible: bool,
}

impl Donor {
    /// Project this donor into a search row, classifying eligibility at `now`.
    pub fn to_view(&self, now: DateTime<Utc>) -> DonorView {
        DonorView {
            id: self.id.clone(),
            name: self.name.clone(),
            contact_number: self.contact_number.clone(),
            last_donation_date: self.last_donation_date,
            next_eligible_date: self.next_eligible_date,
            eligible: eligibility::is_eligible(self.next_eligible_date, now),
        }
    }

    /// Apply a donation at `now`.
    ///
    /// Unconditional: no guard against an ineligible donor donating again.
    /// Both date fields are replaced together, which is what keeps the
    /// paired-fields invariant.
    pub fn record_donation(&self, now: DateTime<Utc>) -> Donor {
        Donor {
            last_donation_date: Some(now),
            next_eligible_date: Some(eligibility::next_eligible_date(now)),
            ..self.clone()
        }
    }
}
