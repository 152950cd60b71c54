//! Command and result structs for donor operations.
//!
//! Every service operation takes an explicit, immutable command struct and
//! returns a result struct, so callers (REST handlers, tests, a future UI)
//! never share mutable form state with the domain layer.

use shared::BloodType;

use crate::domain::models::donor::{Donor, DonorView};

/// Input to donor registration, exactly as captured from the form.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterDonorCommand {
    pub name: String,
    pub blood_type: BloodType,
    pub district: String,
    pub contact_number: String,
    /// Raw form text; empty or absent means "never donated"
    pub last_donation_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterDonorResult {
    pub donor: Donor,
}

/// Input to a donor search: exact-match district and blood type.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchDonorsCommand {
    pub district: String,
    pub blood_type: BloodType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchDonorsResult {
    /// Ranked eligible-first, encounter order preserved within each group
    pub donors: Vec<DonorView>,
}

/// Marks a donor as having donated now.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDonationCommand {
    pub donor_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordDonationResult {
    pub donor: Donor,
}
