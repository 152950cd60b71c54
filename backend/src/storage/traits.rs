//! # Storage Traits
//!
//! Abstraction over the donor directory so the domain layer can work with
//! different document-store backends without modification.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::BloodType;

use crate::domain::models::donor::{Donor, NewDonor};

/// Trait defining the interface the donor directory must provide.
///
/// From the domain's perspective every operation is an atomic
/// request/response call that either succeeds with a value or fails with an
/// error; retries, timeouts, and cancellation are the backend's concern.
#[async_trait]
pub trait DonorStorage: Send + Sync {
    /// Persist a new donor document. The directory assigns the identifier
    /// and `created_at`; both are returned on the stored record.
    async fn create_donor(&self, donor: &NewDonor) -> Result<Donor>;

    /// Retrieve a specific donor by ID
    async fn get_donor(&self, donor_id: &str) -> Result<Option<Donor>>;

    /// Exact-match equality lookup on both fields (case-sensitive), returned
    /// in creation order
    async fn query_by_district_and_blood_type(
        &self,
        district: &str,
        blood_type: BloodType,
    ) -> Result<Vec<Donor>>;

    /// Merge exactly the two donation-date fields into an existing donor
    /// document, leaving every other field untouched. The two fields are
    /// only ever written together.
    async fn update_donation_dates(
        &self,
        donor_id: &str,
        last_donation_date: DateTime<Utc>,
        next_eligible_date: DateTime<Utc>,
    ) -> Result<()>;
}
