use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use log::{debug, info};
use std::sync::Arc;

use shared::UNSELECTED_DISTRICT;

use crate::domain::commands::{
    RecordDonationCommand, RecordDonationResult, RegisterDonorCommand, RegisterDonorResult,
    SearchDonorsCommand, SearchDonorsResult,
};
use crate::domain::eligibility;
use crate::domain::error::DonorError;
use crate::domain::models::donor::{Donor, DonorView, NewDonor};
use crate::storage::traits::DonorStorage;

/// Service for registering donors, searching the directory, and recording
/// donations.
#[derive(Clone)]
pub struct DonorService {
    donor_repository: Arc<dyn DonorStorage>,
}

impl DonorService {
    pub fn new(donor_repository: Arc<dyn DonorStorage>) -> Self {
        Self { donor_repository }
    }

    /// Register a new donor.
    ///
    /// Every successful registration creates a fresh directory document;
    /// there is no duplicate detection by name or contact number.
    pub async fn register_donor(
        &self,
        command: RegisterDonorCommand,
    ) -> Result<RegisterDonorResult, DonorError> {
        info!(
            "Registering donor: name={}, blood_type={}, district={}",
            command.name, command.blood_type, command.district
        );

        let new_donor = validate_registration(&command)?;

        let donor = self
            .donor_repository
            .create_donor(&new_donor)
            .await
            .map_err(DonorError::Storage)?;

        info!("Registered donor {} with ID {}", donor.name, donor.id);

        Ok(RegisterDonorResult { donor })
    }

    /// Search the directory for donors matching a district and blood type,
    /// ranked eligible-first at the current instant.
    pub async fn search_donors(
        &self,
        command: SearchDonorsCommand,
    ) -> Result<SearchDonorsResult, DonorError> {
        if command.district == UNSELECTED_DISTRICT {
            return Err(DonorError::MissingField("district"));
        }

        debug!(
            "Searching donors: district={}, blood_type={}",
            command.district, command.blood_type
        );

        let matches = self
            .donor_repository
            .query_by_district_and_blood_type(&command.district, command.blood_type)
            .await
            .map_err(DonorError::Storage)?;

        let donors = rank_eligible_first(matches, Utc::now());

        info!(
            "Search for {} / {} returned {} donors",
            command.district,
            command.blood_type,
            donors.len()
        );

        Ok(SearchDonorsResult { donors })
    }

    /// Record that a donor donated now.
    ///
    /// Unconditional trust-the-caller transition: the donor becomes
    /// ineligible with a fresh release instant 63 days out, whatever their
    /// prior state. Races between two callers are last-write-wins at the
    /// storage layer.
    pub async fn record_donation(
        &self,
        command: RecordDonationCommand,
    ) -> Result<RecordDonationResult, DonorError> {
        info!("Recording donation for donor {}", command.donor_id);

        let donor = self
            .donor_repository
            .get_donor(&command.donor_id)
            .await
            .map_err(DonorError::Storage)?
            .ok_or_else(|| DonorError::DonorNotFound(command.donor_id.clone()))?;

        let now = Utc::now();
        let updated = donor.record_donation(now);

        self.donor_repository
            .update_donation_dates(&updated.id, now, eligibility::next_eligible_date(now))
            .await
            .map_err(DonorError::Storage)?;

        info!(
            "Donor {} marked as donated; next eligible {}",
            updated.id,
            eligibility::next_eligible_date(now).to_rfc3339()
        );

        Ok(RecordDonationResult { donor: updated })
    }
}

/// Validate a registration form and normalize it into a storable donor.
///
/// Checks run in form order and the first failure wins: name, contact,
/// district, then the optional donation date.
pub fn validate_registration(command: &RegisterDonorCommand) -> Result<NewDonor, DonorError> {
    let name = command.name.trim();
    if name.is_empty() {
        return Err(DonorError::MissingField("name"));
    }

    let contact_number = command.contact_number.trim();
    if contact_number.is_empty() {
        return Err(DonorError::MissingField("contact"));
    }

    if command.district == UNSELECTED_DISTRICT {
        return Err(DonorError::MissingField("district"));
    }

    let last_donation_date = match command.last_donation_date.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(text) => Some(parse_donation_date(text)?),
    };

    Ok(NewDonor {
        name: name.to_string(),
        blood_type: command.blood_type,
        district: command.district.clone(),
        contact_number: contact_number.to_string(),
        next_eligible_date: last_donation_date.map(eligibility::next_eligible_date),
        last_donation_date,
    })
}

/// Parse a form-provided donation date: RFC 3339, or a bare YYYY-MM-DD read
/// as midnight UTC.
fn parse_donation_date(text: &str) -> Result<DateTime<Utc>, DonorError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Ok(instant.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| DonorError::InvalidDate)
}

/// Project query matches into search rows and order them eligible-first.
///
/// The sort is stable and uses no secondary key: within the eligible group
/// and within the ineligible group, donors keep the order the query returned
/// them in.
pub fn rank_eligible_first(matches: Vec<Donor>, now: DateTime<Utc>) -> Vec<DonorView> {
    let mut views: Vec<DonorView> = matches.iter().map(|donor| donor.to_view(now)).collect();
    views.sort_by_key(|view| !view.eligible);
    views
}
