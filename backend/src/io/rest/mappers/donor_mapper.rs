use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::domain::models::donor::{Donor as DomainDonor, DonorView as DomainDonorView};
use shared::{Donor as SharedDonor, DonorView as SharedDonorView, SearchDonorsResponse};

/// Mapper to convert between shared donor DTOs and domain donor models.
///
/// DTOs carry dates as RFC 3339 strings; the domain works in chrono types.
pub struct DonorMapper;

impl DonorMapper {
    /// Converts a shared donor DTO to a domain donor model.
    pub fn to_domain(dto: SharedDonor) -> Result<DomainDonor> {
        let last_donation_date = dto
            .last_donation_date
            .as_deref()
            .map(parse_instant)
            .transpose()
            .context("Failed to parse last_donation_date from donor DTO")?;
        let next_eligible_date = dto
            .next_eligible_date
            .as_deref()
            .map(parse_instant)
            .transpose()
            .context("Failed to parse next_eligible_date from donor DTO")?;
        let created_at =
            parse_instant(&dto.created_at).context("Failed to parse created_at from donor DTO")?;

        Ok(DomainDonor {
            id: dto.id,
            name: dto.name,
            blood_type: dto.blood_type,
            district: dto.district,
            contact_number: dto.contact_number,
            last_donation_date,
            next_eligible_date,
            created_at,
        })
    }

    /// Converts a domain donor model to a shared donor DTO.
    pub fn to_dto(domain: DomainDonor) -> SharedDonor {
        SharedDonor {
            id: domain.id,
            name: domain.name,
            blood_type: domain.blood_type,
            district: domain.district,
            contact_number: domain.contact_number,
            last_donation_date: domain.last_donation_date.map(|d| d.to_rfc3339()),
            next_eligible_date: domain.next_eligible_date.map(|d| d.to_rfc3339()),
            created_at: domain.created_at.to_rfc3339(),
        }
    }

    pub fn to_view_dto(view: DomainDonorView) -> SharedDonorView {
        SharedDonorView {
            id: view.id,
            name: view.name,
            contact_number: view.contact_number,
            last_donation_date: view.last_donation_date.map(|d| d.to_rfc3339()),
            next_eligible_date: view.next_eligible_date.map(|d| d.to_rfc3339()),
            eligible: view.eligible,
        }
    }

    pub fn to_search_response(views: Vec<DomainDonorView>) -> SearchDonorsResponse {
        SearchDonorsResponse {
            donors: views.into_iter().map(Self::to_view_dto).collect(),
        }
    }
}

fn parse_instant(text: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(text)?.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::BloodType;

    fn sample_dto() -> SharedDonor {
        SharedDonor {
            id: "donor-1".to_string(),
            name: "Ravi".to_string(),
            blood_type: BloodType::APositive,
            district: "Chennai".to_string(),
            contact_number: "+911234567890".to_string(),
            last_donation_date: Some("2025-09-01T12:00:00+00:00".to_string()),
            next_eligible_date: Some("2025-11-03T12:00:00+00:00".to_string()),
            created_at: "2025-08-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_dto_domain_round_trip() {
        let dto = sample_dto();
        let domain = DonorMapper::to_domain(dto.clone()).unwrap();
        assert_eq!(DonorMapper::to_dto(domain), dto);
    }

    #[test]
    fn test_to_domain_handles_absent_dates() {
        let mut dto = sample_dto();
        dto.last_donation_date = None;
        dto.next_eligible_date = None;

        let domain = DonorMapper::to_domain(dto).unwrap();
        assert!(domain.last_donation_date.is_none());
        assert!(domain.next_eligible_date.is_none());
    }

    #[test]
    fn test_to_domain_rejects_bad_timestamp() {
        let mut dto = sample_dto();
        dto.created_at = "yesterday".to_string();
        assert!(DonorMapper::to_domain(dto).is_err());
    }
}
