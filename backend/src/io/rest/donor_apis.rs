//! # REST API for Donor Management
//!
//! Endpoints for registering donors, searching eligible donors, and
//! recording donations.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::{error, info};

use crate::domain::commands::{RecordDonationCommand, RegisterDonorCommand, SearchDonorsCommand};
use crate::domain::error::DonorError;
use crate::io::rest::mappers::donor_mapper::DonorMapper;
use crate::AppState;
use shared::{
    RecordDonationResponse, RegisterDonorRequest, RegisterDonorResponse, SearchDonorsRequest,
};

/// Register a new donor
pub async fn register_donor(
    State(state): State<AppState>,
    Json(request): Json<RegisterDonorRequest>,
) -> impl IntoResponse {
    info!("POST /api/donors - request: {:?}", request);

    let command = RegisterDonorCommand {
        name: request.name,
        blood_type: request.blood_type,
        district: request.district,
        contact_number: request.contact_number,
        last_donation_date: request.last_donation_date,
    };

    match state.donor_service.register_donor(command).await {
        Ok(result) => {
            let response = RegisterDonorResponse {
                donor: DonorMapper::to_dto(result.donor),
                success_message: "Donor saved successfully.".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to register donor: {}", e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

/// Search donors by district and blood type, eligible donors first
pub async fn search_donors(
    State(state): State<AppState>,
    Query(request): Query<SearchDonorsRequest>,
) -> impl IntoResponse {
    info!(
        "GET /api/donors/search - district: {}, blood_type: {}",
        request.district, request.blood_type
    );

    let command = SearchDonorsCommand {
        district: request.district,
        blood_type: request.blood_type,
    };

    match state.donor_service.search_donors(command).await {
        Ok(result) => {
            let response = DonorMapper::to_search_response(result.donors);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to search donors: {}", e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

/// Mark a donor as having donated now
pub async fn record_donation(
    State(state): State<AppState>,
    Path(donor_id): Path<String>,
) -> impl IntoResponse {
    info!("POST /api/donors/{}/donations", donor_id);

    let command = RecordDonationCommand { donor_id };

    match state.donor_service.record_donation(command).await {
        Ok(result) => {
            let response = RecordDonationResponse {
                donor: DonorMapper::to_dto(result.donor),
                success_message: "Donor marked as donated. They will be ineligible for 9 weeks."
                    .to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to record donation: {}", e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

/// Map domain errors onto HTTP statuses: validation problems are the
/// caller's to fix, unknown donors are 404, directory failures are 500.
fn status_for(error: &DonorError) -> StatusCode {
    match error {
        DonorError::MissingField(_) | DonorError::InvalidDate => StatusCode::BAD_REQUEST,
        DonorError::DonorNotFound(_) => StatusCode::NOT_FOUND,
        DonorError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&DonorError::MissingField("name")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_for(&DonorError::InvalidDate), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(&DonorError::DonorNotFound("x".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&DonorError::Storage(anyhow::anyhow!("down"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
