//! # Blood Donor Directory Backend
//!
//! Registers blood donors and finds eligible donors by district and blood
//! type, backed by a document store holding one record per donor.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! Consumers (form UI, curl, tests)
//!     ↓
//! IO Layer (REST handlers, DTO mappers)
//!     ↓
//! Domain Layer (eligibility rules, validation, DonorService)
//!     ↓
//! Storage Layer (DonorStorage trait, JSON document store)
//! ```

pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use log::info;
use tower_http::cors::{Any, CorsLayer};

use crate::domain::donor_service::DonorService;
use crate::storage::json::{JsonConnection, JsonDonorRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub donor_service: DonorService,
}

/// Initialize the backend with all required services
pub fn initialize_backend() -> anyhow::Result<AppState> {
    info!("Setting up donor directory storage");
    let connection = JsonConnection::new_default()?;
    let repository = JsonDonorRepository::new(connection);

    info!("Setting up domain services");
    let donor_service = DonorService::new(Arc::new(repository));

    Ok(AppState {
        donor_service,
    })
}

/// Build the REST router with CORS configured for local form clients
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/donors", post(io::rest::donor_apis::register_donor))
        .route("/donors/search", get(io::rest::donor_apis::search_donors))
        .route(
            "/donors/:donor_id/donations",
            post(io::rest::donor_apis::record_donation),
        );

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(state)
}
