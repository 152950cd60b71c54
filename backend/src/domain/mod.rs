//! # Domain Module
//!
//! Business logic for the blood donor directory.
//!
//! ## Module Organization
//!
//! - **eligibility**: The 63-day donation interval and the eligibility gate
//! - **donor_service**: Registration, search-and-rank, and donation recording
//! - **commands**: Immutable command/result structs passed into the service
//! - **models**: Domain entities, typed with chrono rather than wire strings
//! - **error**: The recoverable error kinds donor operations can produce
//!
//! The domain layer never touches the wire format or the concrete storage
//! backend; it talks to the directory only through
//! [`crate::storage::traits::DonorStorage`].

pub mod commands;
pub mod donor_service;
pub mod eligibility;
pub mod error;
pub mod models;

pub use commands::*;
pub use donor_service::*;
pub use error::*;
