//! # Storage Module
//!
//! The donor directory collaborator: persistence for donor documents.
//!
//! The domain layer depends only on the [`traits::DonorStorage`] abstraction;
//! the concrete backend here is a JSON document-per-file store, which can be
//! swapped for a hosted document database client without touching domain
//! logic.
//!
//! ## Key Responsibilities
//!
//! - **Document creation**: assigning donor ids and `created_at` server-side
//! - **Equality queries**: the two-predicate district/blood-type lookup
//! - **Partial updates**: merging the paired donation-date fields into an
//!   existing document without touching other fields

pub mod json;
pub mod traits;

pub use traits::*;
