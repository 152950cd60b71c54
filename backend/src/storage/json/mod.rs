//! JSON document-per-file implementation of the donor directory.

pub mod connection;
pub mod donor_repository;

pub use connection::JsonConnection;
pub use donor_repository::JsonDonorRepository;
