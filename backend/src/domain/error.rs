use thiserror::Error;

/// Errors surfaced by donor operations.
///
/// All of these are recoverable: validation failures send the caller back to
/// the form with its state intact, and storage failures surface as a generic
/// notice without the domain layer retrying anything.
#[derive(Debug, Error)]
pub enum DonorError {
    /// A required form field is empty or still at its placeholder value
    #[error("Please fill in the {0} field")]
    MissingField(&'static str),

    /// The last-donation-date text did not parse
    #[error("Invalid last donation date. Use YYYY-MM-DD or leave blank.")]
    InvalidDate,

    /// The donation target does not exist in the directory
    #[error("Donor not found: {0}")]
    DonorNotFound(String),

    /// Any failure from the donor directory collaborator
    #[error("Donor directory error: {0}")]
    Storage(#[from] anyhow::Error),
}
