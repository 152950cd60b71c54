pub mod donor_apis;
pub mod mappers;
