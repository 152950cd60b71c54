//! # IO Module
//!
//! Interface layer exposing the donor directory to external consumers.
//! Currently a single REST surface; the domain layer underneath is
//! transport-agnostic.

pub mod rest;
