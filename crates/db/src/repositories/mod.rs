//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod donation_request_repo;

pub use donation_request_repo::DonationRequestRepo;
