//! Donor matching and gamification engine for blood donation coordination.
//!
//! The crate owns the pure business rules of the platform: blood-type
//! compatibility, ranked donor matching, donation eligibility, and the
//! points/badge scheme. Persistence and transport stay with the caller,
//! which talks to the engine through the repository and audit seams in
//! [`matching::repository`].

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
