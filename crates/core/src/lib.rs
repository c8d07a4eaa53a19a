//! # HMS Core
//!
//! Domain layer for the hospital administration client.
//!
//! This crate contains the pieces every other crate builds on:
//! - Entity records (patients, physicians, departments, nurses, procedures,
//!   appointments, certifications, affiliations) carrying the backend's wire
//!   field names
//! - Startup configuration resolved once and passed into services
//! - The session object holding the bearer token and the forced-logout
//!   navigation hook
//! - Identifier lookup maps for resolving foreign keys to display rows
//!
//! **No HTTP concerns**: request dispatch and endpoint routing belong in
//! `api-client`; view state machines belong in `views`.

pub mod affiliation;
pub mod appointment;
pub mod certification;
pub mod config;
pub mod department;
pub mod error;
pub mod lookup;
pub mod nurse;
pub mod patient;
pub mod physician;
pub mod procedure;
pub mod session;

pub use affiliation::Affiliation;
pub use appointment::Appointment;
pub use certification::Certification;
pub use config::ClientConfig;
pub use department::Department;
pub use error::{ConfigError, ConfigResult};
pub use hms_types::{NonEmptyText, TextError};
pub use lookup::index_by;
pub use nurse::Nurse;
pub use patient::Patient;
pub use physician::{ParsePositionError, Physician, Position};
pub use procedure::Procedure;
pub use session::{FileTokenStore, MemoryTokenStore, Navigator, Session, TokenStore};
