//! # HMS API client
//!
//! Typed client layer for the hospital administration REST API.
//!
//! Two layers live here:
//!
//! - [`Transport`]: shared request dispatch — base URL, default JSON headers,
//!   bearer-token injection from the injected [`hms_core::Session`], a 30s
//!   timeout, and centralized 401 handling (token purge + `/login`
//!   navigation).
//! - One resource client per entity ([`PatientApi`], [`PhysicianApi`], ...):
//!   narrow, purpose-built functions mirroring the backend's field-scoped
//!   endpoints rather than a generic CRUD interface.
//!
//! All calls return [`ClientResult`]; every failure mode collapses into the
//! uniform [`Fault`]. There are no automatic retries and no client-generated
//! request ids: re-submitting a create can duplicate a record unless the
//! server enforces uniqueness.

pub mod affiliated_with;
pub mod appointment;
pub mod department;
pub mod error;
pub mod nurse;
pub mod patient;
pub mod physician;
pub mod procedure;
pub mod trained_in;
pub mod transport;

pub use affiliated_with::AffiliatedWithApi;
pub use appointment::AppointmentApi;
pub use department::DepartmentApi;
pub use error::{ClientResult, Fault};
pub use nurse::NurseApi;
pub use patient::PatientApi;
pub use physician::PhysicianApi;
pub use procedure::ProcedureApi;
pub use trained_in::TrainedInApi;
pub use transport::Transport;

#[cfg(test)]
pub(crate) mod test_support;
