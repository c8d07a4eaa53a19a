//! Composite list pages.
//!
//! Pages that need more than one plain collection fetch: display joins over
//! concurrently fetched collections, selector-scoped secondary fetches, and
//! the two-step department delete. Entities without any of that use
//! [`crate::TablePage`] directly.

pub mod affiliations;
pub mod appointments;
pub mod certifications;
pub mod departments;

pub use affiliations::{AffiliationRow, AffiliationsPage, DepartmentRosterPage};
pub use appointments::{AppointmentRow, AppointmentsPage};
pub use certifications::CertificationsPage;
pub use departments::{DeleteStep, DepartmentsPage};
