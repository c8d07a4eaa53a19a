//! Per-entity edit forms.
//!
//! Each form owns its field values and binds the shared [`crate::FormShell`]
//! state machine to its entity's resource client. Create mode submits one
//! full-record call; update mode submits the entity's field-scoped calls in
//! a fixed order, skipping fields equal to the fetched original, and stops
//! at the first failure with a per-field report.
//!
//! Fields without an update endpoint (identifiers, and per entity the
//! subset the backend treats as fixed — an appointment's participants and
//! time window, a certification's issue date) are carried for display but
//! never submitted in update mode; a renderer shows them read-only.

pub mod affiliation;
pub mod appointment;
pub mod certification;
pub mod department;
pub mod nurse;
pub mod patient;
pub mod physician;
pub mod procedure;

pub use affiliation::AffiliationForm;
pub use appointment::AppointmentForm;
pub use certification::CertificationForm;
pub use department::DepartmentForm;
pub use nurse::NurseForm;
pub use patient::PatientForm;
pub use physician::PhysicianForm;
pub use procedure::ProcedureForm;
