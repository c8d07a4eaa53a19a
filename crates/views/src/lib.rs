//! # HMS views
//!
//! Headless UI controllers for the hospital administration client. Rendering
//! is an external collaborator: these types hold the state a table or modal
//! would display and run the fetch/submit choreography against the resource
//! clients, but never draw anything.
//!
//! Two generic patterns, applied uniformly across entities:
//!
//! - [`CollectionView`] / [`TablePage`]: fetch a full collection, expose
//!   `loading → {ready, failed}` states, discard stale responses by load
//!   epoch, re-fetch in full after any successful mutation.
//! - [`FormShell`] and the per-entity forms in [`forms`]: a modal-style
//!   create/update state machine with required-field and cross-field
//!   validation, sequential field-scoped update calls, and per-field
//!   partial-failure reporting.

pub mod form;
pub mod forms;
pub mod load;
pub mod pages;

#[cfg(test)]
pub(crate) mod test_support;

pub use form::{FailedUpdate, FormMode, FormPhase, FormShell, Submission, UpdateReport, ValidationError};
pub use load::{CollectionView, LoadState, LoadToken, TablePage};
