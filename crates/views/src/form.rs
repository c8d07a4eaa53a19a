//! The edit-form state machine.
//!
//! One shell serves every entity form: `closed → open(create|update) →
//! submitting → closed`, or back to `open` with an error banner when a
//! submission fails. The per-entity forms in [`crate::forms`] own the field
//! values and the submission choreography; the shell owns the phase.
//!
//! Update submissions run one call per mutable field group, in a fixed
//! order, because the backend only offers field-scoped endpoints. There is
//! no server-side transaction to lean on, so a partial failure cannot be
//! rolled back — instead [`UpdateReport`] records exactly which fields were
//! applied and which one failed, and the form surfaces that so the user can
//! retry just the failed field.

use hms_client::Fault;
use hms_core::NonEmptyText;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

#[derive(Debug, Default)]
pub enum FormPhase {
    #[default]
    Closed,
    Open {
        mode: FormMode,
        error: Option<String>,
    },
    Submitting {
        mode: FormMode,
    },
}

/// Client-side validation failure; caught before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("form is not open")]
    NotOpen,
    #[error("{0} is required")]
    Required(&'static str),
    #[error("end must be after start")]
    EndNotAfterStart,
    #[error("expiry must be after the certification date")]
    ExpiryNotAfterIssue,
    #[error("cost cannot be negative")]
    NegativeCost,
    #[error("physician already has a primary affiliation")]
    SecondPrimary,
}

/// Which sub-updates of a multi-call submission were applied before it
/// stopped.
#[derive(Debug, Default)]
pub struct UpdateReport {
    /// Field groups whose update calls succeeded, in submission order.
    pub applied: Vec<&'static str>,
    pub failed: Option<FailedUpdate>,
}

#[derive(Debug)]
pub struct FailedUpdate {
    pub field: &'static str,
    pub fault: Fault,
}

impl UpdateReport {
    /// Report for a failed single-call create submission.
    pub fn create_failed(fault: Fault) -> Self {
        Self {
            applied: Vec::new(),
            failed: Some(FailedUpdate {
                field: "record",
                fault,
            }),
        }
    }

    pub(crate) fn with_failure(mut self, field: &'static str, fault: Fault) -> Self {
        self.failed = Some(FailedUpdate { field, fault });
        self
    }
}

impl fmt::Display for UpdateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.failed {
            Some(failure) => {
                write!(f, "{} update failed: {}", failure.field, failure.fault)?;
                if !self.applied.is_empty() {
                    write!(f, " (already applied: {})", self.applied.join(", "))?;
                }
                Ok(())
            }
            None => write!(f, "all updates applied"),
        }
    }
}

/// Outcome of one submission attempt.
#[derive(Debug)]
pub enum Submission {
    /// Everything was applied; the form has closed and the owning list view
    /// should re-fetch.
    Completed,
    /// Client-side validation failed; nothing was sent.
    Rejected(ValidationError),
    /// At least one call failed; the form stays open with the report as its
    /// error banner.
    Failed(UpdateReport),
}

impl Submission {
    pub fn succeeded(&self) -> bool {
        matches!(self, Submission::Completed)
    }
}

/// Phase holder shared by all entity forms.
#[derive(Debug, Default)]
pub struct FormShell {
    phase: FormPhase,
}

impl FormShell {
    pub fn open(&mut self, mode: FormMode) {
        self.phase = FormPhase::Open { mode, error: None };
    }

    pub fn close(&mut self) {
        self.phase = FormPhase::Closed;
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, FormPhase::Open { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting { .. })
    }

    pub fn mode(&self) -> Option<FormMode> {
        match &self.phase {
            FormPhase::Open { mode, .. } | FormPhase::Submitting { mode } => Some(*mode),
            FormPhase::Closed => None,
        }
    }

    /// The current error banner, if a previous submission failed.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            FormPhase::Open { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Move `open → submitting`. Returns `None` (refusing the submission)
    /// from any other phase — this is the double-submit guard.
    pub(crate) fn begin_submit(&mut self) -> Option<FormMode> {
        let mode = match &self.phase {
            FormPhase::Open { mode, .. } => *mode,
            _ => return None,
        };
        self.phase = FormPhase::Submitting { mode };
        Some(mode)
    }

    /// Leave `submitting` according to the outcome: close on success, back
    /// to `open` with the error banner otherwise.
    pub(crate) fn finish(&mut self, outcome: &Submission) {
        let FormPhase::Submitting { mode } = &self.phase else {
            return;
        };
        let mode = *mode;
        self.phase = match outcome {
            Submission::Completed => FormPhase::Closed,
            Submission::Rejected(err) => FormPhase::Open {
                mode,
                error: Some(err.to_string()),
            },
            Submission::Failed(report) => FormPhase::Open {
                mode,
                error: Some(report.to_string()),
            },
        };
    }
}

/// A required free-text field: trimmed, must be non-empty.
pub(crate) fn required_text(value: &str, field: &'static str) -> Result<String, ValidationError> {
    NonEmptyText::new(value)
        .map(NonEmptyText::into_inner)
        .map_err(|_| ValidationError::Required(field))
}

/// A required non-text field (identifiers, dates, enums).
pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Required(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_starts_closed() {
        let shell = FormShell::default();
        assert!(matches!(shell.phase(), FormPhase::Closed));
        assert_eq!(shell.mode(), None);
    }

    #[test]
    fn test_submit_cycle_success_closes_form() {
        let mut shell = FormShell::default();
        shell.open(FormMode::Create);

        let mode = shell.begin_submit();
        assert_eq!(mode, Some(FormMode::Create));
        assert!(shell.is_submitting());

        shell.finish(&Submission::Completed);
        assert!(matches!(shell.phase(), FormPhase::Closed));
    }

    #[test]
    fn test_failed_submission_reopens_with_banner_and_mode() {
        let mut shell = FormShell::default();
        shell.open(FormMode::Update);
        shell.begin_submit();

        let report = UpdateReport::default().with_failure(
            "ssn",
            Fault::Status {
                status: 500,
                message: "boom".into(),
            },
        );
        shell.finish(&Submission::Failed(report));

        assert!(shell.is_open(), "form must stay open after a failure");
        assert_eq!(shell.mode(), Some(FormMode::Update));
        let banner = shell.error().expect("banner should be set");
        assert!(banner.contains("ssn update failed"), "banner: {banner}");
    }

    #[test]
    fn test_begin_submit_refused_while_submitting() {
        let mut shell = FormShell::default();
        shell.open(FormMode::Create);

        assert!(shell.begin_submit().is_some());
        assert_eq!(
            shell.begin_submit(),
            None,
            "a second submit while one is in flight must be refused"
        );
    }

    #[test]
    fn test_begin_submit_refused_when_closed() {
        let mut shell = FormShell::default();
        assert_eq!(shell.begin_submit(), None);
    }

    #[test]
    fn test_update_report_names_failed_field_and_applied_ones() {
        let mut report = UpdateReport::default();
        report.applied.push("name");
        let report = report.with_failure(
            "ssn",
            Fault::Status {
                status: 503,
                message: "unavailable".into(),
            },
        );

        let message = report.to_string();
        assert!(message.contains("ssn update failed"));
        assert!(message.contains("already applied: name"));
    }
}
