//! Affiliation endpoints.
//!
//! The primary-affiliation update is a real `PUT` here. The observed client
//! issued a `GET` for it, which could never have changed anything; the
//! logical operation is preserved with a consistent verb.

use crate::error::ClientResult;
use crate::transport::Transport;
use hms_core::{Affiliation, Department, Physician};
use serde::Serialize;

pub struct AffiliatedWithApi<'a> {
    transport: &'a Transport,
}

#[derive(Serialize)]
struct PrimaryPayload {
    department: u64,
}

impl<'a> AffiliatedWithApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List all affiliations.
    pub async fn list(&self) -> ClientResult<Vec<Affiliation>> {
        self.transport.get("/affiliated_with").await
    }

    /// Create an affiliation from the full record.
    pub async fn create(&self, affiliation: &Affiliation) -> ClientResult<()> {
        self.transport.post("/affiliated_with", affiliation).await
    }

    /// Physicians affiliated with a department.
    pub async fn physicians_in(&self, department_id: u64) -> ClientResult<Vec<Physician>> {
        self.transport
            .get(&format!("/affiliated_with/physicians/{department_id}"))
            .await
    }

    /// Departments a physician is affiliated with.
    pub async fn departments_of(&self, physician_id: u64) -> ClientResult<Vec<Department>> {
        self.transport
            .get(&format!("/affiliated_with/department/{physician_id}"))
            .await
    }

    /// Number of physicians affiliated with a department.
    pub async fn physician_count(&self, department_id: u64) -> ClientResult<u64> {
        self.transport
            .get(&format!("/affiliated_with/countphysician/{department_id}"))
            .await
    }

    /// A physician's primary affiliation, if marked.
    pub async fn primary_of(&self, physician_id: u64) -> ClientResult<Option<Affiliation>> {
        self.transport
            .get(&format!("/affiliated_with/primary/{physician_id}"))
            .await
    }

    /// Move the primary marker to the given department.
    pub async fn set_primary(&self, physician_id: u64, department_id: u64) -> ClientResult<()> {
        self.transport
            .put(
                &format!("/affiliated_with/primary/{physician_id}"),
                &PrimaryPayload {
                    department: department_id,
                },
            )
            .await
    }
}
