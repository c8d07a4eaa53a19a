//! Nurse endpoints.
//!
//! The registration update endpoint takes the flag as a 0/1 integer
//! (`{"status": 1}`); everywhere else the domain type's boolean is used.

use crate::error::ClientResult;
use crate::transport::Transport;
use hms_core::Nurse;
use serde::Serialize;

pub struct NurseApi<'a> {
    transport: &'a Transport,
}

#[derive(Serialize)]
struct RegisteredPayload {
    status: u8,
}

#[derive(Serialize)]
struct SsnPayload {
    ssn: u64,
}

impl<'a> NurseApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List all nurses.
    pub async fn list(&self) -> ClientResult<Vec<Nurse>> {
        self.transport.get("/nurse/").await
    }

    /// Fetch one nurse by employee id.
    pub async fn get(&self, employee_id: u64) -> ClientResult<Nurse> {
        self.transport.get(&format!("/nurse/{employee_id}")).await
    }

    /// Create a nurse from the full record.
    pub async fn create(&self, nurse: &Nurse) -> ClientResult<()> {
        self.transport.post("/nurse", nurse).await
    }

    /// Update the registration flag only.
    pub async fn update_registered(&self, employee_id: u64, registered: bool) -> ClientResult<()> {
        self.transport
            .put(
                &format!("/nurse/registered/{employee_id}"),
                &RegisteredPayload {
                    status: registered.into(),
                },
            )
            .await
    }

    /// Update the SSN only.
    pub async fn update_ssn(&self, employee_id: u64, ssn: u64) -> ClientResult<()> {
        self.transport
            .put(&format!("/nurse/ssn/{employee_id}"), &SsnPayload { ssn })
            .await
    }

    /// A nurse's position.
    pub async fn position(&self, employee_id: u64) -> ClientResult<String> {
        self.transport
            .get(&format!("/nurse/position/{employee_id}"))
            .await
    }

    /// A nurse's registration status.
    pub async fn registered(&self, employee_id: u64) -> ClientResult<bool> {
        self.transport
            .get(&format!("/nurse/registered/{employee_id}"))
            .await
    }
}
