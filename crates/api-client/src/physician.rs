//! Physician endpoints.
//!
//! Updates are field-scoped: the backend exposes one endpoint per mutable
//! field (name, position, SSN) rather than a whole-record PUT.

use crate::error::ClientResult;
use crate::transport::Transport;
use hms_core::{Physician, Position};
use serde::Serialize;

pub struct PhysicianApi<'a> {
    transport: &'a Transport,
}

#[derive(Serialize)]
struct NamePayload<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct PositionPayload {
    position: Position,
}

#[derive(Serialize)]
struct SsnPayload {
    ssn: u64,
}

impl<'a> PhysicianApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List all physicians.
    pub async fn list(&self) -> ClientResult<Vec<Physician>> {
        self.transport.get("/physician/").await
    }

    /// Fetch one physician by employee id.
    pub async fn get(&self, employee_id: u64) -> ClientResult<Physician> {
        self.transport
            .get(&format!("/physician/empid/{employee_id}"))
            .await
    }

    /// Create a physician from the full record.
    pub async fn create(&self, physician: &Physician) -> ClientResult<()> {
        self.transport.post("/physician", physician).await
    }

    /// Update the name only.
    pub async fn update_name(&self, employee_id: u64, name: &str) -> ClientResult<()> {
        self.transport
            .put(
                &format!("/physician/update/name/{employee_id}"),
                &NamePayload { name },
            )
            .await
    }

    /// Update the position only.
    pub async fn update_position(&self, employee_id: u64, position: Position) -> ClientResult<()> {
        self.transport
            .put(
                &format!("/physician/update/position/{employee_id}"),
                &PositionPayload { position },
            )
            .await
    }

    /// Update the SSN only.
    pub async fn update_ssn(&self, employee_id: u64, ssn: u64) -> ClientResult<()> {
        self.transport
            .put(
                &format!("/physician/update/ssn/{employee_id}"),
                &SsnPayload { ssn },
            )
            .await
    }

    /// Physicians matching a name.
    pub async fn by_name(&self, name: &str) -> ClientResult<Vec<Physician>> {
        self.transport.get(&format!("/physician/name/{name}")).await
    }

    /// Physicians holding a position.
    pub async fn by_position(&self, position: Position) -> ClientResult<Vec<Physician>> {
        self.transport
            .get(&format!("/physician/position/{position}"))
            .await
    }
}
