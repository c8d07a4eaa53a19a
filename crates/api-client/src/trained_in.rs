//! Certification (trained-in) endpoints.
//!
//! A certification is keyed by the (physician, procedure) pair; the only
//! mutable field is the expiry date, through the dedicated extension
//! endpoint.

use crate::error::ClientResult;
use crate::transport::Transport;
use chrono::NaiveDate;
use hms_core::{Certification, Physician};
use serde::Serialize;

pub struct TrainedInApi<'a> {
    transport: &'a Transport,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExpiryPayload {
    expiry_date: NaiveDate,
}

impl<'a> TrainedInApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List all certifications.
    pub async fn list(&self) -> ClientResult<Vec<Certification>> {
        self.transport.get("/trained_in/").await
    }

    /// Create a certification from the full record.
    pub async fn create(&self, certification: &Certification) -> ClientResult<()> {
        self.transport.post("/trained_in", certification).await
    }

    /// Certifications held by a physician.
    pub async fn by_physician(&self, physician_id: u64) -> ClientResult<Vec<Certification>> {
        self.transport
            .get(&format!("/trained_in/treatment/{physician_id}"))
            .await
    }

    /// Physicians certified for a procedure.
    pub async fn physicians_for(&self, procedure_id: u64) -> ClientResult<Vec<Physician>> {
        self.transport
            .get(&format!("/trained_in/physicians/{procedure_id}"))
            .await
    }

    /// A physician's certifications nearing expiry.
    pub async fn expiring_soon(&self, physician_id: u64) -> ClientResult<Vec<Certification>> {
        self.transport
            .get(&format!("/trained_in/expiring/{physician_id}"))
            .await
    }

    /// Update the expiry date of one certification.
    pub async fn update_expiry(
        &self,
        physician_id: u64,
        procedure_id: u64,
        expiry: NaiveDate,
    ) -> ClientResult<()> {
        self.transport
            .put(
                &format!("/trained_in/certificationexpiry/{physician_id}/{procedure_id}"),
                &ExpiryPayload { expiry_date: expiry },
            )
            .await
    }
}
