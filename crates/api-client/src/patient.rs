//! Patient endpoints.

use crate::error::ClientResult;
use crate::transport::Transport;
use hms_core::Patient;
use serde::Serialize;

pub struct PatientApi<'a> {
    transport: &'a Transport,
}

#[derive(Serialize)]
struct AddressPayload<'a> {
    address: &'a str,
}

#[derive(Serialize)]
struct PhonePayload<'a> {
    phone: &'a str,
}

impl<'a> PatientApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List all patients.
    pub async fn list(&self) -> ClientResult<Vec<Patient>> {
        self.transport.get("/patient/").await
    }

    /// Create a patient from the full record.
    pub async fn create(&self, patient: &Patient) -> ClientResult<()> {
        self.transport.post("/patient", patient).await
    }

    /// Update the address only.
    pub async fn update_address(&self, ssn: u64, address: &str) -> ClientResult<()> {
        self.transport
            .put(&format!("/patient/address/{ssn}"), &AddressPayload { address })
            .await
    }

    /// Update the phone number only.
    pub async fn update_phone(&self, ssn: u64, phone: &str) -> ClientResult<()> {
        self.transport
            .put(&format!("/patient/phone/{ssn}"), &PhonePayload { phone })
            .await
    }

    /// Patients whose primary care physician is the given physician.
    pub async fn by_physician(&self, physician_id: u64) -> ClientResult<Vec<Patient>> {
        self.transport.get(&format!("/patient/{physician_id}")).await
    }

    /// Insurance identifier for a patient.
    pub async fn insurance(&self, ssn: u64) -> ClientResult<u64> {
        self.transport.get(&format!("/patient/insurance/{ssn}")).await
    }

    /// Find one patient by SSN.
    ///
    /// The backend has no lookup endpoint for this, so the full collection is
    /// fetched and scanned client-side.
    pub async fn find_by_ssn(&self, ssn: u64) -> ClientResult<Option<Patient>> {
        let patients = self.list().await?;
        Ok(patients.into_iter().find(|p| p.ssn == ssn))
    }

    /// Patients whose name contains the search term (case-insensitive).
    ///
    /// Client-side filter over the full collection, like [`Self::find_by_ssn`].
    pub async fn search_by_name(&self, term: &str) -> ClientResult<Vec<Patient>> {
        let needle = term.to_lowercase();
        let patients = self.list().await?;
        Ok(patients
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect())
    }
}
