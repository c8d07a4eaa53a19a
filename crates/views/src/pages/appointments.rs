//! The appointments board.
//!
//! Appointment rows reference a patient, a physician and possibly a prep
//! nurse by id; the table shows names. All four collections are fetched
//! concurrently and the view renders only when every fetch has landed —
//! the first failure aborts the whole fan-in with no partial result.

use crate::load::CollectionView;
use hms_client::{AppointmentApi, NurseApi, PatientApi, PhysicianApi, Transport};
use hms_core::{index_by, Appointment, Nurse, Patient, Physician};

/// One table row: the appointment plus resolved display names.
///
/// A name is `None` when the referenced row is missing from the fetched
/// collection (a dangling foreign key); the table renders a dash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRow {
    pub appointment: Appointment,
    pub patient_name: Option<String>,
    pub physician_name: Option<String>,
    pub prep_nurse_name: Option<String>,
}

#[derive(Debug, Default)]
pub struct AppointmentsPage {
    pub view: CollectionView<Vec<AppointmentRow>>,
}

impl AppointmentsPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch appointments, patients, physicians and nurses concurrently and
    /// build the joined rows.
    pub async fn load(&mut self, transport: &Transport) -> bool {
        let token = self.view.begin_load();

        let appointments = AppointmentApi::new(transport);
        let patients = PatientApi::new(transport);
        let physicians = PhysicianApi::new(transport);
        let nurses = NurseApi::new(transport);

        let result = tokio::try_join!(
            appointments.list(),
            patients.list(),
            physicians.list(),
            nurses.list(),
        );

        let outcome = result.map(|(appointments, patients, physicians, nurses)| {
            build_rows(appointments, &patients, &physicians, &nurses)
        });
        self.view.resolve(token, outcome)
    }
}

fn build_rows(
    appointments: Vec<Appointment>,
    patients: &[Patient],
    physicians: &[Physician],
    nurses: &[Nurse],
) -> Vec<AppointmentRow> {
    let patients_by_ssn = index_by(patients, |p| p.ssn);
    let physicians_by_id = index_by(physicians, |p| p.employee_id);
    let nurses_by_id = index_by(nurses, |n| n.employee_id);

    appointments
        .into_iter()
        .map(|appointment| AppointmentRow {
            patient_name: patients_by_ssn
                .get(&appointment.patient)
                .map(|p| p.name.clone()),
            physician_name: physicians_by_id
                .get(&appointment.physician)
                .map(|p| p.name.clone()),
            prep_nurse_name: appointment
                .prep_nurse
                .and_then(|id| nurses_by_id.get(&id).map(|n| n.name.clone())),
            appointment,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::LoadState;
    use crate::test_support::{
        spawn_stub, test_appointment, test_nurse, test_patient, test_physician, test_transport,
    };
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};

    fn happy_router() -> Router {
        Router::new()
            .route("/appointment", get(|| async { Json(vec![test_appointment()]) }))
            .route("/patient/", get(|| async { Json(vec![test_patient()]) }))
            .route("/physician/", get(|| async { Json(vec![test_physician()]) }))
            .route("/nurse/", get(|| async { Json(vec![test_nurse()]) }))
    }

    #[tokio::test]
    async fn test_load_joins_foreign_keys_to_names() {
        let base = spawn_stub(happy_router()).await;
        let transport = test_transport(&base);

        let mut page = AppointmentsPage::new();
        assert!(page.load(&transport).await);

        let rows = page.view.rows().expect("page should be ready");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].patient_name.as_deref(), Some("John Smith"));
        assert_eq!(rows[0].physician_name.as_deref(), Some("Dr. Keers"));
        assert_eq!(rows[0].prep_nurse_name.as_deref(), Some("Carla Espinosa"));
    }

    #[tokio::test]
    async fn test_dangling_reference_resolves_to_none() {
        let router = Router::new()
            .route("/appointment", get(|| async { Json(vec![test_appointment()]) }))
            .route("/patient/", get(|| async { Json(Vec::<Patient>::new()) }))
            .route("/physician/", get(|| async { Json(vec![test_physician()]) }))
            .route("/nurse/", get(|| async { Json(Vec::<Nurse>::new()) }));
        let base = spawn_stub(router).await;
        let transport = test_transport(&base);

        let mut page = AppointmentsPage::new();
        page.load(&transport).await;

        let rows = page.view.rows().expect("page should be ready");
        assert_eq!(rows[0].patient_name, None);
        assert_eq!(rows[0].prep_nurse_name, None);
        assert_eq!(rows[0].physician_name.as_deref(), Some("Dr. Keers"));
    }

    #[tokio::test]
    async fn test_one_failed_fetch_fails_the_whole_page() {
        let router = Router::new()
            .route("/appointment", get(|| async { Json(vec![test_appointment()]) }))
            .route("/patient/", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .route("/physician/", get(|| async { Json(vec![test_physician()]) }))
            .route("/nurse/", get(|| async { Json(vec![test_nurse()]) }));
        let base = spawn_stub(router).await;
        let transport = test_transport(&base);

        let mut page = AppointmentsPage::new();
        page.load(&transport).await;

        assert!(
            matches!(page.view.state(), LoadState::Failed(_)),
            "no partial rendering when any fetch of the fan-in fails"
        );
    }
}
