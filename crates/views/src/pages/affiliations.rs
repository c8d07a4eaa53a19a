//! Affiliation pages.
//!
//! Two selector-scoped views over the same relation: a physician's
//! affiliations with the primary marker, and a department's physician
//! roster.

use crate::load::CollectionView;
use hms_client::{AffiliatedWithApi, DepartmentApi, Transport};
use hms_core::{index_by, Affiliation, Physician};

/// One row of a physician's affiliations: the relation plus the resolved
/// department name (`None` for a dangling department reference).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffiliationRow {
    pub affiliation: Affiliation,
    pub department_name: Option<String>,
}

/// A physician's affiliations, scoped by a physician selector.
#[derive(Debug, Default)]
pub struct AffiliationsPage {
    selected: Option<u64>,
    pub view: CollectionView<Vec<AffiliationRow>>,
}

impl AffiliationsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<u64> {
        self.selected
    }

    /// Scope to a physician: fetch the affiliation relation and the
    /// department collection concurrently, then join names.
    pub async fn select(&mut self, transport: &Transport, physician_id: u64) -> bool {
        self.selected = Some(physician_id);
        let token = self.view.begin_load();

        let affiliations = AffiliatedWithApi::new(transport);
        let departments = DepartmentApi::new(transport);
        let result = tokio::try_join!(affiliations.list(), departments.list());

        let outcome = result.map(|(affiliations, departments)| {
            let departments_by_id = index_by(&departments, |d| d.department_id);
            affiliations
                .into_iter()
                .filter(|a| a.physician == physician_id)
                .map(|affiliation| AffiliationRow {
                    department_name: departments_by_id
                        .get(&affiliation.department)
                        .map(|d| d.name.clone()),
                    affiliation,
                })
                .collect()
        });
        self.view.resolve(token, outcome)
    }
}

/// The physicians affiliated with one department, scoped by a department
/// selector.
#[derive(Debug, Default)]
pub struct DepartmentRosterPage {
    selected: Option<u64>,
    pub view: CollectionView<Vec<Physician>>,
}

impl DepartmentRosterPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<u64> {
        self.selected
    }

    /// Scope to a department and fetch its roster.
    pub async fn select(&mut self, transport: &Transport, department_id: u64) -> bool {
        self.selected = Some(department_id);
        let token = self.view.begin_load();
        let result = AffiliatedWithApi::new(transport)
            .physicians_in(department_id)
            .await;
        self.view.resolve(token, result)
    }
}
