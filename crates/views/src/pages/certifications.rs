//! The certifications page, scoped by a physician selector.
//!
//! Changing the selector starts a new load; the collection view's epoch
//! guard keeps a slow response for the previous physician from being applied
//! after a newer selection.

use crate::load::CollectionView;
use hms_client::{TrainedInApi, Transport};
use hms_core::Certification;

#[derive(Debug, Default)]
pub struct CertificationsPage {
    selected: Option<u64>,
    pub view: CollectionView<Vec<Certification>>,
}

impl CertificationsPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// The physician the page is currently scoped to.
    pub fn selected(&self) -> Option<u64> {
        self.selected
    }

    /// Scope the page to a physician and fetch their certifications.
    pub async fn select(&mut self, transport: &Transport, physician_id: u64) -> bool {
        self.selected = Some(physician_id);
        let token = self.view.begin_load();
        let result = TrainedInApi::new(transport).by_physician(physician_id).await;
        self.view.resolve(token, result)
    }
}
