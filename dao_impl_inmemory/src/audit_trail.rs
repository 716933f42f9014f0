use std::sync::Arc;

use async_trait::async_trait;
use dao::audit_trail::{AuditEntryEntity, AuditTrailDao};
use dao::DaoError;
use uuid::Uuid;

use crate::{InMemoryDb, InMemoryTransaction};

pub struct AuditTrailDaoImpl {
    db: Arc<InMemoryDb>,
}

impl AuditTrailDaoImpl {
    pub fn new(db: Arc<InMemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuditTrailDao for AuditTrailDaoImpl {
    type Transaction = InMemoryTransaction;

    async fn find_by_sheet(
        &self,
        sheet_id: Uuid,
        _tx: Self::Transaction,
    ) -> Result<Arc<[AuditEntryEntity]>, DaoError> {
        let mut entries: Vec<AuditEntryEntity> = self
            .db
            .audit_entries
            .iter()
            .filter(|entry| entry.sheet_id == sheet_id)
            .cloned()
            .collect();
        entries.sort_by_key(|entry| entry.created_at);
        Ok(entries.into())
    }
}
