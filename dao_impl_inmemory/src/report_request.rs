use std::sync::Arc;

use async_trait::async_trait;
use dao::report_request::{ReportRequestDao, ReportRequestEntity};
use dao::DaoError;
use uuid::Uuid;

use crate::{InMemoryDb, InMemoryTransaction};

pub struct ReportRequestDaoImpl {
    db: Arc<InMemoryDb>,
}

impl ReportRequestDaoImpl {
    pub fn new(db: Arc<InMemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReportRequestDao for ReportRequestDaoImpl {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        id: Uuid,
        _tx: Self::Transaction,
    ) -> Result<Option<ReportRequestEntity>, DaoError> {
        Ok(self
            .db
            .report_requests
            .iter()
            .find(|request| request.id == id)
            .cloned())
    }
}
