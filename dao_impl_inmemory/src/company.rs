use std::sync::Arc;

use async_trait::async_trait;
use dao::company::{CompanyDao, CompanyEntity};
use dao::DaoError;
use uuid::Uuid;

use crate::{InMemoryDb, InMemoryTransaction};

pub struct CompanyDaoImpl {
    db: Arc<InMemoryDb>,
}

impl CompanyDaoImpl {
    pub fn new(db: Arc<InMemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CompanyDao for CompanyDaoImpl {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        id: Uuid,
        _tx: Self::Transaction,
    ) -> Result<Option<CompanyEntity>, DaoError> {
        Ok(self
            .db
            .companies
            .iter()
            .find(|company| company.id == id)
            .cloned())
    }
}
