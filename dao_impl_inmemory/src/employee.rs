use std::sync::Arc;

use async_trait::async_trait;
use dao::employee::{EmployeeDao, EmployeeEntity};
use dao::DaoError;
use uuid::Uuid;

use crate::{InMemoryDb, InMemoryTransaction};

pub struct EmployeeDaoImpl {
    db: Arc<InMemoryDb>,
}

impl EmployeeDaoImpl {
    pub fn new(db: Arc<InMemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeDao for EmployeeDaoImpl {
    type Transaction = InMemoryTransaction;

    async fn find_by_user_id(
        &self,
        user_id: Uuid,
        _tx: Self::Transaction,
    ) -> Result<Option<EmployeeEntity>, DaoError> {
        Ok(self
            .db
            .employees
            .iter()
            .find(|employee| employee.user_id == user_id)
            .cloned())
    }
}
