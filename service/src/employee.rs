use std::sync::Arc;

use async_trait::async_trait;
use dao::employee::EmployeeEntity;
use mockall::automock;
use serde::Serialize;
use uuid::Uuid;

use crate::ServiceError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: Arc<str>,
    pub manager_name: Option<Arc<str>>,
    pub department_head_name: Option<Arc<str>>,
}

impl From<&EmployeeEntity> for Employee {
    fn from(entity: &EmployeeEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name.clone(),
            manager_name: entity.manager_name.clone(),
            department_head_name: entity.department_head_name.clone(),
        }
    }
}
timesheet_utils::derive_from_reference!(EmployeeEntity, Employee);

#[automock(type Transaction = dao::MockTransaction;)]
#[async_trait]
pub trait EmployeeService {
    type Transaction: dao::Transaction;

    async fn find_by_user_id(
        &self,
        user_id: Uuid,
        tx: Option<Self::Transaction>,
    ) -> Result<Option<Employee>, ServiceError>;
}
