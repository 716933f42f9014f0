use async_trait::async_trait;
use dao::employee::EmployeeDao;
use dao::TransactionDao;
use service::employee::{Employee, EmployeeService};
use service::ServiceError;
use uuid::Uuid;

use crate::gen_service_impl;

gen_service_impl! {
    struct EmployeeServiceImpl: EmployeeService = EmployeeServiceDeps {
        EmployeeDao: EmployeeDao<Transaction = Self::Transaction> = employee_dao,
        TransactionDao: TransactionDao<Transaction = Self::Transaction> = transaction_dao
    }
}

#[async_trait]
impl<Deps: EmployeeServiceDeps> EmployeeService for EmployeeServiceImpl<Deps> {
    type Transaction = Deps::Transaction;

    async fn find_by_user_id(
        &self,
        user_id: Uuid,
        tx: Option<Self::Transaction>,
    ) -> Result<Option<Employee>, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        let employee = self
            .employee_dao
            .find_by_user_id(user_id, tx.clone())
            .await?
            .as_ref()
            .map(Employee::from);
        self.transaction_dao.commit(tx).await?;
        Ok(employee)
    }
}
