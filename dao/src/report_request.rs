use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::DaoError;

/// One print-job request: an employee's user reference plus an optional
/// date window. Owned by the caller, read-only here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRequestEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_id: Uuid,
    pub from_date: Option<time::Date>,
    pub to_date: Option<time::Date>,
}

#[automock(type Transaction = crate::MockTransaction;)]
#[async_trait]
pub trait ReportRequestDao {
    type Transaction: crate::Transaction;

    async fn find_by_id(
        &self,
        id: Uuid,
        tx: Self::Transaction,
    ) -> Result<Option<ReportRequestEntity>, DaoError>;
}
