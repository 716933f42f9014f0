use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::DaoError;

/// One timestamped log entry attached to a timesheet sheet. Used to infer
/// lifecycle-transition timestamps when no dedicated field exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditEntryEntity {
    pub id: Uuid,
    pub sheet_id: Uuid,
    pub author: Option<Arc<str>>,
    pub body: Arc<str>,
    pub created_at: time::PrimitiveDateTime,
}

#[automock(type Transaction = crate::MockTransaction;)]
#[async_trait]
pub trait AuditTrailDao {
    type Transaction: crate::Transaction;

    /// Audit entries of one sheet, ordered by `created_at` ascending.
    async fn find_by_sheet(
        &self,
        sheet_id: Uuid,
        tx: Self::Transaction,
    ) -> Result<Arc<[AuditEntryEntity]>, DaoError>;
}
