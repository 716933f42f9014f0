use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::DaoError;

/// One logged unit of work. `project` and `task` are `None` when the host
/// record carries no such reference.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeEntryEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub project: Option<Arc<str>>,
    pub task: Option<Arc<str>>,
    pub date: time::Date,
    pub description: Arc<str>,
    pub hours: f32,
}

#[automock(type Transaction = crate::MockTransaction;)]
#[async_trait]
pub trait TimeEntryDao {
    type Transaction: crate::Transaction;

    /// Entries of one user, both date bounds inclusive and optional.
    ///
    /// The result is ordered by project, then task, then date; entries
    /// without a project or task sort before named ones. Consumers rely on
    /// this order and must not re-sort.
    async fn find_by_user_in_range(
        &self,
        user_id: Uuid,
        from_date: Option<time::Date>,
        to_date: Option<time::Date>,
        tx: Self::Transaction,
    ) -> Result<Arc<[TimeEntryEntity]>, DaoError>;
}
