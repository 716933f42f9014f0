use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::DaoError;

/// Company letterhead snapshot. Every field may be unset on the host
/// record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompanyEntity {
    pub id: Uuid,
    pub name: Option<Arc<str>>,
    pub street: Option<Arc<str>>,
    pub city: Option<Arc<str>>,
    pub zip: Option<Arc<str>>,
    pub state: Option<Arc<str>>,
    pub phone: Option<Arc<str>>,
    pub email: Option<Arc<str>>,
    pub website: Option<Arc<str>>,
}

#[automock(type Transaction = crate::MockTransaction;)]
#[async_trait]
pub trait CompanyDao {
    type Transaction: crate::Transaction;

    async fn find_by_id(
        &self,
        id: Uuid,
        tx: Self::Transaction,
    ) -> Result<Option<CompanyEntity>, DaoError>;
}
