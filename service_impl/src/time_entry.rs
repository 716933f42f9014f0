use std::sync::Arc;

use async_trait::async_trait;
use dao::time_entry::TimeEntryDao;
use dao::TransactionDao;
use service::time_entry::{TimeEntry, TimeEntryService};
use service::ServiceError;
use uuid::Uuid;

use crate::gen_service_impl;

gen_service_impl! {
    struct TimeEntryServiceImpl: TimeEntryService = TimeEntryServiceDeps {
        TimeEntryDao: TimeEntryDao<Transaction = Self::Transaction> = time_entry_dao,
        TransactionDao: TransactionDao<Transaction = Self::Transaction> = transaction_dao
    }
}

#[async_trait]
impl<Deps: TimeEntryServiceDeps> TimeEntryService for TimeEntryServiceImpl<Deps> {
    type Transaction = Deps::Transaction;

    async fn find_for_employee(
        &self,
        user_id: Uuid,
        from_date: Option<time::Date>,
        to_date: Option<time::Date>,
        tx: Option<Self::Transaction>,
    ) -> Result<Arc<[TimeEntry]>, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        let entries: Arc<[TimeEntry]> = self
            .time_entry_dao
            .find_by_user_in_range(user_id, from_date, to_date, tx.clone())
            .await?
            .iter()
            .map(TimeEntry::from)
            .collect();
        self.transaction_dao.commit(tx).await?;
        Ok(entries)
    }
}
