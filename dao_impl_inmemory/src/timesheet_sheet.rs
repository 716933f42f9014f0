use std::sync::Arc;

use async_trait::async_trait;
use dao::timesheet_sheet::{TimesheetSheetDao, TimesheetSheetEntity};
use dao::DaoError;
use uuid::Uuid;

use crate::{InMemoryDb, InMemoryTransaction};

pub struct TimesheetSheetDaoImpl {
    db: Arc<InMemoryDb>,
}

impl TimesheetSheetDaoImpl {
    pub fn new(db: Arc<InMemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TimesheetSheetDao for TimesheetSheetDaoImpl {
    type Transaction = InMemoryTransaction;

    async fn find_by_user(
        &self,
        user_id: Uuid,
        _tx: Self::Transaction,
    ) -> Result<Arc<[TimesheetSheetEntity]>, DaoError> {
        Ok(self
            .db
            .timesheet_sheets
            .iter()
            .filter(|sheet| sheet.user_id == user_id)
            .cloned()
            .collect())
    }
}
