use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::DaoError;

/// Lifecycle state of a timesheet sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetStateEntity {
    Draft,
    Submitted,
    Done,
}

/// One employee's submission-for-approval covering a date range.
///
/// `reviewer_name` is the explicit optional reviewer reference, resolved at
/// data-mapping time. Record variants without the field map to `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimesheetSheetEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub from_date: time::Date,
    pub to_date: time::Date,
    pub state: SheetStateEntity,
    pub reviewer_name: Option<Arc<str>>,
    pub created_at: time::PrimitiveDateTime,
    pub updated_at: time::PrimitiveDateTime,
}

#[automock(type Transaction = crate::MockTransaction;)]
#[async_trait]
pub trait TimesheetSheetDao {
    type Transaction: crate::Transaction;

    async fn find_by_user(
        &self,
        user_id: Uuid,
        tx: Self::Transaction,
    ) -> Result<Arc<[TimesheetSheetEntity]>, DaoError>;

    /// The one sheet covering the given window.
    ///
    /// A sheet qualifies when its period overlaps the window; with several
    /// candidates the one with the latest period end wins. Without bounds
    /// the user's most recent sheet is returned.
    async fn find_for_period(
        &self,
        user_id: Uuid,
        from_date: Option<time::Date>,
        to_date: Option<time::Date>,
        tx: Self::Transaction,
    ) -> Result<Option<TimesheetSheetEntity>, DaoError> {
        Ok(self
            .find_by_user(user_id, tx)
            .await?
            .iter()
            .filter(|sheet| {
                from_date.is_none_or(|from| sheet.to_date >= from)
                    && to_date.is_none_or(|to| sheet.from_date <= to)
            })
            .max_by_key(|sheet| sheet.to_date)
            .cloned())
    }
}
