use std::sync::Arc;

use async_trait::async_trait;
use dao::time_entry::TimeEntryEntity;
use mockall::automock;
use uuid::Uuid;

use crate::ServiceError;

#[derive(Clone, Debug, PartialEq)]
pub struct TimeEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub project: Option<Arc<str>>,
    pub task: Option<Arc<str>>,
    pub date: time::Date,
    pub description: Arc<str>,
    pub hours: f32,
}

impl From<&TimeEntryEntity> for TimeEntry {
    fn from(entity: &TimeEntryEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            project: entity.project.clone(),
            task: entity.task.clone(),
            date: entity.date,
            description: entity.description.clone(),
            hours: entity.hours,
        }
    }
}
timesheet_utils::derive_from_reference!(TimeEntryEntity, TimeEntry);

#[automock(type Transaction = dao::MockTransaction;)]
#[async_trait]
pub trait TimeEntryService {
    type Transaction: dao::Transaction;

    /// Entries of one employee, optionally bounded by an inclusive date
    /// window, in repository order (project, task, date).
    async fn find_for_employee(
        &self,
        user_id: Uuid,
        from_date: Option<time::Date>,
        to_date: Option<time::Date>,
        tx: Option<Self::Transaction>,
    ) -> Result<Arc<[TimeEntry]>, ServiceError>;
}
