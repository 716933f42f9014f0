use std::sync::Arc;

use async_trait::async_trait;
use dao::time_entry::{TimeEntryDao, TimeEntryEntity};
use dao::DaoError;
use uuid::Uuid;

use crate::{InMemoryDb, InMemoryTransaction};

pub struct TimeEntryDaoImpl {
    db: Arc<InMemoryDb>,
}

impl TimeEntryDaoImpl {
    pub fn new(db: Arc<InMemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TimeEntryDao for TimeEntryDaoImpl {
    type Transaction = InMemoryTransaction;

    async fn find_by_user_in_range(
        &self,
        user_id: Uuid,
        from_date: Option<time::Date>,
        to_date: Option<time::Date>,
        _tx: Self::Transaction,
    ) -> Result<Arc<[TimeEntryEntity]>, DaoError> {
        let mut entries: Vec<TimeEntryEntity> = self
            .db
            .time_entries
            .iter()
            .filter(|entry| {
                entry.user_id == user_id
                    && from_date.is_none_or(|from| entry.date >= from)
                    && to_date.is_none_or(|to| entry.date <= to)
            })
            .cloned()
            .collect();
        entries.sort_by(|a, b| {
            (a.project.as_deref(), a.task.as_deref(), a.date)
                .cmp(&(b.project.as_deref(), b.task.as_deref(), b.date))
        });
        Ok(entries.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn entry(
        user_id: Uuid,
        project: Option<&str>,
        task: Option<&str>,
        date: time::Date,
    ) -> TimeEntryEntity {
        TimeEntryEntity {
            id: Uuid::new_v4(),
            user_id,
            project: project.map(Arc::from),
            task: task.map(Arc::from),
            date,
            description: "work".into(),
            hours: 1.0,
        }
    }

    #[tokio::test]
    async fn test_date_window_is_inclusive_and_filters() {
        let user_id = Uuid::new_v4();
        let db = Arc::new(InMemoryDb::new().with_time_entries([
            entry(user_id, Some("Atlas"), None, date!(2025 - 02 - 01)),
            entry(user_id, Some("Atlas"), None, date!(2025 - 02 - 07)),
            entry(user_id, Some("Atlas"), None, date!(2025 - 02 - 10)),
            entry(Uuid::new_v4(), Some("Atlas"), None, date!(2025 - 02 - 03)),
        ]));
        let dao = TimeEntryDaoImpl::new(db);

        let found = dao
            .find_by_user_in_range(
                user_id,
                Some(date!(2025 - 02 - 01)),
                Some(date!(2025 - 02 - 07)),
                InMemoryTransaction,
            )
            .await
            .unwrap();

        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|e| e.user_id == user_id));
        assert!(found.iter().all(|e| e.date <= date!(2025 - 02 - 07)));
    }

    #[tokio::test]
    async fn test_missing_bounds_return_everything_of_the_user() {
        let user_id = Uuid::new_v4();
        let db = Arc::new(InMemoryDb::new().with_time_entries([
            entry(user_id, None, None, date!(2025 - 01 - 15)),
            entry(user_id, None, None, date!(2025 - 06 - 15)),
        ]));
        let dao = TimeEntryDaoImpl::new(db);

        let found = dao
            .find_by_user_in_range(user_id, None, None, InMemoryTransaction)
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn test_orders_by_project_task_date_with_unset_first() {
        let user_id = Uuid::new_v4();
        let db = Arc::new(InMemoryDb::new().with_time_entries([
            entry(user_id, Some("Borealis"), Some("Review"), date!(2025 - 02 - 02)),
            entry(user_id, Some("Atlas"), Some("Setup"), date!(2025 - 02 - 05)),
            entry(user_id, Some("Atlas"), Some("Setup"), date!(2025 - 02 - 01)),
            entry(user_id, None, None, date!(2025 - 02 - 09)),
            entry(user_id, Some("Atlas"), None, date!(2025 - 02 - 03)),
        ]));
        let dao = TimeEntryDaoImpl::new(db);

        let found = dao
            .find_by_user_in_range(user_id, None, None, InMemoryTransaction)
            .await
            .unwrap();

        let keys: Vec<(Option<&str>, Option<&str>, time::Date)> = found
            .iter()
            .map(|e| (e.project.as_deref(), e.task.as_deref(), e.date))
            .collect();
        assert_eq!(
            keys,
            vec![
                (None, None, date!(2025 - 02 - 09)),
                (Some("Atlas"), None, date!(2025 - 02 - 03)),
                (Some("Atlas"), Some("Setup"), date!(2025 - 02 - 01)),
                (Some("Atlas"), Some("Setup"), date!(2025 - 02 - 05)),
                (Some("Borealis"), Some("Review"), date!(2025 - 02 - 02)),
            ]
        );
    }
}
