use std::sync::Arc;

use dao::time_entry::TimeEntryEntity;
use mockall::predicate::{always, eq};
use service::time_entry::TimeEntryService;
use time::macros::date;
use uuid::Uuid;

use crate::time_entry::{TimeEntryServiceDeps, TimeEntryServiceImpl};

struct MockDeps {
    time_entry_dao: dao::time_entry::MockTimeEntryDao,
    transaction_dao: dao::MockTransactionDao,
}

impl TimeEntryServiceDeps for MockDeps {
    type Transaction = dao::MockTransaction;
    type TimeEntryDao = dao::time_entry::MockTimeEntryDao;
    type TransactionDao = dao::MockTransactionDao;
}

impl MockDeps {
    fn new() -> Self {
        Self {
            time_entry_dao: dao::time_entry::MockTimeEntryDao::new(),
            transaction_dao: dao::MockTransactionDao::new(),
        }
    }

    fn build_service(self) -> TimeEntryServiceImpl<MockDeps> {
        TimeEntryServiceImpl {
            time_entry_dao: self.time_entry_dao.into(),
            transaction_dao: self.transaction_dao.into(),
        }
    }
}

fn expect_transaction(deps: &mut MockDeps) {
    deps.transaction_dao
        .expect_use_transaction()
        .with(always())
        .times(1)
        .returning(|_| Ok(dao::MockTransaction));
    deps.transaction_dao
        .expect_commit()
        .with(always())
        .times(1)
        .returning(|_| Ok(()));
}

#[tokio::test]
async fn test_find_for_employee_maps_entities_and_forwards_bounds() {
    let user_id = Uuid::new_v4();
    let entities: Arc<[TimeEntryEntity]> = Arc::new([TimeEntryEntity {
        id: Uuid::new_v4(),
        user_id,
        project: Some("Atlas".into()),
        task: None,
        date: date!(2025 - 02 - 03),
        description: "Persistence layer review".into(),
        hours: 2.5,
    }]);

    let mut deps = MockDeps::new();
    expect_transaction(&mut deps);
    let dao_result = entities.clone();
    deps.time_entry_dao
        .expect_find_by_user_in_range()
        .with(
            eq(user_id),
            eq(Some(date!(2025 - 02 - 01))),
            eq(Some(date!(2025 - 02 - 07))),
            always(),
        )
        .times(1)
        .returning(move |_, _, _, _| Ok(dao_result.clone()));

    let service = deps.build_service();
    let entries = service
        .find_for_employee(
            user_id,
            Some(date!(2025 - 02 - 01)),
            Some(date!(2025 - 02 - 07)),
            None,
        )
        .await
        .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].project.as_deref(), Some("Atlas"));
    assert_eq!(entries[0].task, None);
    assert_eq!(entries[0].hours, 2.5);
    assert_eq!(entries[0].description.as_ref(), "Persistence layer review");
}

#[tokio::test]
async fn test_find_for_employee_passes_open_bounds_through() {
    let user_id = Uuid::new_v4();

    let mut deps = MockDeps::new();
    expect_transaction(&mut deps);
    deps.time_entry_dao
        .expect_find_by_user_in_range()
        .with(
            eq(user_id),
            eq(None::<time::Date>),
            eq(None::<time::Date>),
            always(),
        )
        .times(1)
        .returning(|_, _, _, _| Ok(Arc::new([])));

    let service = deps.build_service();
    let entries = service
        .find_for_employee(user_id, None, None, None)
        .await
        .unwrap();
    assert!(entries.is_empty());
}
