use std::sync::Arc;

use async_trait::async_trait;
use dao::audit_trail::AuditTrailDao;
use dao::timesheet_sheet::{SheetStateEntity, TimesheetSheetDao};
use dao::TransactionDao;
use service::employee::EmployeeService;
use service::submission::{SubmissionInfo, SubmissionInfoService, NOT_ASSIGNED};
use service::ServiceError;
use tracing::info;
use uuid::Uuid;

use crate::gen_service_impl;

gen_service_impl! {
    struct SubmissionInfoServiceImpl: SubmissionInfoService = SubmissionInfoServiceDeps {
        TimesheetSheetDao: TimesheetSheetDao<Transaction = Self::Transaction> = timesheet_sheet_dao,
        AuditTrailDao: AuditTrailDao<Transaction = Self::Transaction> = audit_trail_dao,
        EmployeeService: EmployeeService<Transaction = Self::Transaction> = employee_service,
        TransactionDao: TransactionDao<Transaction = Self::Transaction> = transaction_dao
    }
}

/// Lifecycle wording used by the sheet workflow when an employee hands a
/// timesheet in.
pub fn mentions_submission(body: &str) -> bool {
    body.to_lowercase().contains("submit")
}

/// Lifecycle wording used by the sheet workflow when a reviewer signs a
/// timesheet off.
pub fn mentions_approval(body: &str) -> bool {
    body.to_lowercase().contains("approv")
}

impl<Deps: SubmissionInfoServiceDeps> SubmissionInfoServiceImpl<Deps> {
    /// Reviewer fallback once sheet and audit trail gave no name: the
    /// employee's manager, then the department head, then the sentinel.
    async fn reviewer_from_employee(
        &self,
        user_id: Uuid,
        tx: Deps::Transaction,
    ) -> Result<Arc<str>, ServiceError> {
        Ok(self
            .employee_service
            .find_by_user_id(user_id, tx.into())
            .await?
            .and_then(|employee| employee.manager_name.or(employee.department_head_name))
            .unwrap_or_else(|| NOT_ASSIGNED.into()))
    }
}

#[async_trait]
impl<Deps: SubmissionInfoServiceDeps> SubmissionInfoService for SubmissionInfoServiceImpl<Deps> {
    type Transaction = Deps::Transaction;

    async fn resolve(
        &self,
        user_id: Uuid,
        from_date: Option<time::Date>,
        to_date: Option<time::Date>,
        tx: Option<Self::Transaction>,
    ) -> Result<SubmissionInfo, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;

        let sheet = self
            .timesheet_sheet_dao
            .find_for_period(user_id, from_date, to_date, tx.clone())
            .await?;
        let Some(sheet) = sheet else {
            info!("No timesheet sheet for user {user_id}, submission dates stay unset");
            let reviewer_name = self.reviewer_from_employee(user_id, tx.clone()).await?;
            self.transaction_dao.commit(tx).await?;
            return Ok(SubmissionInfo {
                submitted_date: None,
                approved_date: None,
                reviewer_name,
            });
        };

        let audit_entries = self
            .audit_trail_dao
            .find_by_sheet(sheet.id, tx.clone())
            .await?;
        // Entries arrive ordered by creation time; the most recent
        // lifecycle transition of each kind wins.
        let submission_entry = audit_entries
            .iter()
            .rev()
            .find(|entry| mentions_submission(&entry.body));
        let approval_entry = audit_entries
            .iter()
            .rev()
            .find(|entry| mentions_approval(&entry.body));

        let submitted_date = submission_entry
            .map(|entry| entry.created_at)
            .or_else(|| {
                matches!(
                    sheet.state,
                    SheetStateEntity::Submitted | SheetStateEntity::Done
                )
                .then_some(sheet.updated_at)
            })
            .unwrap_or(sheet.created_at);

        let approved_date = approval_entry.map(|entry| entry.created_at).or_else(|| {
            (sheet.state == SheetStateEntity::Done).then_some(sheet.updated_at)
        });

        let reviewer_name = match (
            sheet.reviewer_name.clone(),
            approval_entry.and_then(|entry| entry.author.clone()),
        ) {
            (Some(reviewer), _) => reviewer,
            (None, Some(author)) => author,
            (None, None) => self.reviewer_from_employee(user_id, tx.clone()).await?,
        };

        self.transaction_dao.commit(tx).await?;
        Ok(SubmissionInfo {
            submitted_date: Some(submitted_date),
            approved_date,
            reviewer_name,
        })
    }
}
