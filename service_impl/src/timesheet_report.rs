use std::sync::Arc;

use async_trait::async_trait;
use dao::report_request::ReportRequestDao;
use dao::TransactionDao;
use indexmap::IndexMap;
use service::company::{CompanyData, CompanyService};
use service::employee::EmployeeService;
use service::submission::SubmissionInfoService;
use service::time_entry::{TimeEntry, TimeEntryService};
use service::timesheet_report::{
    ProjectGroup, ReportRequest, ReportValues, TaskGroup, TimesheetData, TimesheetEntry,
    TimesheetReportService, NO_PROJECT, NO_TASK, REPORT_DOC_MODEL,
};
use service::ServiceError;
use timesheet_utils::format_clock_hours;
use tokio::join;
use tracing::info;
use uuid::Uuid;

use crate::gen_service_impl;

gen_service_impl! {
    struct TimesheetReportServiceImpl: TimesheetReportService = TimesheetReportServiceDeps {
        ReportRequestDao: ReportRequestDao<Transaction = Self::Transaction> = report_request_dao,
        TimeEntryService: TimeEntryService<Transaction = Self::Transaction> = time_entry_service,
        EmployeeService: EmployeeService<Transaction = Self::Transaction> = employee_service,
        CompanyService: CompanyService<Transaction = Self::Transaction> = company_service,
        SubmissionInfoService: SubmissionInfoService<Transaction = Self::Transaction> = submission_info_service,
        TransactionDao: TransactionDao<Transaction = Self::Transaction> = transaction_dao
    }
}

/// Period line of the report header. A missing bound shrinks the string,
/// two missing bounds drop it entirely.
pub fn build_period(
    from_date: Option<time::Date>,
    to_date: Option<time::Date>,
) -> Option<Arc<str>> {
    match (from_date, to_date) {
        (Some(from), Some(to)) => Some(format!("From {from} To {to}").into()),
        (Some(from), None) => Some(format!("From {from}").into()),
        (None, Some(to)) => Some(format!("To {to}").into()),
        (None, None) => None,
    }
}

/// Groups an already ordered entry list into the project → task tree.
///
/// Entries keep their given order, missing references land under the
/// `NO_PROJECT`/`NO_TASK` buckets, and subtotals accumulate per task, per
/// project and overall. Formatted clock strings are attached once all
/// entries are consumed.
pub fn build_timesheet_data(entries: &[TimeEntry]) -> Result<TimesheetData, ServiceError> {
    let mut projects: IndexMap<Arc<str>, ProjectGroup> = IndexMap::new();
    let mut total = 0.0f32;

    for entry in entries {
        let project_name: Arc<str> = entry.project.clone().unwrap_or_else(|| NO_PROJECT.into());
        let task_name: Arc<str> = entry.task.clone().unwrap_or_else(|| NO_TASK.into());

        let project = projects
            .entry(project_name)
            .or_insert_with(|| ProjectGroup {
                tasks: IndexMap::new(),
                subtotal: 0.0,
                subtotal_formatted: "".into(),
            });
        let task = project.tasks.entry(task_name).or_insert_with(|| TaskGroup {
            entries: Vec::new(),
            subtotal: 0.0,
            subtotal_formatted: "".into(),
        });

        task.entries.push(TimesheetEntry {
            date: entry.date,
            description: entry.description.clone(),
            duration: format_clock_hours(entry.hours)?.into(),
            hours: entry.hours,
        });
        task.subtotal += entry.hours;
        project.subtotal += entry.hours;
        total += entry.hours;
    }

    for project in projects.values_mut() {
        for task in project.tasks.values_mut() {
            task.subtotal_formatted = format_clock_hours(task.subtotal)?.into();
        }
        project.subtotal_formatted = format_clock_hours(project.subtotal)?.into();
    }

    Ok(TimesheetData {
        projects,
        total,
        total_formatted: format_clock_hours(total)?.into(),
    })
}

#[async_trait]
impl<Deps: TimesheetReportServiceDeps> TimesheetReportService
    for TimesheetReportServiceImpl<Deps>
{
    type Transaction = Deps::Transaction;

    async fn get_report_values(
        &self,
        request_id: Uuid,
        tx: Option<Self::Transaction>,
    ) -> Result<ReportValues, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;

        let request = self
            .report_request_dao
            .find_by_id(request_id, tx.clone())
            .await?
            .ok_or(ServiceError::EntityNotFound(request_id))?;
        info!("Preparing timesheet report values for request {request_id}");

        let (employee, res_company) = join!(
            self.employee_service
                .find_by_user_id(request.user_id, tx.clone().into()),
            self.company_service
                .get(request.company_id, tx.clone().into()),
        );
        let employee = employee?;
        let res_company = res_company?;

        let entries = self
            .time_entry_service
            .find_for_employee(
                request.user_id,
                request.from_date,
                request.to_date,
                tx.clone().into(),
            )
            .await?;
        let timesheet_data = build_timesheet_data(&entries)?;

        let submission = self
            .submission_info_service
            .resolve(
                request.user_id,
                request.from_date,
                request.to_date,
                tx.clone().into(),
            )
            .await?;

        let company_data = res_company
            .as_ref()
            .map(CompanyData::from)
            .unwrap_or_else(CompanyData::empty);

        self.transaction_dao.commit(tx).await?;
        Ok(ReportValues {
            doc_ids: Arc::new([request_id]),
            doc_model: REPORT_DOC_MODEL.into(),
            docs: ReportRequest::from(&request),
            employee,
            period: build_period(request.from_date, request.to_date),
            timesheet_data,
            res_company,
            company_data,
            timesheet_submitted_date: submission.submitted_date,
            timesheet_approved_date: submission.approved_date,
            reviewer_name: submission.reviewer_name,
        })
    }
}
