use std::sync::Arc;

use async_trait::async_trait;
use dao::report_request::ReportRequestEntity;
use indexmap::IndexMap;
use mockall::automock;
use serde::Serialize;
use uuid::Uuid;

use crate::company::{Company, CompanyData};
use crate::employee::Employee;
use crate::ServiceError;

/// Grouping key for entries without a project reference.
pub const NO_PROJECT: &str = "No Project";
/// Grouping key for entries without a task reference.
pub const NO_TASK: &str = "No Task";
/// Source record type of the report request, as the template expects it.
pub const REPORT_DOC_MODEL: &str = "timesheet.report";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_id: Uuid,
    pub from_date: Option<time::Date>,
    pub to_date: Option<time::Date>,
}

impl From<&ReportRequestEntity> for ReportRequest {
    fn from(entity: &ReportRequestEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            company_id: entity.company_id,
            from_date: entity.from_date,
            to_date: entity.to_date,
        }
    }
}
timesheet_utils::derive_from_reference!(ReportRequestEntity, ReportRequest);

/// One rendered row of the report body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimesheetEntry {
    pub date: time::Date,
    pub description: Arc<str>,
    pub duration: Arc<str>,
    pub hours: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TaskGroup {
    pub entries: Vec<TimesheetEntry>,
    pub subtotal: f32,
    pub subtotal_formatted: Arc<str>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectGroup {
    pub tasks: IndexMap<Arc<str>, TaskGroup>,
    pub subtotal: f32,
    pub subtotal_formatted: Arc<str>,
}

/// Two-level aggregation tree: project name → task name → entries, each
/// level carrying a running subtotal and its clock-formatted rendering.
/// Key order is the first-seen order of the underlying query.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimesheetData {
    pub projects: IndexMap<Arc<str>, ProjectGroup>,
    pub total: f32,
    pub total_formatted: Arc<str>,
}

/// The full value set handed to the external template renderer. Field
/// names and nesting are fixed by the existing template.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportValues {
    pub doc_ids: Arc<[Uuid]>,
    pub doc_model: Arc<str>,
    pub docs: ReportRequest,
    pub employee: Option<Employee>,
    pub period: Option<Arc<str>>,
    pub timesheet_data: TimesheetData,
    pub res_company: Option<Company>,
    pub company_data: CompanyData,
    pub timesheet_submitted_date: Option<time::PrimitiveDateTime>,
    pub timesheet_approved_date: Option<time::PrimitiveDateTime>,
    pub reviewer_name: Arc<str>,
}

#[automock(type Transaction = dao::MockTransaction;)]
#[async_trait]
pub trait TimesheetReportService {
    type Transaction: dao::Transaction;

    /// Assembles all values the timesheet template consumes.
    ///
    /// Fails with [`ServiceError::EntityNotFound`] when the request id is
    /// unknown; every other absence degrades to a neutral default rather
    /// than producing a partial report.
    async fn get_report_values(
        &self,
        request_id: Uuid,
        tx: Option<Self::Transaction>,
    ) -> Result<ReportValues, ServiceError>;
}
