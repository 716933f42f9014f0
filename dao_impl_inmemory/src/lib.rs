use async_trait::async_trait;
use dao::audit_trail::AuditEntryEntity;
use dao::company::CompanyEntity;
use dao::employee::EmployeeEntity;
use dao::report_request::ReportRequestEntity;
use dao::time_entry::TimeEntryEntity;
use dao::timesheet_sheet::TimesheetSheetEntity;
use dao::{DaoError, Transaction, TransactionDao};

pub mod audit_trail;
pub mod company;
pub mod employee;
pub mod report_request;
pub mod time_entry;
pub mod timesheet_sheet;

/// Fixture store backing every DAO trait of the report module.
///
/// The module only reads, so contents are fixed at construction via the
/// `with_*` builder methods and shared between the DAO impls with `Arc`.
#[derive(Debug, Default)]
pub struct InMemoryDb {
    pub report_requests: Vec<ReportRequestEntity>,
    pub time_entries: Vec<TimeEntryEntity>,
    pub timesheet_sheets: Vec<TimesheetSheetEntity>,
    pub audit_entries: Vec<AuditEntryEntity>,
    pub employees: Vec<EmployeeEntity>,
    pub companies: Vec<CompanyEntity>,
}

impl InMemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report_request(mut self, request: ReportRequestEntity) -> Self {
        self.report_requests.push(request);
        self
    }

    pub fn with_time_entries(
        mut self,
        entries: impl IntoIterator<Item = TimeEntryEntity>,
    ) -> Self {
        self.time_entries.extend(entries);
        self
    }

    pub fn with_timesheet_sheet(mut self, sheet: TimesheetSheetEntity) -> Self {
        self.timesheet_sheets.push(sheet);
        self
    }

    pub fn with_audit_entries(
        mut self,
        entries: impl IntoIterator<Item = AuditEntryEntity>,
    ) -> Self {
        self.audit_entries.extend(entries);
        self
    }

    pub fn with_employee(mut self, employee: EmployeeEntity) -> Self {
        self.employees.push(employee);
        self
    }

    pub fn with_company(mut self, company: CompanyEntity) -> Self {
        self.companies.push(company);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InMemoryTransaction;
impl Transaction for InMemoryTransaction {}

pub struct TransactionDaoImpl;

#[async_trait]
impl TransactionDao for TransactionDaoImpl {
    type Transaction = InMemoryTransaction;

    async fn new_transaction(&self) -> Result<Self::Transaction, DaoError> {
        Ok(InMemoryTransaction)
    }

    async fn use_transaction(
        &self,
        tx: Option<Self::Transaction>,
    ) -> Result<Self::Transaction, DaoError> {
        match tx {
            Some(tx) => Ok(tx),
            None => self.new_transaction().await,
        }
    }

    async fn commit(&self, _transaction: Self::Transaction) -> Result<(), DaoError> {
        Ok(())
    }
}
