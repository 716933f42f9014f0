use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::ServiceError;

/// Fallback sentinel when no reviewer, manager or department head resolves.
pub const NOT_ASSIGNED: &str = "Not Assigned";

/// Submission metadata of the timesheet period covering a report window.
///
/// Dates stay `None` when no fallback step resolves them; absent is always
/// distinguishable from a concrete timestamp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionInfo {
    pub submitted_date: Option<time::PrimitiveDateTime>,
    pub approved_date: Option<time::PrimitiveDateTime>,
    pub reviewer_name: Arc<str>,
}

#[automock(type Transaction = dao::MockTransaction;)]
#[async_trait]
pub trait SubmissionInfoService {
    type Transaction: dao::Transaction;

    /// Resolves who submitted, approved and reviewed the timesheet period
    /// of one employee. Missing data never errors, each field degrades
    /// through its fallback chain instead.
    async fn resolve(
        &self,
        user_id: Uuid,
        from_date: Option<time::Date>,
        to_date: Option<time::Date>,
        tx: Option<Self::Transaction>,
    ) -> Result<SubmissionInfo, ServiceError>;
}
