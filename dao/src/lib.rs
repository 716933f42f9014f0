use std::fmt::Debug;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

pub mod audit_trail;
pub mod company;
pub mod employee;
pub mod report_request;
pub mod time_entry;
pub mod timesheet_sheet;

#[derive(Error, Debug)]
pub enum DaoError {
    #[error("Database query error: {0}")]
    DatabaseQueryError(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub trait Transaction: Clone + Debug + Send + Sync {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockTransaction;
impl Transaction for MockTransaction {}

#[automock(type Transaction = MockTransaction;)]
#[async_trait]
pub trait TransactionDao {
    type Transaction: Transaction;

    async fn new_transaction(&self) -> Result<Self::Transaction, DaoError>;

    async fn use_transaction(
        &self,
        tx: Option<Self::Transaction>,
    ) -> Result<Self::Transaction, DaoError>;

    async fn commit(&self, transaction: Self::Transaction) -> Result<(), DaoError>;
}
