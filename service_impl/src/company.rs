use async_trait::async_trait;
use dao::company::CompanyDao;
use dao::TransactionDao;
use service::company::{Company, CompanyService};
use service::ServiceError;
use uuid::Uuid;

use crate::gen_service_impl;

gen_service_impl! {
    struct CompanyServiceImpl: CompanyService = CompanyServiceDeps {
        CompanyDao: CompanyDao<Transaction = Self::Transaction> = company_dao,
        TransactionDao: TransactionDao<Transaction = Self::Transaction> = transaction_dao
    }
}

#[async_trait]
impl<Deps: CompanyServiceDeps> CompanyService for CompanyServiceImpl<Deps> {
    type Transaction = Deps::Transaction;

    async fn get(
        &self,
        id: Uuid,
        tx: Option<Self::Transaction>,
    ) -> Result<Option<Company>, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        let company = self
            .company_dao
            .find_by_id(id, tx.clone())
            .await?
            .as_ref()
            .map(Company::from);
        self.transaction_dao.commit(tx).await?;
        Ok(company)
    }
}
