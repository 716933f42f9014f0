use std::sync::Arc;

use async_trait::async_trait;
use dao::company::CompanyEntity;
use mockall::automock;
use serde::Serialize;
use uuid::Uuid;

use crate::ServiceError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Company {
    pub id: Uuid,
    pub name: Option<Arc<str>>,
    pub street: Option<Arc<str>>,
    pub city: Option<Arc<str>>,
    pub zip: Option<Arc<str>>,
    pub state: Option<Arc<str>>,
    pub phone: Option<Arc<str>>,
    pub email: Option<Arc<str>>,
    pub website: Option<Arc<str>>,
}

impl From<&CompanyEntity> for Company {
    fn from(entity: &CompanyEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name.clone(),
            street: entity.street.clone(),
            city: entity.city.clone(),
            zip: entity.zip.clone(),
            state: entity.state.clone(),
            phone: entity.phone.clone(),
            email: entity.email.clone(),
            website: entity.website.clone(),
        }
    }
}
timesheet_utils::derive_from_reference!(CompanyEntity, Company);

/// Letterhead fields flattened for the renderer. Absent source fields
/// become empty strings, never errors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompanyData {
    pub name: Arc<str>,
    pub street: Arc<str>,
    pub city: Arc<str>,
    pub zip: Arc<str>,
    pub state: Arc<str>,
    pub phone: Arc<str>,
    pub email: Arc<str>,
    pub website: Arc<str>,
}

impl CompanyData {
    pub fn empty() -> Self {
        Self {
            name: "".into(),
            street: "".into(),
            city: "".into(),
            zip: "".into(),
            state: "".into(),
            phone: "".into(),
            email: "".into(),
            website: "".into(),
        }
    }
}

impl From<&Company> for CompanyData {
    fn from(company: &Company) -> Self {
        fn flatten(field: &Option<Arc<str>>) -> Arc<str> {
            field.clone().unwrap_or_else(|| "".into())
        }

        Self {
            name: flatten(&company.name),
            street: flatten(&company.street),
            city: flatten(&company.city),
            zip: flatten(&company.zip),
            state: flatten(&company.state),
            phone: flatten(&company.phone),
            email: flatten(&company.email),
            website: flatten(&company.website),
        }
    }
}
timesheet_utils::derive_from_reference!(Company, CompanyData);

#[automock(type Transaction = dao::MockTransaction;)]
#[async_trait]
pub trait CompanyService {
    type Transaction: dao::Transaction;

    async fn get(
        &self,
        id: Uuid,
        tx: Option<Self::Transaction>,
    ) -> Result<Option<Company>, ServiceError>;
}
