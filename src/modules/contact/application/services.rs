// src/modules/contact/application/services.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::ports::{
    ContactError, ContactMessageResult, ContactRepository, ContactStatus, ContactUseCases,
    CreateContactMessageData,
};
use crate::shared::content::page::{PageRequest, PageResult};

pub struct ContactService<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> ContactService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ContactUseCases for ContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn submit(
        &self,
        data: CreateContactMessageData,
    ) -> Result<ContactMessageResult, ContactError> {
        self.repository.create(data).await.map_err(ContactError::from)
    }

    async fn list(
        &self,
        status: Option<ContactStatus>,
        page: PageRequest,
    ) -> Result<PageResult<ContactMessageResult>, ContactError> {
        self.repository
            .list(status, page)
            .await
            .map_err(ContactError::from)
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: ContactStatus,
    ) -> Result<ContactMessageResult, ContactError> {
        self.repository
            .set_status(id, status)
            .await
            .map_err(ContactError::from)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContactError> {
        self.repository.delete(id).await.map_err(ContactError::from)
    }
}
