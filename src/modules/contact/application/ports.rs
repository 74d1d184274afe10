// src/modules/contact/application/ports.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::content::page::{PageRequest, PageResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
}

impl ContactStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Read => "read",
            ContactStatus::Replied => "replied",
        }
    }

    pub fn from_str_or_new(s: &str) -> Self {
        match s {
            "read" => ContactStatus::Read,
            "replied" => ContactStatus::Replied,
            _ => ContactStatus::New,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateContactMessageData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactMessageResult {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Message not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactError {
    #[error("Message not found")]
    NotFound,

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<ContactRepositoryError> for ContactError {
    fn from(e: ContactRepositoryError) -> Self {
        match e {
            ContactRepositoryError::NotFound => ContactError::NotFound,
            ContactRepositoryError::DatabaseError(msg) => ContactError::Repository(msg),
        }
    }
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(
        &self,
        data: CreateContactMessageData,
    ) -> Result<ContactMessageResult, ContactRepositoryError>;

    /// Newest first; intake is write-mostly and read back in arrival order.
    async fn list(
        &self,
        status: Option<ContactStatus>,
        page: PageRequest,
    ) -> Result<PageResult<ContactMessageResult>, ContactRepositoryError>;

    async fn set_status(
        &self,
        id: Uuid,
        status: ContactStatus,
    ) -> Result<ContactMessageResult, ContactRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ContactRepositoryError>;
}

#[async_trait]
pub trait ContactUseCases: Send + Sync {
    async fn submit(
        &self,
        data: CreateContactMessageData,
    ) -> Result<ContactMessageResult, ContactError>;
    async fn list(
        &self,
        status: Option<ContactStatus>,
        page: PageRequest,
    ) -> Result<PageResult<ContactMessageResult>, ContactError>;
    async fn set_status(
        &self,
        id: Uuid,
        status: ContactStatus,
    ) -> Result<ContactMessageResult, ContactError>;
    async fn delete(&self, id: Uuid) -> Result<(), ContactError>;
}
