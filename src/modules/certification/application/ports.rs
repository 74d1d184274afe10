// src/modules/certification/application/ports.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::content::media::{ImageUpload, MediaError};
use crate::shared::content::ordering::ReorderItem;
use crate::shared::content::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// Filters
// ──────────────────────────────────────────────────────────
// "active" = does_not_expire OR expiry_date strictly after today.
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificationStatusFilter {
    #[default]
    All,
    Active,
    Expired,
}

#[derive(Debug, Clone)]
pub struct CreateCertificationData {
    pub name: String,
    pub issuing_organization: String,
    pub badge_image: Option<String>,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub does_not_expire: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct PatchCertificationData {
    pub name: PatchField<String>,
    pub issuing_organization: PatchField<String>,
    pub badge_image: PatchField<String>,
    pub issue_date: PatchField<NaiveDate>,
    pub expiry_date: PatchField<NaiveDate>,
    pub does_not_expire: PatchField<bool>,
    pub sort_order: PatchField<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CertificationResult {
    pub id: Uuid,
    pub name: String,
    pub issuing_organization: String,
    pub badge_image: Option<String>,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub does_not_expire: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CertificationRepositoryError {
    #[error("Certification not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CertificationError {
    #[error("Certification not found")]
    NotFound,

    #[error("{0}")]
    InvalidImage(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<CertificationRepositoryError> for CertificationError {
    fn from(e: CertificationRepositoryError) -> Self {
        match e {
            CertificationRepositoryError::NotFound => CertificationError::NotFound,
            CertificationRepositoryError::DatabaseError(msg) => CertificationError::Repository(msg),
        }
    }
}

impl From<MediaError> for CertificationError {
    fn from(e: MediaError) -> Self {
        match e {
            MediaError::Storage(inner) => CertificationError::Repository(inner.to_string()),
            other => CertificationError::InvalidImage(other.to_string()),
        }
    }
}

#[async_trait]
pub trait CertificationRepository: Send + Sync {
    /// `today` anchors the active/expired cutoff so the query stays
    /// deterministic under test.
    async fn list(
        &self,
        filter: CertificationStatusFilter,
        today: NaiveDate,
    ) -> Result<Vec<CertificationResult>, CertificationRepositoryError>;

    async fn get(&self, id: Uuid) -> Result<CertificationResult, CertificationRepositoryError>;

    async fn create(
        &self,
        data: CreateCertificationData,
    ) -> Result<CertificationResult, CertificationRepositoryError>;

    async fn patch(
        &self,
        id: Uuid,
        data: PatchCertificationData,
    ) -> Result<CertificationResult, CertificationRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), CertificationRepositoryError>;

    async fn reorder(&self, items: Vec<ReorderItem>)
        -> Result<(), CertificationRepositoryError>;
}

#[derive(Debug, Clone)]
pub struct CreateCertificationInput {
    pub name: String,
    pub issuing_organization: String,
    pub badge_image: Option<ImageUpload>,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub does_not_expire: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct PatchCertificationInput {
    pub name: PatchField<String>,
    pub issuing_organization: PatchField<String>,
    pub badge_image: Option<ImageUpload>,
    pub remove_badge_image: bool,
    pub issue_date: PatchField<NaiveDate>,
    pub expiry_date: PatchField<NaiveDate>,
    pub does_not_expire: PatchField<bool>,
    pub sort_order: PatchField<i32>,
}

#[async_trait]
pub trait CertificationUseCases: Send + Sync {
    async fn list(
        &self,
        filter: CertificationStatusFilter,
    ) -> Result<Vec<CertificationResult>, CertificationError>;
    async fn get(&self, id: Uuid) -> Result<CertificationResult, CertificationError>;
    async fn create(
        &self,
        input: CreateCertificationInput,
    ) -> Result<CertificationResult, CertificationError>;
    async fn patch(
        &self,
        id: Uuid,
        input: PatchCertificationInput,
    ) -> Result<CertificationResult, CertificationError>;
    async fn delete(&self, id: Uuid) -> Result<(), CertificationError>;
    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), CertificationError>;
}
