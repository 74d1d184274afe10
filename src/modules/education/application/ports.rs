// src/modules/education/application/ports.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::content::media::{ImageUpload, MediaError};
use crate::shared::content::ordering::ReorderItem;
use crate::shared::content::patch::PatchField;

#[derive(Debug, Clone)]
pub struct CreateEducationData {
    pub degree: String,
    pub institution: String,
    pub institution_logo: Option<String>,
    pub field_of_study: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct PatchEducationData {
    pub degree: PatchField<String>,
    pub institution: PatchField<String>,
    pub institution_logo: PatchField<String>,
    pub field_of_study: PatchField<String>,
    pub start_date: PatchField<NaiveDate>,
    pub end_date: PatchField<NaiveDate>,
    pub is_current: PatchField<bool>,
    pub sort_order: PatchField<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationResult {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub institution_logo: Option<String>,
    pub field_of_study: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EducationRepositoryError {
    #[error("Education not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EducationError {
    #[error("Education not found")]
    NotFound,

    #[error("{0}")]
    InvalidImage(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<EducationRepositoryError> for EducationError {
    fn from(e: EducationRepositoryError) -> Self {
        match e {
            EducationRepositoryError::NotFound => EducationError::NotFound,
            EducationRepositoryError::DatabaseError(msg) => EducationError::Repository(msg),
        }
    }
}

impl From<MediaError> for EducationError {
    fn from(e: MediaError) -> Self {
        match e {
            MediaError::Storage(inner) => EducationError::Repository(inner.to_string()),
            other => EducationError::InvalidImage(other.to_string()),
        }
    }
}

#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<EducationResult>, EducationRepositoryError>;
    async fn get(&self, id: Uuid) -> Result<EducationResult, EducationRepositoryError>;
    async fn create(
        &self,
        data: CreateEducationData,
    ) -> Result<EducationResult, EducationRepositoryError>;
    async fn patch(
        &self,
        id: Uuid,
        data: PatchEducationData,
    ) -> Result<EducationResult, EducationRepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), EducationRepositoryError>;
    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), EducationRepositoryError>;
}

#[derive(Debug, Clone)]
pub struct CreateEducationInput {
    pub degree: String,
    pub institution: String,
    pub institution_logo: Option<ImageUpload>,
    pub field_of_study: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct PatchEducationInput {
    pub degree: PatchField<String>,
    pub institution: PatchField<String>,
    pub institution_logo: Option<ImageUpload>,
    pub remove_institution_logo: bool,
    pub field_of_study: PatchField<String>,
    pub start_date: PatchField<NaiveDate>,
    pub end_date: PatchField<NaiveDate>,
    pub is_current: PatchField<bool>,
    pub sort_order: PatchField<i32>,
}

#[async_trait]
pub trait EducationUseCases: Send + Sync {
    async fn list(&self) -> Result<Vec<EducationResult>, EducationError>;
    async fn get(&self, id: Uuid) -> Result<EducationResult, EducationError>;
    async fn create(&self, input: CreateEducationInput) -> Result<EducationResult, EducationError>;
    async fn patch(
        &self,
        id: Uuid,
        input: PatchEducationInput,
    ) -> Result<EducationResult, EducationError>;
    async fn delete(&self, id: Uuid) -> Result<(), EducationError>;
    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), EducationError>;
}
