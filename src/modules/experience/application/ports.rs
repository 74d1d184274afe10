// src/modules/experience/application/ports.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::content::media::{ImageUpload, MediaError};
use crate::shared::content::ordering::ReorderItem;
use crate::shared::content::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// Repository DTOs (media fields already resolved to keys)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateExperienceData {
    pub title: String,
    pub company: String,
    pub company_logo: Option<String>,
    pub responsibilities: Vec<String>,
    pub achievements: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct PatchExperienceData {
    pub title: PatchField<String>,
    pub company: PatchField<String>,
    pub company_logo: PatchField<String>,
    pub responsibilities: PatchField<Vec<String>>,
    pub achievements: PatchField<Vec<String>>,
    pub start_date: PatchField<NaiveDate>,
    pub end_date: PatchField<NaiveDate>,
    pub is_current: PatchField<bool>,
    pub sort_order: PatchField<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceResult {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub company_logo: Option<String>,
    pub responsibilities: Vec<String>,
    pub achievements: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceError {
    #[error("Experience not found")]
    NotFound,

    /// Upload rejected before anything was written (type/size/encoding).
    #[error("{0}")]
    InvalidImage(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<ExperienceRepositoryError> for ExperienceError {
    fn from(e: ExperienceRepositoryError) -> Self {
        match e {
            ExperienceRepositoryError::NotFound => ExperienceError::NotFound,
            ExperienceRepositoryError::DatabaseError(msg)
            | ExperienceRepositoryError::SerializationError(msg) => {
                ExperienceError::Repository(msg)
            }
        }
    }
}

impl From<MediaError> for ExperienceError {
    fn from(e: MediaError) -> Self {
        match e {
            MediaError::Storage(inner) => ExperienceError::Repository(inner.to_string()),
            other => ExperienceError::InvalidImage(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Outgoing port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Manual ordering contract: sort_order ASC, ties broken by id ASC.
    async fn list(&self) -> Result<Vec<ExperienceResult>, ExperienceRepositoryError>;

    async fn get(&self, id: Uuid) -> Result<ExperienceResult, ExperienceRepositoryError>;

    async fn create(
        &self,
        data: CreateExperienceData,
    ) -> Result<ExperienceResult, ExperienceRepositoryError>;

    async fn patch(
        &self,
        id: Uuid,
        data: PatchExperienceData,
    ) -> Result<ExperienceResult, ExperienceRepositoryError>;

    /// Row only; owned files are deleted by the service beforehand.
    async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError>;

    /// Each pair is an independent update; the batch is not atomic.
    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), ExperienceRepositoryError>;

    async fn earliest_start_date(&self) -> Result<Option<NaiveDate>, ExperienceRepositoryError>;
}

//
// ──────────────────────────────────────────────────────────
// Incoming port (service-level inputs still carry raw uploads)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateExperienceInput {
    pub title: String,
    pub company: String,
    pub company_logo: Option<ImageUpload>,
    pub responsibilities: Vec<String>,
    pub achievements: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct PatchExperienceInput {
    pub title: PatchField<String>,
    pub company: PatchField<String>,
    pub company_logo: Option<ImageUpload>,
    pub remove_company_logo: bool,
    pub responsibilities: PatchField<Vec<String>>,
    pub achievements: PatchField<Vec<String>>,
    pub start_date: PatchField<NaiveDate>,
    pub end_date: PatchField<NaiveDate>,
    pub is_current: PatchField<bool>,
    pub sort_order: PatchField<i32>,
}

#[async_trait]
pub trait ExperienceUseCases: Send + Sync {
    async fn list(&self) -> Result<Vec<ExperienceResult>, ExperienceError>;
    async fn get(&self, id: Uuid) -> Result<ExperienceResult, ExperienceError>;
    async fn create(&self, input: CreateExperienceInput)
        -> Result<ExperienceResult, ExperienceError>;
    async fn patch(
        &self,
        id: Uuid,
        input: PatchExperienceInput,
    ) -> Result<ExperienceResult, ExperienceError>;
    async fn delete(&self, id: Uuid) -> Result<(), ExperienceError>;
    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), ExperienceError>;
}
