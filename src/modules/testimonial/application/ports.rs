// src/modules/testimonial/application/ports.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::content::media::{ImageUpload, MediaError};
use crate::shared::content::ordering::ReorderItem;
use crate::shared::content::page::{PageRequest, PageResult};
use crate::shared::content::patch::PatchField;

#[derive(Debug, Clone, Default)]
pub struct TestimonialListFilter {
    pub rating: Option<i16>,
    pub project_id: Option<Uuid>,
    pub published_only: bool,
}

#[derive(Debug, Clone)]
pub struct CreateTestimonialData {
    pub client_name: String,
    pub client_avatar: Option<String>,
    pub content: String,
    pub rating: i16,
    pub project_id: Option<Uuid>,
    pub is_featured: bool,
    pub is_published: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct PatchTestimonialData {
    pub client_name: PatchField<String>,
    pub client_avatar: PatchField<String>,
    pub content: PatchField<String>,
    pub rating: PatchField<i16>,
    pub project_id: PatchField<Uuid>,
    pub is_featured: PatchField<bool>,
    pub is_published: PatchField<bool>,
    pub sort_order: PatchField<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestimonialResult {
    pub id: Uuid,
    pub client_name: String,
    pub client_avatar: Option<String>,
    pub content: String,
    pub rating: i16,
    pub project_id: Option<Uuid>,
    pub is_featured: bool,
    pub is_published: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TestimonialRepositoryError {
    #[error("Testimonial not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TestimonialError {
    #[error("Testimonial not found")]
    NotFound,

    /// The supplied project_id does not resolve to a project.
    #[error("Referenced project does not exist")]
    InvalidProjectReference,

    #[error("{0}")]
    InvalidImage(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<TestimonialRepositoryError> for TestimonialError {
    fn from(e: TestimonialRepositoryError) -> Self {
        match e {
            TestimonialRepositoryError::NotFound => TestimonialError::NotFound,
            TestimonialRepositoryError::DatabaseError(msg) => TestimonialError::Repository(msg),
        }
    }
}

impl From<MediaError> for TestimonialError {
    fn from(e: MediaError) -> Self {
        match e {
            MediaError::Storage(inner) => TestimonialError::Repository(inner.to_string()),
            other => TestimonialError::InvalidImage(other.to_string()),
        }
    }
}

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn list(
        &self,
        filter: TestimonialListFilter,
        page: PageRequest,
    ) -> Result<PageResult<TestimonialResult>, TestimonialRepositoryError>;

    /// Published rows in manual order; the public testimonials page.
    async fn list_published(&self) -> Result<Vec<TestimonialResult>, TestimonialRepositoryError>;

    async fn get(&self, id: Uuid) -> Result<TestimonialResult, TestimonialRepositoryError>;

    async fn create(
        &self,
        data: CreateTestimonialData,
    ) -> Result<TestimonialResult, TestimonialRepositoryError>;

    async fn patch(
        &self,
        id: Uuid,
        data: PatchTestimonialData,
    ) -> Result<TestimonialResult, TestimonialRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), TestimonialRepositoryError>;

    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), TestimonialRepositoryError>;

    async fn toggle_featured(
        &self,
        id: Uuid,
    ) -> Result<TestimonialResult, TestimonialRepositoryError>;

    async fn toggle_published(
        &self,
        id: Uuid,
    ) -> Result<TestimonialResult, TestimonialRepositoryError>;

    /// Reference check used while validating create/patch input.
    async fn project_exists(&self, id: Uuid) -> Result<bool, TestimonialRepositoryError>;
}

#[derive(Debug, Clone)]
pub struct CreateTestimonialInput {
    pub client_name: String,
    pub client_avatar: Option<ImageUpload>,
    pub content: String,
    pub rating: i16,
    pub project_id: Option<Uuid>,
    pub is_featured: bool,
    pub is_published: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct PatchTestimonialInput {
    pub client_name: PatchField<String>,
    pub client_avatar: Option<ImageUpload>,
    pub remove_client_avatar: bool,
    pub content: PatchField<String>,
    pub rating: PatchField<i16>,
    pub project_id: PatchField<Uuid>,
    pub is_featured: PatchField<bool>,
    pub is_published: PatchField<bool>,
    pub sort_order: PatchField<i32>,
}

#[async_trait]
pub trait TestimonialUseCases: Send + Sync {
    async fn list(
        &self,
        filter: TestimonialListFilter,
        page: PageRequest,
    ) -> Result<PageResult<TestimonialResult>, TestimonialError>;
    async fn list_published(&self) -> Result<Vec<TestimonialResult>, TestimonialError>;
    async fn get(&self, id: Uuid) -> Result<TestimonialResult, TestimonialError>;
    async fn create(
        &self,
        input: CreateTestimonialInput,
    ) -> Result<TestimonialResult, TestimonialError>;
    async fn patch(
        &self,
        id: Uuid,
        input: PatchTestimonialInput,
    ) -> Result<TestimonialResult, TestimonialError>;
    async fn delete(&self, id: Uuid) -> Result<(), TestimonialError>;
    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), TestimonialError>;
    async fn toggle_featured(&self, id: Uuid) -> Result<TestimonialResult, TestimonialError>;
    async fn toggle_published(&self, id: Uuid) -> Result<TestimonialResult, TestimonialError>;
}
