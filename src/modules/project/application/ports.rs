// src/modules/project/application/ports.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::content::media::{ImageUpload, MediaError};
use crate::shared::content::ordering::ReorderItem;
use crate::shared::content::page::{PageRequest, PageResult};
use crate::shared::content::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// Domain
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Draft,
    InProgress,
    Completed,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Archived => "archived",
        }
    }

    pub fn from_str_or_draft(s: &str) -> Self {
        match s {
            "in_progress" => ProjectStatus::InProgress,
            "completed" => ProjectStatus::Completed,
            "archived" => ProjectStatus::Archived,
            _ => ProjectStatus::Draft,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectSort {
    /// Manual ordering: sort_order ASC, id ASC.
    ManualOrder,
    #[default]
    Newest,
    Oldest,
    MostViewed,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectListFilter {
    pub status: Option<ProjectStatus>,
    /// Case-insensitive substring on title or description.
    pub search: Option<String>,
    pub technology_id: Option<Uuid>,
    pub published_only: bool,
    pub featured_only: bool,
}

//
// ──────────────────────────────────────────────────────────
// Repository DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateProjectData {
    pub title: String,
    /// Already derived/normalized by the service.
    pub slug: String,
    pub description: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub thumbnail: Option<String>,
    pub gallery: Vec<String>,
    pub features: Vec<String>,
    pub status: ProjectStatus,
    pub is_featured: bool,
    pub is_published: bool,
    pub sort_order: i32,
    /// Full association set; every id attached, nothing else kept.
    pub technology_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct PatchProjectData {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub content: PatchField<String>,
    pub featured_image: PatchField<String>,
    pub thumbnail: PatchField<String>,
    pub gallery: PatchField<Vec<String>>,
    pub features: PatchField<Vec<String>>,
    pub status: PatchField<ProjectStatus>,
    pub is_featured: PatchField<bool>,
    pub sort_order: PatchField<i32>,
    /// `Value(ids)` replaces the association set wholesale: attach all
    /// given ids, detach everything absent from the list.
    pub technology_ids: PatchField<Vec<Uuid>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectTechnologyItem {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub thumbnail: Option<String>,
    pub gallery: Vec<String>,
    pub features: Vec<String>,
    pub status: ProjectStatus,
    pub is_featured: bool,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub views_count: i32,
    pub likes_count: i32,
    pub sort_order: i32,
    pub technologies: Vec<ProjectTechnologyItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectCardView {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub status: ProjectStatus,
    pub is_featured: bool,
    pub is_published: bool,
    pub views_count: i32,
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
pub enum ProjectRepositoryError {
    /// Project doesn't exist or is soft-deleted.
    #[error("Project not found")]
    NotFound,

    /// Global unique slug violated at INSERT time.
    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Slug already exists")]
    SlugAlreadyExists,

    /// One or more supplied technology ids do not resolve.
    #[error("Referenced technology does not exist")]
    InvalidTechnologyReference,

    #[error("{0}")]
    InvalidImage(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<ProjectRepositoryError> for ProjectError {
    fn from(e: ProjectRepositoryError) -> Self {
        match e {
            ProjectRepositoryError::NotFound => ProjectError::NotFound,
            ProjectRepositoryError::SlugAlreadyExists => ProjectError::SlugAlreadyExists,
            ProjectRepositoryError::DatabaseError(msg)
            | ProjectRepositoryError::SerializationError(msg) => ProjectError::Repository(msg),
        }
    }
}

impl From<MediaError> for ProjectError {
    fn from(e: MediaError) -> Self {
        match e {
            MediaError::Storage(inner) => ProjectError::Repository(inner.to_string()),
            other => ProjectError::InvalidImage(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Outgoing ports (command / query split)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, data: CreateProjectData)
        -> Result<ProjectView, ProjectRepositoryError>;

    async fn patch(
        &self,
        id: Uuid,
        data: PatchProjectData,
    ) -> Result<ProjectView, ProjectRepositoryError>;

    /// Soft delete. Media columns are cleared by the caller via `patch`
    /// before this point so no stored file stays referenced.
    async fn soft_delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError>;

    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), ProjectRepositoryError>;

    async fn toggle_featured(&self, id: Uuid) -> Result<ProjectView, ProjectRepositoryError>;

    /// Publishing stamps published_at, unpublishing clears it.
    async fn toggle_published(&self, id: Uuid) -> Result<ProjectView, ProjectRepositoryError>;
}

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    async fn list(
        &self,
        filter: ProjectListFilter,
        sort: ProjectSort,
        page: PageRequest,
    ) -> Result<PageResult<ProjectCardView>, ProjectRepositoryError>;

    async fn get(&self, id: Uuid) -> Result<ProjectView, ProjectRepositoryError>;

    /// Published-only read by slug; each call bumps views_count
    /// (read-modify-write, may under-count under concurrent hits).
    async fn get_published_by_slug(&self, slug: &str)
        -> Result<ProjectView, ProjectRepositoryError>;

    /// Non-atomic like bump for the public like endpoint.
    async fn increment_likes(&self, slug: &str) -> Result<ProjectView, ProjectRepositoryError>;

    /// Featured + published subset for the public home page.
    async fn list_featured_published(&self)
        -> Result<Vec<ProjectCardView>, ProjectRepositoryError>;

    /// True when every id resolves to a live technology row.
    async fn technologies_exist(&self, ids: &[Uuid]) -> Result<bool, ProjectRepositoryError>;
}

//
// ──────────────────────────────────────────────────────────
// Incoming port
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateProjectInput {
    pub title: String,
    pub slug: Option<String>,
    pub description: String,
    pub content: String,
    pub featured_image: Option<ImageUpload>,
    pub thumbnail: Option<ImageUpload>,
    pub gallery: Vec<ImageUpload>,
    pub features: Vec<String>,
    pub status: ProjectStatus,
    pub is_featured: bool,
    pub is_published: bool,
    pub sort_order: i32,
    pub technology_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct PatchProjectInput {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub content: PatchField<String>,
    pub featured_image: Option<ImageUpload>,
    pub remove_featured_image: bool,
    pub thumbnail: Option<ImageUpload>,
    pub remove_thumbnail: bool,
    /// `Some(uploads)` replaces the whole gallery; `None` keeps it.
    pub gallery: Option<Vec<ImageUpload>>,
    pub features: PatchField<Vec<String>>,
    pub status: PatchField<ProjectStatus>,
    pub is_featured: PatchField<bool>,
    pub sort_order: PatchField<i32>,
    pub technology_ids: PatchField<Vec<Uuid>>,
}

#[async_trait]
pub trait ProjectUseCases: Send + Sync {
    async fn list(
        &self,
        filter: ProjectListFilter,
        sort: ProjectSort,
        page: PageRequest,
    ) -> Result<PageResult<ProjectCardView>, ProjectError>;
    async fn get(&self, id: Uuid) -> Result<ProjectView, ProjectError>;
    async fn get_published_by_slug(&self, slug: &str) -> Result<ProjectView, ProjectError>;
    async fn like_by_slug(&self, slug: &str) -> Result<ProjectView, ProjectError>;
    async fn list_featured_published(&self) -> Result<Vec<ProjectCardView>, ProjectError>;
    async fn create(&self, input: CreateProjectInput) -> Result<ProjectView, ProjectError>;
    async fn patch(&self, id: Uuid, input: PatchProjectInput)
        -> Result<ProjectView, ProjectError>;
    async fn delete(&self, id: Uuid) -> Result<(), ProjectError>;
    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), ProjectError>;
    async fn toggle_featured(&self, id: Uuid) -> Result<ProjectView, ProjectError>;
    async fn toggle_published(&self, id: Uuid) -> Result<ProjectView, ProjectError>;
}
