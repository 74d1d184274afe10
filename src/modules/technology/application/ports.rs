// src/modules/technology/application/ports.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::content::ordering::ReorderItem;
use crate::shared::content::page::{PageRequest, PageResult};
use crate::shared::content::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// Domain
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechnologyKind {
    Language,
    Framework,
    Tool,
    Database,
    #[default]
    Other,
}

impl TechnologyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TechnologyKind::Language => "language",
            TechnologyKind::Framework => "framework",
            TechnologyKind::Tool => "tool",
            TechnologyKind::Database => "database",
            TechnologyKind::Other => "other",
        }
    }

    pub fn from_str_or_other(s: &str) -> Self {
        match s {
            "language" => TechnologyKind::Language,
            "framework" => TechnologyKind::Framework,
            "tool" => TechnologyKind::Tool,
            "database" => TechnologyKind::Database,
            _ => TechnologyKind::Other,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TechnologyListFilter {
    pub search: Option<String>,
    pub kind: Option<TechnologyKind>,
    pub featured_only: bool,
}

#[derive(Debug, Clone)]
pub struct CreateTechnologyData {
    pub name: String,
    /// Already derived/normalized by the service.
    pub slug: String,
    pub kind: TechnologyKind,
    pub color: Option<String>,
    pub proficiency: i16,
    pub is_featured: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct PatchTechnologyData {
    pub name: PatchField<String>,
    pub kind: PatchField<TechnologyKind>,
    pub color: PatchField<String>,
    pub proficiency: PatchField<i16>,
    pub is_featured: PatchField<bool>,
    pub sort_order: PatchField<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TechnologyResult {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub kind: TechnologyKind,
    pub color: Option<String>,
    pub proficiency: i16,
    pub is_featured: bool,
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
pub enum TechnologyRepositoryError {
    #[error("Technology not found")]
    NotFound,

    #[error("Slug already exists")]
    SlugAlreadyExists,

    /// Still referenced by at least one project; deletion is rejected,
    /// never cascaded.
    #[error("Technology is referenced by {0} project(s)")]
    InUse(u64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TechnologyError {
    #[error("Technology not found")]
    NotFound,

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Technology is referenced by {0} project(s)")]
    InUse(u64),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<TechnologyRepositoryError> for TechnologyError {
    fn from(e: TechnologyRepositoryError) -> Self {
        match e {
            TechnologyRepositoryError::NotFound => TechnologyError::NotFound,
            TechnologyRepositoryError::SlugAlreadyExists => TechnologyError::SlugAlreadyExists,
            TechnologyRepositoryError::InUse(n) => TechnologyError::InUse(n),
            TechnologyRepositoryError::DatabaseError(msg) => TechnologyError::Repository(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Ports
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait TechnologyRepository: Send + Sync {
    async fn list(
        &self,
        filter: TechnologyListFilter,
        page: PageRequest,
    ) -> Result<PageResult<TechnologyResult>, TechnologyRepositoryError>;

    /// Unpaginated featured subset for the public home page.
    async fn list_featured(&self) -> Result<Vec<TechnologyResult>, TechnologyRepositoryError>;

    async fn get(&self, id: Uuid) -> Result<TechnologyResult, TechnologyRepositoryError>;

    async fn create(
        &self,
        data: CreateTechnologyData,
    ) -> Result<TechnologyResult, TechnologyRepositoryError>;

    async fn patch(
        &self,
        id: Uuid,
        data: PatchTechnologyData,
    ) -> Result<TechnologyResult, TechnologyRepositoryError>;

    /// Referential guard lives here: rejected with `InUse` while any
    /// project still points at the row.
    async fn delete(&self, id: Uuid) -> Result<(), TechnologyRepositoryError>;

    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), TechnologyRepositoryError>;

    async fn toggle_featured(
        &self,
        id: Uuid,
    ) -> Result<TechnologyResult, TechnologyRepositoryError>;
}

#[derive(Debug, Clone)]
pub struct CreateTechnologyInput {
    pub name: String,
    pub slug: Option<String>,
    pub kind: TechnologyKind,
    pub color: Option<String>,
    pub proficiency: i16,
    pub is_featured: bool,
    pub sort_order: i32,
}

#[async_trait]
pub trait TechnologyUseCases: Send + Sync {
    async fn list(
        &self,
        filter: TechnologyListFilter,
        page: PageRequest,
    ) -> Result<PageResult<TechnologyResult>, TechnologyError>;
    async fn list_featured(&self) -> Result<Vec<TechnologyResult>, TechnologyError>;
    async fn get(&self, id: Uuid) -> Result<TechnologyResult, TechnologyError>;
    async fn create(
        &self,
        input: CreateTechnologyInput,
    ) -> Result<TechnologyResult, TechnologyError>;
    async fn patch(
        &self,
        id: Uuid,
        data: PatchTechnologyData,
    ) -> Result<TechnologyResult, TechnologyError>;
    async fn delete(&self, id: Uuid) -> Result<(), TechnologyError>;
    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), TechnologyError>;
    async fn toggle_featured(&self, id: Uuid) -> Result<TechnologyResult, TechnologyError>;
}
