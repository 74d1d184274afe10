// src/modules/skill/application/ports.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::content::ordering::ReorderItem;
use crate::shared::content::patch::PatchField;

#[derive(Debug, Clone, Default)]
pub struct SkillListFilter {
    /// Exact category match.
    pub category: Option<String>,
    /// Case-insensitive substring on name.
    pub search: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateSkillData {
    pub name: String,
    pub category: String,
    pub years_experience: i16,
    pub level: i16,
    pub is_highlighted: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct PatchSkillData {
    pub name: PatchField<String>,
    pub category: PatchField<String>,
    pub years_experience: PatchField<i16>,
    pub level: PatchField<i16>,
    pub is_highlighted: PatchField<bool>,
    pub sort_order: PatchField<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillResult {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub years_experience: i16,
    pub level: i16,
    pub is_highlighted: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Skills keyed by their free-text category, categories alphabetical,
/// skills inside a category in manual order.
#[derive(Debug, Clone, Serialize)]
pub struct SkillCategoryGroup {
    pub category: String,
    pub skills: Vec<SkillResult>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillError {
    #[error("Skill not found")]
    NotFound,

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<SkillRepositoryError> for SkillError {
    fn from(e: SkillRepositoryError) -> Self {
        match e {
            SkillRepositoryError::NotFound => SkillError::NotFound,
            SkillRepositoryError::DatabaseError(msg) => SkillError::Repository(msg),
        }
    }
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list(&self, filter: SkillListFilter)
        -> Result<Vec<SkillResult>, SkillRepositoryError>;
    async fn get(&self, id: Uuid) -> Result<SkillResult, SkillRepositoryError>;
    async fn create(&self, data: CreateSkillData) -> Result<SkillResult, SkillRepositoryError>;
    async fn patch(
        &self,
        id: Uuid,
        data: PatchSkillData,
    ) -> Result<SkillResult, SkillRepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), SkillRepositoryError>;
    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), SkillRepositoryError>;
    async fn toggle_highlighted(&self, id: Uuid) -> Result<SkillResult, SkillRepositoryError>;
}

#[async_trait]
pub trait SkillUseCases: Send + Sync {
    async fn list(&self, filter: SkillListFilter) -> Result<Vec<SkillResult>, SkillError>;
    async fn grouped_by_category(&self) -> Result<Vec<SkillCategoryGroup>, SkillError>;
    async fn get(&self, id: Uuid) -> Result<SkillResult, SkillError>;
    async fn create(&self, data: CreateSkillData) -> Result<SkillResult, SkillError>;
    async fn patch(&self, id: Uuid, data: PatchSkillData) -> Result<SkillResult, SkillError>;
    async fn delete(&self, id: Uuid) -> Result<(), SkillError>;
    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), SkillError>;
    async fn toggle_highlighted(&self, id: Uuid) -> Result<SkillResult, SkillError>;
}
