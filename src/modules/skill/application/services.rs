// src/modules/skill/application/services.rs

use async_trait::async_trait;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::modules::skill::application::ports::{
    CreateSkillData, PatchSkillData, SkillCategoryGroup, SkillError, SkillListFilter,
    SkillRepository, SkillResult, SkillUseCases,
};
use crate::shared::content::ordering::ReorderItem;

pub struct SkillService<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> SkillService<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

/// Grouping is insertion-order-independent: categories come out sorted, the
/// skills inside keep the repository's manual order.
fn group_by_category(skills: Vec<SkillResult>) -> Vec<SkillCategoryGroup> {
    let mut groups: BTreeMap<String, Vec<SkillResult>> = BTreeMap::new();

    for skill in skills {
        groups.entry(skill.category.clone()).or_default().push(skill);
    }

    groups
        .into_iter()
        .map(|(category, skills)| SkillCategoryGroup { category, skills })
        .collect()
}

#[async_trait]
impl<R> SkillUseCases for SkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn list(&self, filter: SkillListFilter) -> Result<Vec<SkillResult>, SkillError> {
        self.repository.list(filter).await.map_err(SkillError::from)
    }

    async fn grouped_by_category(&self) -> Result<Vec<SkillCategoryGroup>, SkillError> {
        let skills = self.repository.list(SkillListFilter::default()).await?;
        Ok(group_by_category(skills))
    }

    async fn get(&self, id: Uuid) -> Result<SkillResult, SkillError> {
        self.repository.get(id).await.map_err(SkillError::from)
    }

    async fn create(&self, data: CreateSkillData) -> Result<SkillResult, SkillError> {
        self.repository.create(data).await.map_err(SkillError::from)
    }

    async fn patch(&self, id: Uuid, data: PatchSkillData) -> Result<SkillResult, SkillError> {
        self.repository
            .patch(id, data)
            .await
            .map_err(SkillError::from)
    }

    async fn delete(&self, id: Uuid) -> Result<(), SkillError> {
        self.repository.delete(id).await.map_err(SkillError::from)
    }

    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), SkillError> {
        self.repository
            .reorder(items)
            .await
            .map_err(SkillError::from)
    }

    async fn toggle_highlighted(&self, id: Uuid) -> Result<SkillResult, SkillError> {
        self.repository
            .toggle_highlighted(id)
            .await
            .map_err(SkillError::from)
    }
}
