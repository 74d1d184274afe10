// src/modules/experience/application/services.rs

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::application::ports::{
    CreateExperienceData, CreateExperienceInput, ExperienceError, ExperienceRepository,
    ExperienceResult, ExperienceUseCases, PatchExperienceData, PatchExperienceInput,
};
use crate::modules::storage::media_storage::MediaStorage;
use crate::shared::content::media::{self, ImageKind};
use crate::shared::content::ordering::ReorderItem;
use crate::shared::content::patch::PatchField;

const LOGO_PREFIX: &str = "experiences/logos";

pub struct ExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
    storage: Arc<dyn MediaStorage>,
}

impl<R> ExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R, storage: Arc<dyn MediaStorage>) -> Self {
        Self {
            repository,
            storage,
        }
    }
}

#[async_trait]
impl<R> ExperienceUseCases for ExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn list(&self) -> Result<Vec<ExperienceResult>, ExperienceError> {
        self.repository.list().await.map_err(ExperienceError::from)
    }

    async fn get(&self, id: Uuid) -> Result<ExperienceResult, ExperienceError> {
        self.repository.get(id).await.map_err(ExperienceError::from)
    }

    async fn create(
        &self,
        input: CreateExperienceInput,
    ) -> Result<ExperienceResult, ExperienceError> {
        // An ongoing position never stores an end date, whatever was sent.
        let end_date = if input.is_current {
            None
        } else {
            input.end_date
        };

        let company_logo = media::store_new(
            self.storage.as_ref(),
            ImageKind::Logo,
            LOGO_PREFIX,
            input.company_logo.as_ref(),
        )
        .await?;

        let data = CreateExperienceData {
            title: input.title,
            company: input.company,
            company_logo,
            responsibilities: input.responsibilities,
            achievements: input.achievements,
            start_date: input.start_date,
            end_date,
            is_current: input.is_current,
            sort_order: input.sort_order,
        };

        self.repository
            .create(data)
            .await
            .map_err(ExperienceError::from)
    }

    async fn patch(
        &self,
        id: Uuid,
        input: PatchExperienceInput,
    ) -> Result<ExperienceResult, ExperienceError> {
        let current = self.repository.get(id).await?;

        let company_logo = media::apply_single(
            self.storage.as_ref(),
            ImageKind::Logo,
            LOGO_PREFIX,
            current.company_logo.as_deref(),
            input.company_logo.as_ref(),
            input.remove_company_logo,
        )
        .await?;

        let mut data = PatchExperienceData {
            title: input.title,
            company: input.company,
            company_logo,
            responsibilities: input.responsibilities,
            achievements: input.achievements,
            start_date: input.start_date,
            end_date: input.end_date,
            is_current: input.is_current,
            sort_order: input.sort_order,
        };

        // The flag and the end date are mutually exclusive: whenever the row
        // ends up current, the stored end date must be NULL.
        let effective_is_current = match data.is_current {
            PatchField::Value(v) => v,
            _ => current.is_current,
        };
        if effective_is_current {
            data.end_date = PatchField::Null;
        }

        self.repository
            .patch(id, data)
            .await
            .map_err(ExperienceError::from)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ExperienceError> {
        let current = self.repository.get(id).await?;

        media::delete_all(
            self.storage.as_ref(),
            current.company_logo.as_deref().into_iter(),
        )
        .await?;

        self.repository
            .delete(id)
            .await
            .map_err(ExperienceError::from)
    }

    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), ExperienceError> {
        self.repository
            .reorder(items)
            .await
            .map_err(ExperienceError::from)
    }
}

// ============================================================================
// Tests
// ============================================================================
