// src/modules/education/application/services.rs

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::education::application::ports::{
    CreateEducationData, CreateEducationInput, EducationError, EducationRepository,
    EducationResult, EducationUseCases, PatchEducationData, PatchEducationInput,
};
use crate::modules::storage::media_storage::MediaStorage;
use crate::shared::content::media::{self, ImageKind};
use crate::shared::content::ordering::ReorderItem;
use crate::shared::content::patch::PatchField;

const LOGO_PREFIX: &str = "educations/logos";

pub struct EducationService<R>
where
    R: EducationRepository,
{
    repository: R,
    storage: Arc<dyn MediaStorage>,
}

impl<R> EducationService<R>
where
    R: EducationRepository,
{
    pub fn new(repository: R, storage: Arc<dyn MediaStorage>) -> Self {
        Self {
            repository,
            storage,
        }
    }
}

#[async_trait]
impl<R> EducationUseCases for EducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn list(&self) -> Result<Vec<EducationResult>, EducationError> {
        self.repository.list().await.map_err(EducationError::from)
    }

    async fn get(&self, id: Uuid) -> Result<EducationResult, EducationError> {
        self.repository.get(id).await.map_err(EducationError::from)
    }

    async fn create(&self, input: CreateEducationInput) -> Result<EducationResult, EducationError> {
        let end_date = if input.is_current {
            None
        } else {
            input.end_date
        };

        let institution_logo = media::store_new(
            self.storage.as_ref(),
            ImageKind::Logo,
            LOGO_PREFIX,
            input.institution_logo.as_ref(),
        )
        .await?;

        let data = CreateEducationData {
            degree: input.degree,
            institution: input.institution,
            institution_logo,
            field_of_study: input.field_of_study,
            start_date: input.start_date,
            end_date,
            is_current: input.is_current,
            sort_order: input.sort_order,
        };

        self.repository
            .create(data)
            .await
            .map_err(EducationError::from)
    }

    async fn patch(
        &self,
        id: Uuid,
        input: PatchEducationInput,
    ) -> Result<EducationResult, EducationError> {
        let current = self.repository.get(id).await?;

        let institution_logo = media::apply_single(
            self.storage.as_ref(),
            ImageKind::Logo,
            LOGO_PREFIX,
            current.institution_logo.as_deref(),
            input.institution_logo.as_ref(),
            input.remove_institution_logo,
        )
        .await?;

        let mut data = PatchEducationData {
            degree: input.degree,
            institution: input.institution,
            institution_logo,
            field_of_study: input.field_of_study,
            start_date: input.start_date,
            end_date: input.end_date,
            is_current: input.is_current,
            sort_order: input.sort_order,
        };

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
            .map_err(EducationError::from)
    }

    async fn delete(&self, id: Uuid) -> Result<(), EducationError> {
        let current = self.repository.get(id).await?;

        media::delete_all(
            self.storage.as_ref(),
            current.institution_logo.as_deref().into_iter(),
        )
        .await?;

        self.repository
            .delete(id)
            .await
            .map_err(EducationError::from)
    }

    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), EducationError> {
        self.repository
            .reorder(items)
            .await
            .map_err(EducationError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use std::sync::Mutex;

    use crate::modules::education::application::ports::EducationRepositoryError;
    use crate::modules::storage::storage_memory::InMemoryMediaStorage;

    #[derive(Clone, Default)]
    struct MockEducationRepo {
        current: Option<EducationResult>,
        created: Arc<Mutex<Option<CreateEducationData>>>,
        patched: Arc<Mutex<Option<PatchEducationData>>>,
    }

    fn sample_result() -> EducationResult {
        EducationResult {
            id: Uuid::new_v4(),
            degree: "BSc".to_string(),
            institution: "State University".to_string(),
            institution_logo: None,
            field_of_study: "Computer Science".to_string(),
            start_date: NaiveDate::from_ymd_opt(2014, 9, 1).unwrap(),
            end_date: None,
            is_current: false,
            sort_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[async_trait]
    impl EducationRepository for MockEducationRepo {
        async fn list(&self) -> Result<Vec<EducationResult>, EducationRepositoryError> {
            Ok(vec![])
        }

        async fn get(&self, _id: Uuid) -> Result<EducationResult, EducationRepositoryError> {
            self.current
                .clone()
                .ok_or(EducationRepositoryError::NotFound)
        }

        async fn create(
            &self,
            data: CreateEducationData,
        ) -> Result<EducationResult, EducationRepositoryError> {
            *self.created.lock().unwrap() = Some(data);
            Ok(sample_result())
        }

        async fn patch(
            &self,
            _id: Uuid,
            data: PatchEducationData,
        ) -> Result<EducationResult, EducationRepositoryError> {
            *self.patched.lock().unwrap() = Some(data);
            Ok(sample_result())
        }

        async fn delete(&self, _id: Uuid) -> Result<(), EducationRepositoryError> {
            Ok(())
        }

        async fn reorder(&self, _items: Vec<ReorderItem>) -> Result<(), EducationRepositoryError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn create_ongoing_study_nullifies_end_date() {
        let repo = MockEducationRepo::default();
        let service = EducationService::new(repo.clone(), Arc::new(InMemoryMediaStorage::new()));

        let input = CreateEducationInput {
            degree: "MSc".to_string(),
            institution: "State University".to_string(),
            institution_logo: None,
            field_of_study: "Distributed Systems".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            end_date: Some(NaiveDate::from_ymd_opt(2027, 6, 30).unwrap()),
            is_current: true,
            sort_order: 0,
        };

        service.create(input).await.unwrap();

        let created = repo.created.lock().unwrap().clone().unwrap();
        assert!(created.end_date.is_none());
    }

    #[tokio::test]
    async fn patch_marking_current_clears_end_date() {
        let mut existing = sample_result();
        existing.end_date = Some(NaiveDate::from_ymd_opt(2018, 6, 30).unwrap());

        let repo = MockEducationRepo {
            current: Some(existing),
            ..Default::default()
        };
        let service = EducationService::new(repo.clone(), Arc::new(InMemoryMediaStorage::new()));

        let input = PatchEducationInput {
            is_current: PatchField::Value(true),
            ..Default::default()
        };

        service.patch(Uuid::new_v4(), input).await.unwrap();

        let patched = repo.patched.lock().unwrap().clone().unwrap();
        assert!(patched.end_date.is_null());
    }

    #[tokio::test]
    async fn delete_removes_stored_logo() {
        let seed = "educations/logos/seal.png";
        let mut existing = sample_result();
        existing.institution_logo = Some(seed.to_string());

        let repo = MockEducationRepo {
            current: Some(existing),
            ..Default::default()
        };
        let storage = InMemoryMediaStorage::new();
        storage.store(seed, vec![7], "image/png").await.unwrap();

        let service = EducationService::new(repo, Arc::new(storage.clone()));
        service.delete(Uuid::new_v4()).await.unwrap();

        assert!(!storage.contains(seed));
    }

    #[tokio::test]
    async fn patch_missing_row_is_not_found() {
        let repo = MockEducationRepo::default();
        let service = EducationService::new(repo, Arc::new(InMemoryMediaStorage::new()));

        let err = service
            .patch(Uuid::new_v4(), PatchEducationInput::default())
            .await
            .unwrap_err();

        assert!(matches!(err, EducationError::NotFound));
    }
}
