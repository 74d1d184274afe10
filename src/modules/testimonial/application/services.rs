// src/modules/testimonial/application/services.rs

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::storage::media_storage::MediaStorage;
use crate::modules::testimonial::application::ports::{
    CreateTestimonialData, CreateTestimonialInput, PatchTestimonialData, PatchTestimonialInput,
    TestimonialError, TestimonialListFilter, TestimonialRepository, TestimonialResult,
    TestimonialUseCases,
};
use crate::shared::content::media::{self, ImageKind};
use crate::shared::content::ordering::ReorderItem;
use crate::shared::content::page::{PageRequest, PageResult};
use crate::shared::content::patch::PatchField;

const AVATAR_PREFIX: &str = "testimonials/avatars";

pub struct TestimonialService<R>
where
    R: TestimonialRepository,
{
    repository: R,
    storage: Arc<dyn MediaStorage>,
}

impl<R> TestimonialService<R>
where
    R: TestimonialRepository,
{
    pub fn new(repository: R, storage: Arc<dyn MediaStorage>) -> Self {
        Self {
            repository,
            storage,
        }
    }

    async fn ensure_project_exists(&self, id: Uuid) -> Result<(), TestimonialError> {
        if self.repository.project_exists(id).await? {
            Ok(())
        } else {
            Err(TestimonialError::InvalidProjectReference)
        }
    }
}

#[async_trait]
impl<R> TestimonialUseCases for TestimonialService<R>
where
    R: TestimonialRepository + Send + Sync,
{
    async fn list(
        &self,
        filter: TestimonialListFilter,
        page: PageRequest,
    ) -> Result<PageResult<TestimonialResult>, TestimonialError> {
        self.repository
            .list(filter, page)
            .await
            .map_err(TestimonialError::from)
    }

    async fn list_published(&self) -> Result<Vec<TestimonialResult>, TestimonialError> {
        self.repository
            .list_published()
            .await
            .map_err(TestimonialError::from)
    }

    async fn get(&self, id: Uuid) -> Result<TestimonialResult, TestimonialError> {
        self.repository.get(id).await.map_err(TestimonialError::from)
    }

    async fn create(
        &self,
        input: CreateTestimonialInput,
    ) -> Result<TestimonialResult, TestimonialError> {
        if let Some(project_id) = input.project_id {
            self.ensure_project_exists(project_id).await?;
        }

        let client_avatar = media::store_new(
            self.storage.as_ref(),
            ImageKind::Avatar,
            AVATAR_PREFIX,
            input.client_avatar.as_ref(),
        )
        .await?;

        let data = CreateTestimonialData {
            client_name: input.client_name,
            client_avatar,
            content: input.content,
            rating: input.rating,
            project_id: input.project_id,
            is_featured: input.is_featured,
            is_published: input.is_published,
            sort_order: input.sort_order,
        };

        self.repository
            .create(data)
            .await
            .map_err(TestimonialError::from)
    }

    async fn patch(
        &self,
        id: Uuid,
        input: PatchTestimonialInput,
    ) -> Result<TestimonialResult, TestimonialError> {
        if let PatchField::Value(project_id) = &input.project_id {
            self.ensure_project_exists(*project_id).await?;
        }

        let current = self.repository.get(id).await?;

        let client_avatar = media::apply_single(
            self.storage.as_ref(),
            ImageKind::Avatar,
            AVATAR_PREFIX,
            current.client_avatar.as_deref(),
            input.client_avatar.as_ref(),
            input.remove_client_avatar,
        )
        .await?;

        let data = PatchTestimonialData {
            client_name: input.client_name,
            client_avatar,
            content: input.content,
            rating: input.rating,
            project_id: input.project_id,
            is_featured: input.is_featured,
            is_published: input.is_published,
            sort_order: input.sort_order,
        };

        self.repository
            .patch(id, data)
            .await
            .map_err(TestimonialError::from)
    }

    async fn delete(&self, id: Uuid) -> Result<(), TestimonialError> {
        let current = self.repository.get(id).await?;

        media::delete_all(
            self.storage.as_ref(),
            current.client_avatar.as_deref().into_iter(),
        )
        .await?;

        self.repository
            .delete(id)
            .await
            .map_err(TestimonialError::from)
    }

    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), TestimonialError> {
        self.repository
            .reorder(items)
            .await
            .map_err(TestimonialError::from)
    }

    async fn toggle_featured(&self, id: Uuid) -> Result<TestimonialResult, TestimonialError> {
        self.repository
            .toggle_featured(id)
            .await
            .map_err(TestimonialError::from)
    }

    async fn toggle_published(&self, id: Uuid) -> Result<TestimonialResult, TestimonialError> {
        self.repository
            .toggle_published(id)
            .await
            .map_err(TestimonialError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    use crate::modules::storage::storage_memory::InMemoryMediaStorage;
    use crate::modules::testimonial::application::ports::TestimonialRepositoryError;

    #[derive(Clone, Default)]
    struct MockTestimonialRepo {
        current: Option<TestimonialResult>,
        project_exists: bool,
        created: Arc<Mutex<Option<CreateTestimonialData>>>,
    }

    fn sample_result() -> TestimonialResult {
        TestimonialResult {
            id: Uuid::new_v4(),
            client_name: "Dana".to_string(),
            client_avatar: None,
            content: "Great work".to_string(),
            rating: 5,
            project_id: None,
            is_featured: false,
            is_published: true,
            sort_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[async_trait]
    impl TestimonialRepository for MockTestimonialRepo {
        async fn list(
            &self,
            _filter: TestimonialListFilter,
            _page: PageRequest,
        ) -> Result<PageResult<TestimonialResult>, TestimonialRepositoryError> {
            unimplemented!("not used here")
        }

        async fn list_published(
            &self,
        ) -> Result<Vec<TestimonialResult>, TestimonialRepositoryError> {
            unimplemented!("not used here")
        }

        async fn get(&self, _id: Uuid) -> Result<TestimonialResult, TestimonialRepositoryError> {
            self.current
                .clone()
                .ok_or(TestimonialRepositoryError::NotFound)
        }

        async fn create(
            &self,
            data: CreateTestimonialData,
        ) -> Result<TestimonialResult, TestimonialRepositoryError> {
            *self.created.lock().unwrap() = Some(data);
            Ok(sample_result())
        }

        async fn patch(
            &self,
            _id: Uuid,
            _data: PatchTestimonialData,
        ) -> Result<TestimonialResult, TestimonialRepositoryError> {
            Ok(sample_result())
        }

        async fn delete(&self, _id: Uuid) -> Result<(), TestimonialRepositoryError> {
            Ok(())
        }

        async fn reorder(
            &self,
            _items: Vec<ReorderItem>,
        ) -> Result<(), TestimonialRepositoryError> {
            Ok(())
        }

        async fn toggle_featured(
            &self,
            _id: Uuid,
        ) -> Result<TestimonialResult, TestimonialRepositoryError> {
            unimplemented!("not used here")
        }

        async fn toggle_published(
            &self,
            _id: Uuid,
        ) -> Result<TestimonialResult, TestimonialRepositoryError> {
            unimplemented!("not used here")
        }

        async fn project_exists(&self, _id: Uuid) -> Result<bool, TestimonialRepositoryError> {
            Ok(self.project_exists)
        }
    }

    fn create_input(project_id: Option<Uuid>) -> CreateTestimonialInput {
        CreateTestimonialInput {
            client_name: "Dana".to_string(),
            client_avatar: None,
            content: "Great work".to_string(),
            rating: 5,
            project_id,
            is_featured: false,
            is_published: true,
            sort_order: 0,
        }
    }

    #[tokio::test]
    async fn create_with_unknown_project_is_rejected() {
        let repo = MockTestimonialRepo {
            project_exists: false,
            ..Default::default()
        };
        let service = TestimonialService::new(repo.clone(), Arc::new(InMemoryMediaStorage::new()));

        let err = service
            .create(create_input(Some(Uuid::new_v4())))
            .await
            .unwrap_err();

        assert!(matches!(err, TestimonialError::InvalidProjectReference));
        assert!(repo.created.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn create_with_known_project_passes() {
        let repo = MockTestimonialRepo {
            project_exists: true,
            ..Default::default()
        };
        let service = TestimonialService::new(repo.clone(), Arc::new(InMemoryMediaStorage::new()));

        let project_id = Uuid::new_v4();
        service.create(create_input(Some(project_id))).await.unwrap();

        let created = repo.created.lock().unwrap().clone().unwrap();
        assert_eq!(created.project_id, Some(project_id));
    }

    #[tokio::test]
    async fn create_without_project_skips_reference_check() {
        let repo = MockTestimonialRepo {
            project_exists: false,
            ..Default::default()
        };
        let service = TestimonialService::new(repo.clone(), Arc::new(InMemoryMediaStorage::new()));

        assert!(service.create(create_input(None)).await.is_ok());
    }

    #[tokio::test]
    async fn delete_removes_avatar_file() {
        let seed = "testimonials/avatars/dana.png";
        let mut existing = sample_result();
        existing.client_avatar = Some(seed.to_string());

        let repo = MockTestimonialRepo {
            current: Some(existing),
            ..Default::default()
        };
        let storage = InMemoryMediaStorage::new();
        storage.store(seed, vec![1], "image/png").await.unwrap();

        let service = TestimonialService::new(repo, Arc::new(storage.clone()));
        service.delete(Uuid::new_v4()).await.unwrap();

        assert!(!storage.contains(seed));
    }
}
