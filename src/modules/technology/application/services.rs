// src/modules/technology/application/services.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::technology::application::ports::{
    CreateTechnologyData, CreateTechnologyInput, PatchTechnologyData, TechnologyError,
    TechnologyListFilter, TechnologyRepository, TechnologyResult, TechnologyUseCases,
};
use crate::shared::content::ordering::ReorderItem;
use crate::shared::content::page::{PageRequest, PageResult};
use crate::shared::content::slug::derive_slug;

pub struct TechnologyService<R>
where
    R: TechnologyRepository,
{
    repository: R,
}

impl<R> TechnologyService<R>
where
    R: TechnologyRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> TechnologyUseCases for TechnologyService<R>
where
    R: TechnologyRepository + Send + Sync,
{
    async fn list(
        &self,
        filter: TechnologyListFilter,
        page: PageRequest,
    ) -> Result<PageResult<TechnologyResult>, TechnologyError> {
        self.repository
            .list(filter, page)
            .await
            .map_err(TechnologyError::from)
    }

    async fn list_featured(&self) -> Result<Vec<TechnologyResult>, TechnologyError> {
        self.repository
            .list_featured()
            .await
            .map_err(TechnologyError::from)
    }

    async fn get(&self, id: Uuid) -> Result<TechnologyResult, TechnologyError> {
        self.repository.get(id).await.map_err(TechnologyError::from)
    }

    async fn create(
        &self,
        input: CreateTechnologyInput,
    ) -> Result<TechnologyResult, TechnologyError> {
        let slug = derive_slug(input.slug.as_deref(), &input.name);

        let data = CreateTechnologyData {
            name: input.name,
            slug,
            kind: input.kind,
            color: input.color,
            proficiency: input.proficiency,
            is_featured: input.is_featured,
            sort_order: input.sort_order,
        };

        self.repository
            .create(data)
            .await
            .map_err(TechnologyError::from)
    }

    async fn patch(
        &self,
        id: Uuid,
        data: PatchTechnologyData,
    ) -> Result<TechnologyResult, TechnologyError> {
        self.repository
            .patch(id, data)
            .await
            .map_err(TechnologyError::from)
    }

    async fn delete(&self, id: Uuid) -> Result<(), TechnologyError> {
        self.repository
            .delete(id)
            .await
            .map_err(TechnologyError::from)
    }

    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), TechnologyError> {
        self.repository
            .reorder(items)
            .await
            .map_err(TechnologyError::from)
    }

    async fn toggle_featured(&self, id: Uuid) -> Result<TechnologyResult, TechnologyError> {
        self.repository
            .toggle_featured(id)
            .await
            .map_err(TechnologyError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    use crate::modules::technology::application::ports::{
        TechnologyKind, TechnologyRepositoryError,
    };

    #[derive(Clone, Default)]
    struct MockTechnologyRepo {
        created: Arc<Mutex<Option<CreateTechnologyData>>>,
        delete_result: Option<TechnologyRepositoryError>,
    }

    fn sample_result() -> TechnologyResult {
        TechnologyResult {
            id: Uuid::new_v4(),
            name: "Test Technology".to_string(),
            slug: "test-technology".to_string(),
            kind: TechnologyKind::Tool,
            color: None,
            proficiency: 70,
            is_featured: false,
            sort_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[async_trait]
    impl TechnologyRepository for MockTechnologyRepo {
        async fn list(
            &self,
            _filter: TechnologyListFilter,
            _page: PageRequest,
        ) -> Result<PageResult<TechnologyResult>, TechnologyRepositoryError> {
            unimplemented!("not used here")
        }

        async fn list_featured(
            &self,
        ) -> Result<Vec<TechnologyResult>, TechnologyRepositoryError> {
            unimplemented!("not used here")
        }

        async fn get(&self, _id: Uuid) -> Result<TechnologyResult, TechnologyRepositoryError> {
            unimplemented!("not used here")
        }

        async fn create(
            &self,
            data: CreateTechnologyData,
        ) -> Result<TechnologyResult, TechnologyRepositoryError> {
            *self.created.lock().unwrap() = Some(data);
            Ok(sample_result())
        }

        async fn patch(
            &self,
            _id: Uuid,
            _data: PatchTechnologyData,
        ) -> Result<TechnologyResult, TechnologyRepositoryError> {
            unimplemented!("not used here")
        }

        async fn delete(&self, _id: Uuid) -> Result<(), TechnologyRepositoryError> {
            match &self.delete_result {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        async fn reorder(
            &self,
            _items: Vec<ReorderItem>,
        ) -> Result<(), TechnologyRepositoryError> {
            Ok(())
        }

        async fn toggle_featured(
            &self,
            _id: Uuid,
        ) -> Result<TechnologyResult, TechnologyRepositoryError> {
            unimplemented!("not used here")
        }
    }

    #[tokio::test]
    async fn create_derives_slug_from_name_when_absent() {
        let repo = MockTechnologyRepo::default();
        let service = TechnologyService::new(repo.clone());

        let input = CreateTechnologyInput {
            name: "Test Technology".to_string(),
            slug: None,
            kind: TechnologyKind::Tool,
            color: None,
            proficiency: 70,
            is_featured: false,
            sort_order: 0,
        };

        service.create(input).await.unwrap();

        let created = repo.created.lock().unwrap().clone().unwrap();
        assert_eq!(created.slug, "test-technology");
    }

    #[tokio::test]
    async fn create_normalizes_supplied_slug() {
        let repo = MockTechnologyRepo::default();
        let service = TechnologyService::new(repo.clone());

        let input = CreateTechnologyInput {
            name: "PostgreSQL".to_string(),
            slug: Some("My PG Slug".to_string()),
            kind: TechnologyKind::Database,
            color: None,
            proficiency: 80,
            is_featured: false,
            sort_order: 0,
        };

        service.create(input).await.unwrap();

        let created = repo.created.lock().unwrap().clone().unwrap();
        assert_eq!(created.slug, "my-pg-slug");
    }

    #[tokio::test]
    async fn delete_in_use_surfaces_as_rejection() {
        let repo = MockTechnologyRepo {
            delete_result: Some(TechnologyRepositoryError::InUse(3)),
            ..Default::default()
        };
        let service = TechnologyService::new(repo);

        let err = service.delete(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(err, TechnologyError::InUse(3)));
    }
}
