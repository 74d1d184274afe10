// src/modules/project/application/services.rs

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::application::ports::{
    CreateProjectData, CreateProjectInput, PatchProjectData, PatchProjectInput, ProjectCardView,
    ProjectError, ProjectListFilter, ProjectQuery, ProjectRepository, ProjectSort, ProjectUseCases,
    ProjectView,
};
use crate::modules::storage::media_storage::MediaStorage;
use crate::shared::content::media::{self, ImageKind};
use crate::shared::content::ordering::ReorderItem;
use crate::shared::content::page::{PageRequest, PageResult};
use crate::shared::content::patch::PatchField;
use crate::shared::content::slug::derive_slug;

const FEATURED_PREFIX: &str = "projects/featured";
const THUMBNAIL_PREFIX: &str = "projects/thumbnails";
const GALLERY_PREFIX: &str = "projects/gallery";

pub struct ProjectService<R, Q>
where
    R: ProjectRepository,
    Q: ProjectQuery,
{
    repository: R,
    query: Q,
    storage: Arc<dyn MediaStorage>,
}

impl<R, Q> ProjectService<R, Q>
where
    R: ProjectRepository,
    Q: ProjectQuery,
{
    pub fn new(repository: R, query: Q, storage: Arc<dyn MediaStorage>) -> Self {
        Self {
            repository,
            query,
            storage,
        }
    }

    async fn ensure_technologies_exist(&self, ids: &[Uuid]) -> Result<(), ProjectError> {
        if ids.is_empty() {
            return Ok(());
        }
        if self.query.technologies_exist(ids).await? {
            Ok(())
        } else {
            Err(ProjectError::InvalidTechnologyReference)
        }
    }
}

#[async_trait]
impl<R, Q> ProjectUseCases for ProjectService<R, Q>
where
    R: ProjectRepository + Send + Sync,
    Q: ProjectQuery + Send + Sync,
{
    async fn list(
        &self,
        filter: ProjectListFilter,
        sort: ProjectSort,
        page: PageRequest,
    ) -> Result<PageResult<ProjectCardView>, ProjectError> {
        self.query
            .list(filter, sort, page)
            .await
            .map_err(ProjectError::from)
    }

    async fn get(&self, id: Uuid) -> Result<ProjectView, ProjectError> {
        self.query.get(id).await.map_err(ProjectError::from)
    }

    async fn get_published_by_slug(&self, slug: &str) -> Result<ProjectView, ProjectError> {
        self.query
            .get_published_by_slug(slug)
            .await
            .map_err(ProjectError::from)
    }

    async fn like_by_slug(&self, slug: &str) -> Result<ProjectView, ProjectError> {
        self.query
            .increment_likes(slug)
            .await
            .map_err(ProjectError::from)
    }

    async fn list_featured_published(&self) -> Result<Vec<ProjectCardView>, ProjectError> {
        self.query
            .list_featured_published()
            .await
            .map_err(ProjectError::from)
    }

    async fn create(&self, input: CreateProjectInput) -> Result<ProjectView, ProjectError> {
        self.ensure_technologies_exist(&input.technology_ids).await?;

        let slug = derive_slug(input.slug.as_deref(), &input.title);

        let featured_image = media::store_new(
            self.storage.as_ref(),
            ImageKind::FeaturedImage,
            FEATURED_PREFIX,
            input.featured_image.as_ref(),
        )
        .await?;

        let thumbnail = media::store_new(
            self.storage.as_ref(),
            ImageKind::Thumbnail,
            THUMBNAIL_PREFIX,
            input.thumbnail.as_ref(),
        )
        .await?;

        let mut gallery = Vec::with_capacity(input.gallery.len());
        for upload in &input.gallery {
            let key = media::store_new(
                self.storage.as_ref(),
                ImageKind::GalleryImage,
                GALLERY_PREFIX,
                Some(upload),
            )
            .await?;
            gallery.extend(key);
        }

        let data = CreateProjectData {
            title: input.title,
            slug,
            description: input.description,
            content: input.content,
            featured_image,
            thumbnail,
            gallery,
            features: input.features,
            status: input.status,
            is_featured: input.is_featured,
            is_published: input.is_published,
            sort_order: input.sort_order,
            technology_ids: input.technology_ids,
        };

        self.repository
            .create(data)
            .await
            .map_err(ProjectError::from)
    }

    async fn patch(
        &self,
        id: Uuid,
        input: PatchProjectInput,
    ) -> Result<ProjectView, ProjectError> {
        if let PatchField::Value(ids) = &input.technology_ids {
            self.ensure_technologies_exist(ids).await?;
        }

        let current = self.query.get(id).await?;

        let featured_image = media::apply_single(
            self.storage.as_ref(),
            ImageKind::FeaturedImage,
            FEATURED_PREFIX,
            current.featured_image.as_deref(),
            input.featured_image.as_ref(),
            input.remove_featured_image,
        )
        .await?;

        let thumbnail = media::apply_single(
            self.storage.as_ref(),
            ImageKind::Thumbnail,
            THUMBNAIL_PREFIX,
            current.thumbnail.as_deref(),
            input.thumbnail.as_ref(),
            input.remove_thumbnail,
        )
        .await?;

        let gallery = media::replace_gallery(
            self.storage.as_ref(),
            GALLERY_PREFIX,
            &current.gallery,
            input.gallery.as_deref(),
        )
        .await?;

        let data = PatchProjectData {
            title: input.title,
            description: input.description,
            content: input.content,
            featured_image,
            thumbnail,
            gallery,
            features: input.features,
            status: input.status,
            is_featured: input.is_featured,
            sort_order: input.sort_order,
            technology_ids: input.technology_ids,
        };

        self.repository
            .patch(id, data)
            .await
            .map_err(ProjectError::from)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectError> {
        let current = self.query.get(id).await?;

        // Every owned file goes before the row is tombstoned; the media
        // columns are cleared so the soft-deleted row references nothing.
        let mut owned: Vec<&str> = Vec::new();
        owned.extend(current.featured_image.as_deref());
        owned.extend(current.thumbnail.as_deref());
        owned.extend(current.gallery.iter().map(String::as_str));

        media::delete_all(self.storage.as_ref(), owned).await?;

        let clear_media = PatchProjectData {
            featured_image: if current.featured_image.is_some() {
                PatchField::Null
            } else {
                PatchField::Unset
            },
            thumbnail: if current.thumbnail.is_some() {
                PatchField::Null
            } else {
                PatchField::Unset
            },
            gallery: if current.gallery.is_empty() {
                PatchField::Unset
            } else {
                PatchField::Value(vec![])
            },
            ..Default::default()
        };

        if clear_media.featured_image.is_null()
            || clear_media.thumbnail.is_null()
            || clear_media.gallery.is_value()
        {
            self.repository.patch(id, clear_media).await?;
        }

        self.repository
            .soft_delete(id)
            .await
            .map_err(ProjectError::from)
    }

    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), ProjectError> {
        self.repository
            .reorder(items)
            .await
            .map_err(ProjectError::from)
    }

    async fn toggle_featured(&self, id: Uuid) -> Result<ProjectView, ProjectError> {
        self.repository
            .toggle_featured(id)
            .await
            .map_err(ProjectError::from)
    }

    async fn toggle_published(&self, id: Uuid) -> Result<ProjectView, ProjectError> {
        self.repository
            .toggle_published(id)
            .await
            .map_err(ProjectError::from)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
    use chrono::Utc;
    use std::sync::Mutex;

    use crate::modules::project::application::ports::{ProjectRepositoryError, ProjectStatus};
    use crate::modules::storage::storage_memory::InMemoryMediaStorage;
    use crate::shared::content::media::ImageUpload;

    fn sample_view() -> ProjectView {
        ProjectView {
            id: Uuid::new_v4(),
            title: "Portfolio Site".to_string(),
            slug: "portfolio-site".to_string(),
            description: "desc".to_string(),
            content: "content".to_string(),
            featured_image: None,
            thumbnail: None,
            gallery: vec![],
            features: vec![],
            status: ProjectStatus::Completed,
            is_featured: false,
            is_published: false,
            published_at: None,
            views_count: 0,
            likes_count: 0,
            sort_order: 0,
            technologies: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[derive(Clone, Default)]
    struct MockProjectRepo {
        created: Arc<Mutex<Option<CreateProjectData>>>,
        patches: Arc<Mutex<Vec<PatchProjectData>>>,
        soft_deleted: Arc<Mutex<Vec<Uuid>>>,
    }

    #[async_trait]
    impl ProjectRepository for MockProjectRepo {
        async fn create(
            &self,
            data: CreateProjectData,
        ) -> Result<ProjectView, ProjectRepositoryError> {
            let mut view = sample_view();
            view.slug = data.slug.clone();
            *self.created.lock().unwrap() = Some(data);
            Ok(view)
        }

        async fn patch(
            &self,
            _id: Uuid,
            data: PatchProjectData,
        ) -> Result<ProjectView, ProjectRepositoryError> {
            self.patches.lock().unwrap().push(data);
            Ok(sample_view())
        }

        async fn soft_delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
            self.soft_deleted.lock().unwrap().push(id);
            Ok(())
        }

        async fn reorder(&self, _items: Vec<ReorderItem>) -> Result<(), ProjectRepositoryError> {
            Ok(())
        }

        async fn toggle_featured(
            &self,
            _id: Uuid,
        ) -> Result<ProjectView, ProjectRepositoryError> {
            unimplemented!("not used here")
        }

        async fn toggle_published(
            &self,
            _id: Uuid,
        ) -> Result<ProjectView, ProjectRepositoryError> {
            unimplemented!("not used here")
        }
    }

    #[derive(Clone, Default)]
    struct MockProjectQuery {
        current: Option<ProjectView>,
        technologies_exist: bool,
    }

    #[async_trait]
    impl ProjectQuery for MockProjectQuery {
        async fn list(
            &self,
            _filter: ProjectListFilter,
            _sort: ProjectSort,
            _page: PageRequest,
        ) -> Result<PageResult<ProjectCardView>, ProjectRepositoryError> {
            unimplemented!("not used here")
        }

        async fn get(&self, _id: Uuid) -> Result<ProjectView, ProjectRepositoryError> {
            self.current.clone().ok_or(ProjectRepositoryError::NotFound)
        }

        async fn get_published_by_slug(
            &self,
            _slug: &str,
        ) -> Result<ProjectView, ProjectRepositoryError> {
            unimplemented!("not used here")
        }

        async fn increment_likes(
            &self,
            _slug: &str,
        ) -> Result<ProjectView, ProjectRepositoryError> {
            unimplemented!("not used here")
        }

        async fn list_featured_published(
            &self,
        ) -> Result<Vec<ProjectCardView>, ProjectRepositoryError> {
            unimplemented!("not used here")
        }

        async fn technologies_exist(
            &self,
            _ids: &[Uuid],
        ) -> Result<bool, ProjectRepositoryError> {
            Ok(self.technologies_exist)
        }
    }

    fn png_upload() -> ImageUpload {
        ImageUpload {
            file_name: "shot.png".to_string(),
            content_type: "image/png".to_string(),
            data: BASE64.encode([1u8, 2]),
        }
    }

    fn create_input() -> CreateProjectInput {
        CreateProjectInput {
            title: "Portfolio Site".to_string(),
            slug: None,
            description: "desc".to_string(),
            content: "content".to_string(),
            featured_image: None,
            thumbnail: None,
            gallery: vec![],
            features: vec![],
            status: ProjectStatus::Completed,
            is_featured: false,
            is_published: false,
            sort_order: 0,
            technology_ids: vec![],
        }
    }

    fn service(
        repo: MockProjectRepo,
        query: MockProjectQuery,
    ) -> (
        ProjectService<MockProjectRepo, MockProjectQuery>,
        InMemoryMediaStorage,
    ) {
        let storage = InMemoryMediaStorage::new();
        (
            ProjectService::new(repo, query, Arc::new(storage.clone())),
            storage,
        )
    }

    #[tokio::test]
    async fn create_derives_slug_from_title() {
        let repo = MockProjectRepo::default();
        let (svc, _storage) = service(repo.clone(), MockProjectQuery::default());

        svc.create(create_input()).await.unwrap();

        let created = repo.created.lock().unwrap().clone().unwrap();
        assert_eq!(created.slug, "portfolio-site");
    }

    #[tokio::test]
    async fn create_with_unknown_technology_is_rejected() {
        let repo = MockProjectRepo::default();
        let query = MockProjectQuery {
            technologies_exist: false,
            ..Default::default()
        };
        let (svc, _storage) = service(repo.clone(), query);

        let mut input = create_input();
        input.technology_ids = vec![Uuid::new_v4()];

        let err = svc.create(input).await.unwrap_err();

        assert!(matches!(err, ProjectError::InvalidTechnologyReference));
        assert!(repo.created.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn create_stores_gallery_in_order() {
        let repo = MockProjectRepo::default();
        let query = MockProjectQuery {
            technologies_exist: true,
            ..Default::default()
        };
        let (svc, storage) = service(repo.clone(), query);

        let mut input = create_input();
        input.gallery = vec![png_upload(), png_upload(), png_upload()];

        svc.create(input).await.unwrap();

        let created = repo.created.lock().unwrap().clone().unwrap();
        assert_eq!(created.gallery.len(), 3);
        assert_eq!(storage.object_count(), 3);
        assert!(created.gallery.iter().all(|k| storage.contains(k)));
    }

    #[tokio::test]
    async fn delete_removes_all_owned_files_and_clears_columns() {
        let mut existing = sample_view();
        existing.featured_image = Some("projects/featured/a.png".to_string());
        existing.thumbnail = Some("projects/thumbnails/b.png".to_string());
        existing.gallery = vec![
            "projects/gallery/c.png".to_string(),
            "projects/gallery/d.png".to_string(),
        ];

        let repo = MockProjectRepo::default();
        let query = MockProjectQuery {
            current: Some(existing.clone()),
            ..Default::default()
        };
        let (svc, storage) = service(repo.clone(), query);

        for key in ["projects/featured/a.png", "projects/thumbnails/b.png", "projects/gallery/c.png", "projects/gallery/d.png"] {
            storage.store(key, vec![1], "image/png").await.unwrap();
        }

        svc.delete(existing.id).await.unwrap();

        assert_eq!(storage.object_count(), 0);
        assert_eq!(repo.soft_deleted.lock().unwrap().len(), 1);

        let patches = repo.patches.lock().unwrap();
        assert_eq!(patches.len(), 1);
        assert!(patches[0].featured_image.is_null());
        assert!(patches[0].thumbnail.is_null());
        assert_eq!(patches[0].gallery, PatchField::Value(vec![]));
    }

    #[tokio::test]
    async fn delete_without_media_skips_clearing_patch() {
        let existing = sample_view();

        let repo = MockProjectRepo::default();
        let query = MockProjectQuery {
            current: Some(existing.clone()),
            ..Default::default()
        };
        let (svc, storage) = service(repo.clone(), query);

        svc.delete(existing.id).await.unwrap();

        assert!(storage.deleted_keys().is_empty());
        assert!(repo.patches.lock().unwrap().is_empty());
        assert_eq!(repo.soft_deleted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn patch_replacing_featured_image_deletes_old() {
        let mut existing = sample_view();
        existing.featured_image = Some("projects/featured/old.png".to_string());

        let repo = MockProjectRepo::default();
        let query = MockProjectQuery {
            current: Some(existing),
            ..Default::default()
        };
        let (svc, storage) = service(repo.clone(), query);
        storage
            .store("projects/featured/old.png", vec![1], "image/png")
            .await
            .unwrap();

        let input = PatchProjectInput {
            featured_image: Some(png_upload()),
            ..Default::default()
        };

        svc.patch(Uuid::new_v4(), input).await.unwrap();

        assert!(!storage.contains("projects/featured/old.png"));
        let patches = repo.patches.lock().unwrap();
        assert!(patches[0].featured_image.is_value());
    }
}
