// src/modules/project/adapter/repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::sea_orm_entity::project_technologies;
use crate::modules::project::adapter::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::ports::{
    CreateProjectData, PatchProjectData, ProjectRepository, ProjectRepositoryError,
    ProjectStatus, ProjectTechnologyItem, ProjectView,
};
use crate::modules::technology::adapter::sea_orm_entity as technologies;
use crate::shared::content::ordering::ReorderItem;
use crate::shared::content::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_live(&self, id: Uuid) -> Result<projects::Model, ProjectRepositoryError> {
        Entity::find_by_id(id)
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectRepositoryError::NotFound)
    }

    /// Full replace-by-id-list: attach every given id, detach the rest.
    async fn sync_technologies(
        &self,
        project_id: Uuid,
        technology_ids: &[Uuid],
    ) -> Result<(), ProjectRepositoryError> {
        project_technologies::Entity::delete_many()
            .filter(project_technologies::Column::ProjectId.eq(project_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        let now = Utc::now().fixed_offset();

        for technology_id in technology_ids {
            let link = project_technologies::ActiveModel {
                project_id: Set(project_id),
                technology_id: Set(*technology_id),
                created_at: Set(now),
            };

            link.insert(&*self.db).await.map_err(map_db_err)?;
        }

        Ok(())
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectView, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        // Born-published rows get their timestamp at insert time.
        let published_at = if data.is_published { Some(now) } else { None };

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title.trim().to_string()),
            slug: Set(data.slug.trim().to_lowercase()),
            description: Set(data.description),
            content: Set(data.content),
            featured_image: Set(data.featured_image),
            thumbnail: Set(data.thumbnail),
            gallery: Set(to_json(&data.gallery)?),
            features: Set(to_json(&data.features)?),
            status: Set(data.status.as_str().to_string()),
            is_featured: Set(data.is_featured),
            is_published: Set(data.is_published),
            published_at: Set(published_at),
            views_count: Set(0),
            likes_count: Set(0),
            sort_order: Set(data.sort_order),
            is_deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_slug_error)?;

        if !data.technology_ids.is_empty() {
            self.sync_technologies(result.id, &data.technology_ids)
                .await?;
        }

        let technologies = load_technologies(&self.db, result.id).await?;
        model_to_view(result, technologies)
    }

    async fn patch(
        &self,
        id: Uuid,
        data: PatchProjectData,
    ) -> Result<ProjectView, ProjectRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title.trim().to_string());
        }

        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }

        if let PatchField::Value(content) = data.content {
            model.content = Set(content);
        }

        match data.featured_image {
            PatchField::Unset => {}
            PatchField::Null => model.featured_image = Set(None),
            PatchField::Value(key) => model.featured_image = Set(Some(key)),
        }

        match data.thumbnail {
            PatchField::Unset => {}
            PatchField::Null => model.thumbnail = Set(None),
            PatchField::Value(key) => model.thumbnail = Set(Some(key)),
        }

        if let PatchField::Value(gallery) = data.gallery {
            model.gallery = Set(to_json(&gallery)?);
        }

        if let PatchField::Value(features) = data.features {
            model.features = Set(to_json(&features)?);
        }

        if let PatchField::Value(status) = data.status {
            model.status = Set(status.as_str().to_string());
        }

        if let PatchField::Value(flag) = data.is_featured {
            model.is_featured = Set(flag);
        }

        if let PatchField::Value(order) = data.sort_order {
            model.sort_order = Set(order);
        }

        let has_changes = model.title.is_set()
            || model.description.is_set()
            || model.content.is_set()
            || model.featured_image.is_set()
            || model.thumbnail.is_set()
            || model.gallery.is_set()
            || model.features.is_set()
            || model.status.is_set()
            || model.is_featured.is_set()
            || model.sort_order.is_set();

        let result = if has_changes {
            model.updated_at = Set(Utc::now().fixed_offset());

            let results = Entity::update_many()
                .set(model)
                .filter(Column::Id.eq(id))
                .filter(Column::IsDeleted.eq(false))
                .exec_with_returning(&*self.db)
                .await
                .map_err(map_db_err)?;

            results
                .into_iter()
                .next()
                .ok_or(ProjectRepositoryError::NotFound)?
        } else {
            self.find_live(id).await?
        };

        if let PatchField::Value(ids) = &data.technology_ids {
            self.sync_technologies(id, ids).await?;
        }

        let technologies = load_technologies(&self.db, result.id).await?;
        model_to_view(result, technologies)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        // Guard first so deleting twice reports NotFound.
        self.find_live(id).await?;

        let model = ActiveModel {
            id: Set(id),
            is_deleted: Set(true),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotFound(_) => ProjectRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        Ok(())
    }

    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        for item in items {
            let model = ActiveModel {
                id: Set(item.id),
                sort_order: Set(item.sort_order),
                updated_at: Set(now),
                ..Default::default()
            };

            model.update(&*self.db).await.map_err(|e| match e {
                DbErr::RecordNotFound(_) => ProjectRepositoryError::NotFound,
                other => map_db_err(other),
            })?;
        }

        Ok(())
    }

    async fn toggle_featured(&self, id: Uuid) -> Result<ProjectView, ProjectRepositoryError> {
        let current = self.find_live(id).await?;

        let model = ActiveModel {
            id: Set(id),
            is_featured: Set(!current.is_featured),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let result = model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotFound(_) => ProjectRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        let technologies = load_technologies(&self.db, result.id).await?;
        model_to_view(result, technologies)
    }

    async fn toggle_published(&self, id: Uuid) -> Result<ProjectView, ProjectRepositoryError> {
        let current = self.find_live(id).await?;
        let now = Utc::now().fixed_offset();

        let publishing = !current.is_published;

        let model = ActiveModel {
            id: Set(id),
            is_published: Set(publishing),
            // publish stamps the moment, unpublish erases it
            published_at: Set(if publishing { Some(now) } else { None }),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotFound(_) => ProjectRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        let technologies = load_technologies(&self.db, result.id).await?;
        model_to_view(result, technologies)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(super) async fn load_technologies(
    db: &DatabaseConnection,
    project_id: Uuid,
) -> Result<Vec<ProjectTechnologyItem>, ProjectRepositoryError> {
    let technology_ids: Vec<Uuid> = project_technologies::Entity::find()
        .filter(project_technologies::Column::ProjectId.eq(project_id))
        .all(db)
        .await
        .map_err(map_db_err)?
        .into_iter()
        .map(|link| link.technology_id)
        .collect();

    if technology_ids.is_empty() {
        return Ok(vec![]);
    }

    let rows = technologies::Entity::find()
        .filter(technologies::Column::Id.is_in(technology_ids))
        .all(db)
        .await
        .map_err(map_db_err)?;

    Ok(rows
        .into_iter()
        .map(|t| ProjectTechnologyItem {
            id: t.id,
            name: t.name,
            slug: t.slug,
            color: t.color,
        })
        .collect())
}

pub(super) fn model_to_view(
    model: projects::Model,
    technologies: Vec<ProjectTechnologyItem>,
) -> Result<ProjectView, ProjectRepositoryError> {
    Ok(ProjectView {
        id: model.id,
        title: model.title,
        slug: model.slug,
        description: model.description,
        content: model.content,
        featured_image: model.featured_image,
        thumbnail: model.thumbnail,
        gallery: from_json(&model.gallery)?,
        features: from_json(&model.features)?,
        status: ProjectStatus::from_str_or_draft(&model.status),
        is_featured: model.is_featured,
        is_published: model.is_published,
        published_at: model.published_at.map(Into::into),
        views_count: model.views_count,
        likes_count: model.likes_count,
        sort_order: model.sort_order,
        technologies,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

pub(super) fn to_json<T: serde::Serialize>(
    data: &T,
) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

pub(super) fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ProjectRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

pub(super) fn map_slug_error(e: DbErr) -> ProjectRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        ProjectRepositoryError::SlugAlreadyExists
    } else {
        ProjectRepositoryError::DatabaseError(e.to_string())
    }
}

pub(super) fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
