// src/modules/project/adapter/query_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::repository_postgres::{
    load_technologies, map_db_err, model_to_view,
};
use crate::modules::project::adapter::sea_orm_entity::project_technologies;
use crate::modules::project::adapter::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::ports::{
    ProjectCardView, ProjectListFilter, ProjectQuery, ProjectRepositoryError, ProjectSort,
    ProjectStatus, ProjectView,
};
use crate::modules::technology::adapter::sea_orm_entity as technologies;
use crate::shared::content::page::{PageRequest, PageResult};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Fetch-then-update view bump; last write wins under concurrent hits,
    /// an accepted imprecision for a portfolio site.
    async fn bump_views(&self, model: projects::Model) -> Result<projects::Model, ProjectRepositoryError> {
        let bump = ActiveModel {
            id: Set(model.id),
            views_count: Set(model.views_count + 1),
            ..Default::default()
        };

        bump.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotFound(_) => ProjectRepositoryError::NotFound,
            other => map_db_err(other),
        })
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list(
        &self,
        filter: ProjectListFilter,
        sort: ProjectSort,
        page: PageRequest,
    ) -> Result<PageResult<ProjectCardView>, ProjectRepositoryError> {
        let mut query = Entity::find().filter(Column::IsDeleted.eq(false));

        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        if let Some(ref search) = filter.search {
            let pattern = format!("%{}%", search.trim());
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Title).ilike(&pattern))
                    .add(Expr::col(Column::Description).ilike(&pattern)),
            );
        }

        // Technology filter via join-table subquery
        if let Some(technology_id) = filter.technology_id {
            let project_ids: Vec<Uuid> = project_technologies::Entity::find()
                .filter(project_technologies::Column::TechnologyId.eq(technology_id))
                .select_only()
                .column(project_technologies::Column::ProjectId)
                .into_tuple::<Uuid>()
                .all(&*self.db)
                .await
                .map_err(map_db_err)?;

            query = query.filter(Column::Id.is_in(project_ids));
        }

        if filter.published_only {
            query = query.filter(Column::IsPublished.eq(true));
        }

        if filter.featured_only {
            query = query.filter(Column::IsFeatured.eq(true));
        }

        query = match sort {
            ProjectSort::ManualOrder => query
                .order_by_asc(Column::SortOrder)
                .order_by_asc(Column::Id),
            ProjectSort::Newest => query.order_by_desc(Column::CreatedAt),
            ProjectSort::Oldest => query.order_by_asc(Column::CreatedAt),
            ProjectSort::MostViewed => query.order_by_desc(Column::ViewsCount),
        };

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let rows = query
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = rows.into_iter().map(model_to_card_view).collect();

        Ok(PageResult::new(items, &page, total))
    }

    async fn get(&self, id: Uuid) -> Result<ProjectView, ProjectRepositoryError> {
        let model = Entity::find_by_id(id)
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectRepositoryError::NotFound)?;

        let technologies = load_technologies(&self.db, model.id).await?;
        model_to_view(model, technologies)
    }

    async fn get_published_by_slug(
        &self,
        slug: &str,
    ) -> Result<ProjectView, ProjectRepositoryError> {
        let normalized = slug.trim().to_lowercase();

        let model = Entity::find()
            .filter(Column::Slug.eq(&normalized))
            .filter(Column::IsPublished.eq(true))
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectRepositoryError::NotFound)?;

        let bumped = self.bump_views(model).await?;

        let technologies = load_technologies(&self.db, bumped.id).await?;
        model_to_view(bumped, technologies)
    }

    async fn increment_likes(&self, slug: &str) -> Result<ProjectView, ProjectRepositoryError> {
        let normalized = slug.trim().to_lowercase();

        let model = Entity::find()
            .filter(Column::Slug.eq(&normalized))
            .filter(Column::IsPublished.eq(true))
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectRepositoryError::NotFound)?;

        let bump = ActiveModel {
            id: Set(model.id),
            likes_count: Set(model.likes_count + 1),
            ..Default::default()
        };

        let updated = bump.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotFound(_) => ProjectRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        let technologies = load_technologies(&self.db, updated.id).await?;
        model_to_view(updated, technologies)
    }

    async fn list_featured_published(
        &self,
    ) -> Result<Vec<ProjectCardView>, ProjectRepositoryError> {
        let rows = Entity::find()
            .filter(Column::IsDeleted.eq(false))
            .filter(Column::IsPublished.eq(true))
            .filter(Column::IsFeatured.eq(true))
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_card_view).collect())
    }

    async fn technologies_exist(&self, ids: &[Uuid]) -> Result<bool, ProjectRepositoryError> {
        if ids.is_empty() {
            return Ok(true);
        }

        let found = technologies::Entity::find()
            .filter(technologies::Column::Id.is_in(ids.to_vec()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found == ids.len() as u64)
    }
}

fn model_to_card_view(model: projects::Model) -> ProjectCardView {
    ProjectCardView {
        id: model.id,
        title: model.title,
        slug: model.slug,
        description: model.description,
        thumbnail: model.thumbnail,
        status: ProjectStatus::from_str_or_draft(&model.status),
        is_featured: model.is_featured,
        is_published: model.is_published,
        views_count: model.views_count,
        sort_order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

// ============================================================================
// Tests
// ============================================================================
