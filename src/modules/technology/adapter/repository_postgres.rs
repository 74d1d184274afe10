// src/modules/technology/adapter/repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::sea_orm_entity::project_technologies;
use crate::modules::technology::adapter::sea_orm_entity::{
    self as technologies, ActiveModel, Column, Entity,
};
use crate::modules::technology::application::ports::{
    CreateTechnologyData, PatchTechnologyData, TechnologyKind, TechnologyListFilter,
    TechnologyRepository, TechnologyRepositoryError, TechnologyResult,
};
use crate::shared::content::ordering::ReorderItem;
use crate::shared::content::page::{PageRequest, PageResult};
use crate::shared::content::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct TechnologyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TechnologyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TechnologyRepository for TechnologyRepositoryPostgres {
    async fn list(
        &self,
        filter: TechnologyListFilter,
        page: PageRequest,
    ) -> Result<PageResult<TechnologyResult>, TechnologyRepositoryError> {
        let mut query = Entity::find();

        if let Some(ref search) = filter.search {
            let pattern = format!("%{}%", search.trim());
            query = query.filter(Expr::col(Column::Name).ilike(&pattern));
        }

        if let Some(kind) = filter.kind {
            query = query.filter(Column::Kind.eq(kind.as_str()));
        }

        if filter.featured_only {
            query = query.filter(Column::IsFeatured.eq(true));
        }

        query = query
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let rows = query
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = rows.into_iter().map(model_to_result).collect();

        Ok(PageResult::new(items, &page, total))
    }

    async fn list_featured(&self) -> Result<Vec<TechnologyResult>, TechnologyRepositoryError> {
        let rows = Entity::find()
            .filter(Column::IsFeatured.eq(true))
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_result).collect())
    }

    async fn get(&self, id: Uuid) -> Result<TechnologyResult, TechnologyRepositoryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(TechnologyRepositoryError::NotFound)?;

        Ok(model_to_result(row))
    }

    async fn create(
        &self,
        data: CreateTechnologyData,
    ) -> Result<TechnologyResult, TechnologyRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            slug: Set(data.slug),
            kind: Set(data.kind.as_str().to_string()),
            color: Set(data.color),
            proficiency: Set(data.proficiency),
            is_featured: Set(data.is_featured),
            sort_order: Set(data.sort_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_slug_error)?;

        Ok(model_to_result(result))
    }

    async fn patch(
        &self,
        id: Uuid,
        data: PatchTechnologyData,
    ) -> Result<TechnologyResult, TechnologyRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = data.name {
            model.name = Set(name);
        }

        if let PatchField::Value(kind) = data.kind {
            model.kind = Set(kind.as_str().to_string());
        }

        match data.color {
            PatchField::Unset => {}
            PatchField::Null => model.color = Set(None),
            PatchField::Value(color) => model.color = Set(Some(color)),
        }

        if let PatchField::Value(proficiency) = data.proficiency {
            model.proficiency = Set(proficiency);
        }

        if let PatchField::Value(flag) = data.is_featured {
            model.is_featured = Set(flag);
        }

        if let PatchField::Value(order) = data.sort_order {
            model.sort_order = Set(order);
        }

        let has_changes = model.name.is_set()
            || model.kind.is_set()
            || model.color.is_set()
            || model.proficiency.is_set()
            || model.is_featured.is_set()
            || model.sort_order.is_set();

        if !has_changes {
            return self.get(id).await;
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(TechnologyRepositoryError::NotFound)?;

        Ok(model_to_result(result))
    }

    async fn delete(&self, id: Uuid) -> Result<(), TechnologyRepositoryError> {
        let references = project_technologies::Entity::find()
            .filter(project_technologies::Column::TechnologyId.eq(id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        if references > 0 {
            return Err(TechnologyRepositoryError::InUse(references));
        }

        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TechnologyRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), TechnologyRepositoryError> {
        let now = Utc::now().fixed_offset();

        for item in items {
            let model = ActiveModel {
                id: Set(item.id),
                sort_order: Set(item.sort_order),
                updated_at: Set(now),
                ..Default::default()
            };

            model.update(&*self.db).await.map_err(|e| match e {
                DbErr::RecordNotFound(_) => TechnologyRepositoryError::NotFound,
                other => map_db_err(other),
            })?;
        }

        Ok(())
    }

    async fn toggle_featured(
        &self,
        id: Uuid,
    ) -> Result<TechnologyResult, TechnologyRepositoryError> {
        let current = self.get(id).await?;

        let model = ActiveModel {
            id: Set(id),
            is_featured: Set(!current.is_featured),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let result = model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotFound(_) => TechnologyRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        Ok(model_to_result(result))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_result(model: technologies::Model) -> TechnologyResult {
    TechnologyResult {
        id: model.id,
        name: model.name,
        slug: model.slug,
        kind: TechnologyKind::from_str_or_other(&model.kind),
        color: model.color,
        proficiency: model.proficiency,
        is_featured: model.is_featured,
        sort_order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_slug_error(e: DbErr) -> TechnologyRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        TechnologyRepositoryError::SlugAlreadyExists
    } else {
        TechnologyRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> TechnologyRepositoryError {
    TechnologyRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
