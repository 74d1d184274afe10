// src/modules/skill/adapter/repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::skill::adapter::sea_orm_entity::{self as skills, ActiveModel, Column, Entity};
use crate::modules::skill::application::ports::{
    CreateSkillData, PatchSkillData, SkillListFilter, SkillRepository, SkillRepositoryError,
    SkillResult,
};
use crate::shared::content::ordering::ReorderItem;
use crate::shared::content::patch::PatchField;

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn list(
        &self,
        filter: SkillListFilter,
    ) -> Result<Vec<SkillResult>, SkillRepositoryError> {
        let mut query = Entity::find();

        if let Some(ref category) = filter.category {
            query = query.filter(Column::Category.eq(category.trim()));
        }

        if let Some(ref search) = filter.search {
            let pattern = format!("%{}%", search.trim());
            query = query.filter(Expr::col(Column::Name).ilike(&pattern));
        }

        let rows = query
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_result).collect())
    }

    async fn get(&self, id: Uuid) -> Result<SkillResult, SkillRepositoryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(SkillRepositoryError::NotFound)?;

        Ok(model_to_result(row))
    }

    async fn create(&self, data: CreateSkillData) -> Result<SkillResult, SkillRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name.trim().to_string()),
            category: Set(data.category.trim().to_string()),
            years_experience: Set(data.years_experience),
            level: Set(data.level),
            is_highlighted: Set(data.is_highlighted),
            sort_order: Set(data.sort_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_result(result))
    }

    async fn patch(
        &self,
        id: Uuid,
        data: PatchSkillData,
    ) -> Result<SkillResult, SkillRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = data.name {
            model.name = Set(name.trim().to_string());
        }

        if let PatchField::Value(category) = data.category {
            model.category = Set(category.trim().to_string());
        }

        if let PatchField::Value(years) = data.years_experience {
            model.years_experience = Set(years);
        }

        if let PatchField::Value(level) = data.level {
            model.level = Set(level);
        }

        if let PatchField::Value(flag) = data.is_highlighted {
            model.is_highlighted = Set(flag);
        }

        if let PatchField::Value(order) = data.sort_order {
            model.sort_order = Set(order);
        }

        let has_changes = model.name.is_set()
            || model.category.is_set()
            || model.years_experience.is_set()
            || model.level.is_set()
            || model.is_highlighted.is_set()
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
            .ok_or(SkillRepositoryError::NotFound)?;

        Ok(model_to_result(result))
    }

    async fn delete(&self, id: Uuid) -> Result<(), SkillRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SkillRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), SkillRepositoryError> {
        let now = Utc::now().fixed_offset();

        for item in items {
            let model = ActiveModel {
                id: Set(item.id),
                sort_order: Set(item.sort_order),
                updated_at: Set(now),
                ..Default::default()
            };

            model.update(&*self.db).await.map_err(|e| match e {
                DbErr::RecordNotFound(_) => SkillRepositoryError::NotFound,
                other => map_db_err(other),
            })?;
        }

        Ok(())
    }

    async fn toggle_highlighted(&self, id: Uuid) -> Result<SkillResult, SkillRepositoryError> {
        // Read-modify-write; last write wins under concurrency.
        let current = self.get(id).await?;

        let model = ActiveModel {
            id: Set(id),
            is_highlighted: Set(!current.is_highlighted),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let result = model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotFound(_) => SkillRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        Ok(model_to_result(result))
    }
}

fn model_to_result(model: skills::Model) -> SkillResult {
    SkillResult {
        id: model.id,
        name: model.name,
        category: model.category,
        years_experience: model.years_experience,
        level: model.level,
        is_highlighted: model.is_highlighted,
        sort_order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> SkillRepositoryError {
    SkillRepositoryError::DatabaseError(e.to_string())
}
