// src/modules/experience/adapter/repository_postgres.rs

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::adapter::sea_orm_entity::{self as experiences, ActiveModel, Column, Entity};
use crate::modules::experience::application::ports::{
    CreateExperienceData, ExperienceRepository, ExperienceRepositoryError, ExperienceResult,
    PatchExperienceData,
};
use crate::shared::content::ordering::ReorderItem;
use crate::shared::content::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn list(&self) -> Result<Vec<ExperienceResult>, ExperienceRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_result).collect()
    }

    async fn get(&self, id: Uuid) -> Result<ExperienceResult, ExperienceRepositoryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ExperienceRepositoryError::NotFound)?;

        model_to_result(row)
    }

    async fn create(
        &self,
        data: CreateExperienceData,
    ) -> Result<ExperienceResult, ExperienceRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title.trim().to_string()),
            company: Set(data.company.trim().to_string()),
            company_logo: Set(data.company_logo),
            responsibilities: Set(to_json(&data.responsibilities)?),
            achievements: Set(to_json(&data.achievements)?),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            is_current: Set(data.is_current),
            sort_order: Set(data.sort_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_result(result)
    }

    async fn patch(
        &self,
        id: Uuid,
        data: PatchExperienceData,
    ) -> Result<ExperienceResult, ExperienceRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title.trim().to_string());
        }

        if let PatchField::Value(company) = data.company {
            model.company = Set(company.trim().to_string());
        }

        match data.company_logo {
            PatchField::Unset => {}
            PatchField::Null => model.company_logo = Set(None),
            PatchField::Value(key) => model.company_logo = Set(Some(key)),
        }

        if let PatchField::Value(items) = data.responsibilities {
            model.responsibilities = Set(to_json(&items)?);
        }

        if let PatchField::Value(items) = data.achievements {
            model.achievements = Set(to_json(&items)?);
        }

        if let PatchField::Value(date) = data.start_date {
            model.start_date = Set(date);
        }

        match data.end_date {
            PatchField::Unset => {}
            PatchField::Null => model.end_date = Set(None),
            PatchField::Value(date) => model.end_date = Set(Some(date)),
        }

        if let PatchField::Value(flag) = data.is_current {
            model.is_current = Set(flag);
        }

        if let PatchField::Value(order) = data.sort_order {
            model.sort_order = Set(order);
        }

        let has_changes = model.title.is_set()
            || model.company.is_set()
            || model.company_logo.is_set()
            || model.responsibilities.is_set()
            || model.achievements.is_set()
            || model.start_date.is_set()
            || model.end_date.is_set()
            || model.is_current.is_set()
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
            .ok_or(ExperienceRepositoryError::NotFound)?;

        model_to_result(result)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ExperienceRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), ExperienceRepositoryError> {
        let now = Utc::now().fixed_offset();

        for item in items {
            let model = ActiveModel {
                id: Set(item.id),
                sort_order: Set(item.sort_order),
                updated_at: Set(now),
                ..Default::default()
            };

            model.update(&*self.db).await.map_err(|e| match e {
                DbErr::RecordNotFound(_) => ExperienceRepositoryError::NotFound,
                other => map_db_err(other),
            })?;
        }

        Ok(())
    }

    async fn earliest_start_date(
        &self,
    ) -> Result<Option<NaiveDate>, ExperienceRepositoryError> {
        let earliest = Entity::find()
            .select_only()
            .column(Column::StartDate)
            .order_by_asc(Column::StartDate)
            .into_tuple::<NaiveDate>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(earliest)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_result(
    model: experiences::Model,
) -> Result<ExperienceResult, ExperienceRepositoryError> {
    Ok(ExperienceResult {
        id: model.id,
        title: model.title,
        company: model.company,
        company_logo: model.company_logo,
        responsibilities: from_json(&model.responsibilities)?,
        achievements: from_json(&model.achievements)?,
        start_date: model.start_date,
        end_date: model.end_date,
        is_current: model.is_current,
        sort_order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ExperienceRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ExperienceRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ExperienceRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ExperienceRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
