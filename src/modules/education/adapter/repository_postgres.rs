// src/modules/education/adapter/repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::education::adapter::sea_orm_entity::{self as educations, ActiveModel, Column, Entity};
use crate::modules::education::application::ports::{
    CreateEducationData, EducationRepository, EducationRepositoryError, EducationResult,
    PatchEducationData,
};
use crate::shared::content::ordering::ReorderItem;
use crate::shared::content::patch::PatchField;

#[derive(Clone)]
pub struct EducationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EducationRepository for EducationRepositoryPostgres {
    async fn list(&self) -> Result<Vec<EducationResult>, EducationRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_result).collect())
    }

    async fn get(&self, id: Uuid) -> Result<EducationResult, EducationRepositoryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(EducationRepositoryError::NotFound)?;

        Ok(model_to_result(row))
    }

    async fn create(
        &self,
        data: CreateEducationData,
    ) -> Result<EducationResult, EducationRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            degree: Set(data.degree.trim().to_string()),
            institution: Set(data.institution.trim().to_string()),
            institution_logo: Set(data.institution_logo),
            field_of_study: Set(data.field_of_study.trim().to_string()),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            is_current: Set(data.is_current),
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
        data: PatchEducationData,
    ) -> Result<EducationResult, EducationRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(degree) = data.degree {
            model.degree = Set(degree.trim().to_string());
        }

        if let PatchField::Value(institution) = data.institution {
            model.institution = Set(institution.trim().to_string());
        }

        match data.institution_logo {
            PatchField::Unset => {}
            PatchField::Null => model.institution_logo = Set(None),
            PatchField::Value(key) => model.institution_logo = Set(Some(key)),
        }

        if let PatchField::Value(field) = data.field_of_study {
            model.field_of_study = Set(field.trim().to_string());
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

        let has_changes = model.degree.is_set()
            || model.institution.is_set()
            || model.institution_logo.is_set()
            || model.field_of_study.is_set()
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
            .ok_or(EducationRepositoryError::NotFound)?;

        Ok(model_to_result(result))
    }

    async fn delete(&self, id: Uuid) -> Result<(), EducationRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(EducationRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), EducationRepositoryError> {
        let now = Utc::now().fixed_offset();

        for item in items {
            let model = ActiveModel {
                id: Set(item.id),
                sort_order: Set(item.sort_order),
                updated_at: Set(now),
                ..Default::default()
            };

            model.update(&*self.db).await.map_err(|e| match e {
                DbErr::RecordNotFound(_) => EducationRepositoryError::NotFound,
                other => map_db_err(other),
            })?;
        }

        Ok(())
    }
}

fn model_to_result(model: educations::Model) -> EducationResult {
    EducationResult {
        id: model.id,
        degree: model.degree,
        institution: model.institution,
        institution_logo: model.institution_logo,
        field_of_study: model.field_of_study,
        start_date: model.start_date,
        end_date: model.end_date,
        is_current: model.is_current,
        sort_order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> EducationRepositoryError {
    EducationRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn mock_model(id: Uuid) -> educations::Model {
        let now = Utc::now().fixed_offset();

        educations::Model {
            id,
            degree: "BSc".to_string(),
            institution: "State University".to_string(),
            institution_logo: None,
            field_of_study: "Computer Science".to_string(),
            start_date: NaiveDate::from_ymd_opt(2014, 9, 1).unwrap(),
            end_date: Some(NaiveDate::from_ymd_opt(2018, 6, 30).unwrap()),
            is_current: false,
            sort_order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_education_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(Uuid::new_v4())]])
            .into_connection();

        let repo = EducationRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .create(CreateEducationData {
                degree: "BSc".to_string(),
                institution: "State University".to_string(),
                institution_logo: None,
                field_of_study: "Computer Science".to_string(),
                start_date: NaiveDate::from_ymd_opt(2014, 9, 1).unwrap(),
                end_date: Some(NaiveDate::from_ymd_opt(2018, 6, 30).unwrap()),
                is_current: false,
                sort_order: 0,
            })
            .await
            .unwrap();

        assert_eq!(result.degree, "BSc");
        assert_eq!(result.field_of_study, "Computer Science");
    }

    #[tokio::test]
    async fn test_patch_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<educations::Model>::new()])
            .into_connection();

        let repo = EducationRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .patch(
                Uuid::new_v4(),
                PatchEducationData {
                    degree: PatchField::Value("MSc".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(
            result.unwrap_err(),
            EducationRepositoryError::NotFound
        ));
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = EducationRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete(Uuid::new_v4()).await;

        assert!(matches!(
            result.unwrap_err(),
            EducationRepositoryError::NotFound
        ));
    }
}
