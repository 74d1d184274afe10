// src/modules/certification/adapter/repository_postgres.rs

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::certification::adapter::sea_orm_entity::{
    self as certifications, ActiveModel, Column, Entity,
};
use crate::modules::certification::application::ports::{
    CertificationRepository, CertificationRepositoryError, CertificationResult,
    CertificationStatusFilter, CreateCertificationData, PatchCertificationData,
};
use crate::shared::content::ordering::ReorderItem;
use crate::shared::content::patch::PatchField;

#[derive(Clone)]
pub struct CertificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CertificationRepository for CertificationRepositoryPostgres {
    async fn list(
        &self,
        filter: CertificationStatusFilter,
        today: NaiveDate,
    ) -> Result<Vec<CertificationResult>, CertificationRepositoryError> {
        let mut query = Entity::find();

        query = match filter {
            CertificationStatusFilter::All => query,
            // active: never expires, or the expiry is still ahead
            CertificationStatusFilter::Active => query.filter(
                Condition::any()
                    .add(Column::DoesNotExpire.eq(true))
                    .add(Column::ExpiryDate.gt(today)),
            ),
            // expired: expires and the date has passed
            CertificationStatusFilter::Expired => query.filter(
                Condition::all()
                    .add(Column::DoesNotExpire.eq(false))
                    .add(Column::ExpiryDate.lte(today)),
            ),
        };

        let rows = query
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_result).collect())
    }

    async fn get(&self, id: Uuid) -> Result<CertificationResult, CertificationRepositoryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CertificationRepositoryError::NotFound)?;

        Ok(model_to_result(row))
    }

    async fn create(
        &self,
        data: CreateCertificationData,
    ) -> Result<CertificationResult, CertificationRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name.trim().to_string()),
            issuing_organization: Set(data.issuing_organization.trim().to_string()),
            badge_image: Set(data.badge_image),
            issue_date: Set(data.issue_date),
            expiry_date: Set(data.expiry_date),
            does_not_expire: Set(data.does_not_expire),
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
        data: PatchCertificationData,
    ) -> Result<CertificationResult, CertificationRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = data.name {
            model.name = Set(name.trim().to_string());
        }

        if let PatchField::Value(org) = data.issuing_organization {
            model.issuing_organization = Set(org.trim().to_string());
        }

        match data.badge_image {
            PatchField::Unset => {}
            PatchField::Null => model.badge_image = Set(None),
            PatchField::Value(key) => model.badge_image = Set(Some(key)),
        }

        if let PatchField::Value(date) = data.issue_date {
            model.issue_date = Set(date);
        }

        match data.expiry_date {
            PatchField::Unset => {}
            PatchField::Null => model.expiry_date = Set(None),
            PatchField::Value(date) => model.expiry_date = Set(Some(date)),
        }

        if let PatchField::Value(flag) = data.does_not_expire {
            model.does_not_expire = Set(flag);
        }

        if let PatchField::Value(order) = data.sort_order {
            model.sort_order = Set(order);
        }

        let has_changes = model.name.is_set()
            || model.issuing_organization.is_set()
            || model.badge_image.is_set()
            || model.issue_date.is_set()
            || model.expiry_date.is_set()
            || model.does_not_expire.is_set()
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
            .ok_or(CertificationRepositoryError::NotFound)?;

        Ok(model_to_result(result))
    }

    async fn delete(&self, id: Uuid) -> Result<(), CertificationRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CertificationRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn reorder(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<(), CertificationRepositoryError> {
        let now = Utc::now().fixed_offset();

        for item in items {
            let model = ActiveModel {
                id: Set(item.id),
                sort_order: Set(item.sort_order),
                updated_at: Set(now),
                ..Default::default()
            };

            model.update(&*self.db).await.map_err(|e| match e {
                DbErr::RecordNotFound(_) => CertificationRepositoryError::NotFound,
                other => map_db_err(other),
            })?;
        }

        Ok(())
    }
}

fn model_to_result(model: certifications::Model) -> CertificationResult {
    CertificationResult {
        id: model.id,
        name: model.name,
        issuing_organization: model.issuing_organization,
        badge_image: model.badge_image,
        issue_date: model.issue_date,
        expiry_date: model.expiry_date,
        does_not_expire: model.does_not_expire,
        sort_order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> CertificationRepositoryError {
    CertificationRepositoryError::DatabaseError(e.to_string())
}
