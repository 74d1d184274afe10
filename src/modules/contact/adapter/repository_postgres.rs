// src/modules/contact/adapter/repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::adapter::sea_orm_entity::{
    self as contact_messages, ActiveModel, Column, Entity,
};
use crate::modules::contact::application::ports::{
    ContactMessageResult, ContactRepository, ContactRepositoryError, ContactStatus,
    CreateContactMessageData,
};
use crate::shared::content::page::{PageRequest, PageResult};

#[derive(Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn create(
        &self,
        data: CreateContactMessageData,
    ) -> Result<ContactMessageResult, ContactRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name.trim().to_string()),
            email: Set(data.email.trim().to_string()),
            subject: Set(data.subject.trim().to_string()),
            message: Set(data.message),
            status: Set(ContactStatus::New.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_result(result))
    }

    async fn list(
        &self,
        status: Option<ContactStatus>,
        page: PageRequest,
    ) -> Result<PageResult<ContactMessageResult>, ContactRepositoryError> {
        let mut query = Entity::find();

        if let Some(status) = status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        query = query.order_by_desc(Column::CreatedAt);

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

    async fn set_status(
        &self,
        id: Uuid,
        status: ContactStatus,
    ) -> Result<ContactMessageResult, ContactRepositoryError> {
        let model = ActiveModel {
            id: Set(id),
            status: Set(status.as_str().to_string()),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let result = model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotFound(_) => ContactRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        Ok(model_to_result(result))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContactRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContactRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_result(model: contact_messages::Model) -> ContactMessageResult {
    ContactMessageResult {
        id: model.id,
        name: model.name,
        email: model.email,
        subject: model.subject,
        message: model.message,
        status: ContactStatus::from_str_or_new(&model.status),
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn mock_model(id: Uuid, status: &str) -> contact_messages::Model {
        let now = Utc::now().fixed_offset();

        contact_messages::Model {
            id,
            name: "Visitor".to_string(),
            email: "visitor@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice site".to_string(),
            status: status.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_message_starts_as_new() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(Uuid::new_v4(), "new")]])
            .into_connection();

        let repo = ContactRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .create(CreateContactMessageData {
                name: "Visitor".to_string(),
                email: "visitor@example.com".to_string(),
                subject: "Hello".to_string(),
                message: "Nice site".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.status, ContactStatus::New);
    }

    #[tokio::test]
    async fn test_set_status_to_read() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(id, "read")]])
            .into_connection();

        let repo = ContactRepositoryPostgres::new(Arc::new(db));
        let result = repo.set_status(id, ContactStatus::Read).await.unwrap();

        assert_eq!(result.status, ContactStatus::Read);
    }

    #[tokio::test]
    async fn test_delete_missing_message() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = ContactRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete(Uuid::new_v4()).await;

        assert!(matches!(
            result.unwrap_err(),
            ContactRepositoryError::NotFound
        ));
    }
}
