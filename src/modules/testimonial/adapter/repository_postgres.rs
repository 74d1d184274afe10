// src/modules/testimonial/adapter/repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::sea_orm_entity::projects;
use crate::modules::testimonial::adapter::sea_orm_entity::{
    self as testimonials, ActiveModel, Column, Entity,
};
use crate::modules::testimonial::application::ports::{
    CreateTestimonialData, PatchTestimonialData, TestimonialListFilter, TestimonialRepository,
    TestimonialRepositoryError, TestimonialResult,
};
use crate::shared::content::ordering::ReorderItem;
use crate::shared::content::page::{PageRequest, PageResult};
use crate::shared::content::patch::PatchField;

#[derive(Clone)]
pub struct TestimonialRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TestimonialRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TestimonialRepository for TestimonialRepositoryPostgres {
    async fn list(
        &self,
        filter: TestimonialListFilter,
        page: PageRequest,
    ) -> Result<PageResult<TestimonialResult>, TestimonialRepositoryError> {
        let mut query = Entity::find();

        if let Some(rating) = filter.rating {
            query = query.filter(Column::Rating.eq(rating));
        }

        if let Some(project_id) = filter.project_id {
            query = query.filter(Column::ProjectId.eq(project_id));
        }

        if filter.published_only {
            query = query.filter(Column::IsPublished.eq(true));
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

    async fn list_published(
        &self,
    ) -> Result<Vec<TestimonialResult>, TestimonialRepositoryError> {
        let rows = Entity::find()
            .filter(Column::IsPublished.eq(true))
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_result).collect())
    }

    async fn get(&self, id: Uuid) -> Result<TestimonialResult, TestimonialRepositoryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(TestimonialRepositoryError::NotFound)?;

        Ok(model_to_result(row))
    }

    async fn create(
        &self,
        data: CreateTestimonialData,
    ) -> Result<TestimonialResult, TestimonialRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            client_name: Set(data.client_name.trim().to_string()),
            client_avatar: Set(data.client_avatar),
            content: Set(data.content),
            rating: Set(data.rating),
            project_id: Set(data.project_id),
            is_featured: Set(data.is_featured),
            is_published: Set(data.is_published),
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
        data: PatchTestimonialData,
    ) -> Result<TestimonialResult, TestimonialRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = data.client_name {
            model.client_name = Set(name.trim().to_string());
        }

        match data.client_avatar {
            PatchField::Unset => {}
            PatchField::Null => model.client_avatar = Set(None),
            PatchField::Value(key) => model.client_avatar = Set(Some(key)),
        }

        if let PatchField::Value(content) = data.content {
            model.content = Set(content);
        }

        if let PatchField::Value(rating) = data.rating {
            model.rating = Set(rating);
        }

        match data.project_id {
            PatchField::Unset => {}
            PatchField::Null => model.project_id = Set(None),
            PatchField::Value(project_id) => model.project_id = Set(Some(project_id)),
        }

        if let PatchField::Value(flag) = data.is_featured {
            model.is_featured = Set(flag);
        }

        if let PatchField::Value(flag) = data.is_published {
            model.is_published = Set(flag);
        }

        if let PatchField::Value(order) = data.sort_order {
            model.sort_order = Set(order);
        }

        let has_changes = model.client_name.is_set()
            || model.client_avatar.is_set()
            || model.content.is_set()
            || model.rating.is_set()
            || model.project_id.is_set()
            || model.is_featured.is_set()
            || model.is_published.is_set()
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
            .ok_or(TestimonialRepositoryError::NotFound)?;

        Ok(model_to_result(result))
    }

    async fn delete(&self, id: Uuid) -> Result<(), TestimonialRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TestimonialRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), TestimonialRepositoryError> {
        let now = Utc::now().fixed_offset();

        for item in items {
            let model = ActiveModel {
                id: Set(item.id),
                sort_order: Set(item.sort_order),
                updated_at: Set(now),
                ..Default::default()
            };

            model.update(&*self.db).await.map_err(|e| match e {
                DbErr::RecordNotFound(_) => TestimonialRepositoryError::NotFound,
                other => map_db_err(other),
            })?;
        }

        Ok(())
    }

    async fn toggle_featured(
        &self,
        id: Uuid,
    ) -> Result<TestimonialResult, TestimonialRepositoryError> {
        let current = self.get(id).await?;

        let model = ActiveModel {
            id: Set(id),
            is_featured: Set(!current.is_featured),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let result = model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotFound(_) => TestimonialRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        Ok(model_to_result(result))
    }

    async fn toggle_published(
        &self,
        id: Uuid,
    ) -> Result<TestimonialResult, TestimonialRepositoryError> {
        let current = self.get(id).await?;

        let model = ActiveModel {
            id: Set(id),
            is_published: Set(!current.is_published),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let result = model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotFound(_) => TestimonialRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        Ok(model_to_result(result))
    }

    async fn project_exists(&self, id: Uuid) -> Result<bool, TestimonialRepositoryError> {
        let count = projects::Entity::find()
            .filter(projects::Column::Id.eq(id))
            .filter(projects::Column::IsDeleted.eq(false))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }
}

fn model_to_result(model: testimonials::Model) -> TestimonialResult {
    TestimonialResult {
        id: model.id,
        client_name: model.client_name,
        client_avatar: model.client_avatar,
        content: model.content,
        rating: model.rating,
        project_id: model.project_id,
        is_featured: model.is_featured,
        is_published: model.is_published,
        sort_order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> TestimonialRepositoryError {
    TestimonialRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn mock_model(id: Uuid, published: bool) -> testimonials::Model {
        let now = Utc::now().fixed_offset();

        testimonials::Model {
            id,
            client_name: "Dana".to_string(),
            client_avatar: None,
            content: "Great work".to_string(),
            rating: 5,
            project_id: None,
            is_featured: false,
            is_published: published,
            sort_order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_testimonial_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(Uuid::new_v4(), true)]])
            .into_connection();

        let repo = TestimonialRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .create(CreateTestimonialData {
                client_name: "Dana".to_string(),
                client_avatar: None,
                content: "Great work".to_string(),
                rating: 5,
                project_id: None,
                is_featured: false,
                is_published: true,
                sort_order: 0,
            })
            .await
            .unwrap();

        assert_eq!(result.rating, 5);
    }

    #[tokio::test]
    async fn test_toggle_published_flips_flag() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![
                vec![mock_model(id, false)],
                vec![mock_model(id, true)],
            ])
            .into_connection();

        let repo = TestimonialRepositoryPostgres::new(Arc::new(db));
        let result = repo.toggle_published(id).await.unwrap();

        assert!(result.is_published);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<testimonials::Model>::new()])
            .into_connection();

        let repo = TestimonialRepositoryPostgres::new(Arc::new(db));
        let result = repo.get(Uuid::new_v4()).await;

        assert!(matches!(
            result.unwrap_err(),
            TestimonialRepositoryError::NotFound
        ));
    }
}
