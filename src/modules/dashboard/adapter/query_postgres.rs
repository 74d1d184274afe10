// src/modules/dashboard/adapter/query_postgres.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;

use crate::modules::contact::adapter::sea_orm_entity as contact_messages;
use crate::modules::contact::application::ports::ContactStatus;
use crate::modules::dashboard::application::ports::{
    DashboardError, DashboardQuery, MessageStats, ProjectStats, RecentMessageItem,
    RecentProjectItem, TestimonialStats, TopProjectItem,
};
use crate::modules::project::adapter::sea_orm_entity::project_technologies;
use crate::modules::project::adapter::sea_orm_entity::projects;
use crate::modules::technology::adapter::sea_orm_entity as technologies;
use crate::modules::testimonial::adapter::sea_orm_entity as testimonials;

#[derive(Clone)]
pub struct DashboardQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DashboardQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn technology_names(
        &self,
        project_id: uuid::Uuid,
    ) -> Result<Vec<String>, DashboardError> {
        let ids: Vec<uuid::Uuid> = project_technologies::Entity::find()
            .filter(project_technologies::Column::ProjectId.eq(project_id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|link| link.technology_id)
            .collect();

        if ids.is_empty() {
            return Ok(vec![]);
        }

        let names = technologies::Entity::find()
            .filter(technologies::Column::Id.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|t| t.name)
            .collect();

        Ok(names)
    }
}

fn live_projects() -> sea_orm::Select<projects::Entity> {
    projects::Entity::find().filter(projects::Column::IsDeleted.eq(false))
}

#[async_trait]
impl DashboardQuery for DashboardQueryPostgres {
    async fn project_stats(&self) -> Result<ProjectStats, DashboardError> {
        let total = live_projects().count(&*self.db).await.map_err(map_db_err)?;

        let published = live_projects()
            .filter(projects::Column::IsPublished.eq(true))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        let featured = live_projects()
            .filter(projects::Column::IsFeatured.eq(true))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        let total_views: Option<i64> = live_projects()
            .select_only()
            .column_as(projects::Column::ViewsCount.sum(), "total_views")
            .into_tuple()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .flatten();

        Ok(ProjectStats {
            total,
            published,
            featured,
            total_views: total_views.unwrap_or(0),
        })
    }

    async fn message_stats(&self, month_start: NaiveDate) -> Result<MessageStats, DashboardError> {
        let total = contact_messages::Entity::find()
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        let month_start_ts = month_start.and_time(NaiveTime::MIN).and_utc();

        let new_this_month = contact_messages::Entity::find()
            .filter(contact_messages::Column::CreatedAt.gte(month_start_ts))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        let unread = contact_messages::Entity::find()
            .filter(contact_messages::Column::Status.eq(ContactStatus::New.as_str()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(MessageStats {
            total,
            new_this_month,
            unread,
        })
    }

    async fn testimonial_stats(&self) -> Result<TestimonialStats, DashboardError> {
        let total = testimonials::Entity::find()
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        let published = testimonials::Entity::find()
            .filter(testimonials::Column::IsPublished.eq(true))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(TestimonialStats { total, published })
    }

    async fn recent_projects(
        &self,
        limit: u64,
    ) -> Result<Vec<RecentProjectItem>, DashboardError> {
        let rows = live_projects()
            .order_by_desc(projects::Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let technologies = self.technology_names(row.id).await?;
            items.push(RecentProjectItem {
                id: row.id,
                title: row.title,
                slug: row.slug,
                technologies,
                created_at: row.created_at.into(),
            });
        }

        Ok(items)
    }

    async fn recent_messages(
        &self,
        limit: u64,
    ) -> Result<Vec<RecentMessageItem>, DashboardError> {
        let rows = contact_messages::Entity::find()
            .order_by_desc(contact_messages::Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| RecentMessageItem {
                id: row.id,
                name: row.name,
                subject: row.subject,
                status: ContactStatus::from_str_or_new(&row.status),
                created_at: row.created_at.into(),
            })
            .collect())
    }

    async fn top_projects_by_views(
        &self,
        limit: u64,
    ) -> Result<Vec<TopProjectItem>, DashboardError> {
        let rows = live_projects()
            .order_by_desc(projects::Column::ViewsCount)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| TopProjectItem {
                id: row.id,
                title: row.title,
                slug: row.slug,
                views_count: row.views_count,
            })
            .collect())
    }

    async fn project_creation_dates(
        &self,
        window_start: NaiveDate,
    ) -> Result<Vec<DateTime<Utc>>, DashboardError> {
        let window_start_ts = window_start.and_time(NaiveTime::MIN).and_utc();

        let stamps: Vec<DateTimeWithTimeZone> = live_projects()
            .select_only()
            .column(projects::Column::CreatedAt)
            .filter(projects::Column::CreatedAt.gte(window_start_ts))
            .into_tuple()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(stamps.into_iter().map(Into::into).collect())
    }
}

fn map_db_err(e: DbErr) -> DashboardError {
    DashboardError::DatabaseError(e.to_string())
}
