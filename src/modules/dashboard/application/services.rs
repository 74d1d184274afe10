// src/modules/dashboard/application/services.rs

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Utc};

use crate::modules::dashboard::application::ports::{
    histogram_window_start, monthly_histogram, DashboardError, DashboardQuery, DashboardSummary,
    DashboardUseCases,
};

const RECENT_LIMIT: u64 = 5;
const TOP_LIMIT: u64 = 5;

/// No caching: every call recomputes from the store.
pub struct DashboardService<Q>
where
    Q: DashboardQuery,
{
    query: Q,
}

impl<Q> DashboardService<Q>
where
    Q: DashboardQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> DashboardUseCases for DashboardService<Q>
where
    Q: DashboardQuery + Send + Sync,
{
    async fn summary(&self) -> Result<DashboardSummary, DashboardError> {
        let today = Utc::now().date_naive();
        let month_start = NaiveDate::from_ymd_opt(today.year(), today.month(), 1)
            .expect("first of month is always valid");

        let projects = self.query.project_stats().await?;
        let messages = self.query.message_stats(month_start).await?;
        let testimonials = self.query.testimonial_stats().await?;
        let recent_projects = self.query.recent_projects(RECENT_LIMIT).await?;
        let recent_messages = self.query.recent_messages(RECENT_LIMIT).await?;
        let top_projects = self.query.top_projects_by_views(TOP_LIMIT).await?;

        let window_start = histogram_window_start(today);
        let creation_dates = self.query.project_creation_dates(window_start).await?;
        let monthly_projects = monthly_histogram(today, &creation_dates);

        Ok(DashboardSummary {
            projects,
            messages,
            testimonials,
            recent_projects,
            recent_messages,
            top_projects,
            monthly_projects,
        })
    }
}
