// src/modules/dashboard/application/ports.rs

use async_trait::async_trait;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::contact::application::ports::ContactStatus;

//
// ──────────────────────────────────────────────────────────
// Summary shape
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct ProjectStats {
    pub total: u64,
    pub published: u64,
    pub featured: u64,
    pub total_views: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageStats {
    pub total: u64,
    /// Created in the current calendar month.
    pub new_this_month: u64,
    /// Status still `new`.
    pub unread: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestimonialStats {
    pub total: u64,
    pub published: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentProjectItem {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub technologies: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentMessageItem {
    pub id: Uuid,
    pub name: String,
    pub subject: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopProjectItem {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub views_count: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthBucket {
    pub year: i32,
    pub month: u32,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub projects: ProjectStats,
    pub messages: MessageStats,
    pub testimonials: TestimonialStats,
    pub recent_projects: Vec<RecentProjectItem>,
    pub recent_messages: Vec<RecentMessageItem>,
    pub top_projects: Vec<TopProjectItem>,
    /// Exactly 6 entries, oldest month first, last = current month.
    pub monthly_projects: Vec<MonthBucket>,
}

//
// ──────────────────────────────────────────────────────────
// Errors / port
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum DashboardError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DashboardQuery: Send + Sync {
    async fn project_stats(&self) -> Result<ProjectStats, DashboardError>;
    async fn message_stats(&self, month_start: NaiveDate) -> Result<MessageStats, DashboardError>;
    async fn testimonial_stats(&self) -> Result<TestimonialStats, DashboardError>;
    async fn recent_projects(&self, limit: u64)
        -> Result<Vec<RecentProjectItem>, DashboardError>;
    async fn recent_messages(&self, limit: u64)
        -> Result<Vec<RecentMessageItem>, DashboardError>;
    async fn top_projects_by_views(
        &self,
        limit: u64,
    ) -> Result<Vec<TopProjectItem>, DashboardError>;
    /// Creation timestamps of projects created on/after `window_start`.
    async fn project_creation_dates(
        &self,
        window_start: NaiveDate,
    ) -> Result<Vec<DateTime<Utc>>, DashboardError>;
}

#[async_trait]
pub trait DashboardUseCases: Send + Sync {
    async fn summary(&self) -> Result<DashboardSummary, DashboardError>;
}

//
// ──────────────────────────────────────────────────────────
// Histogram bucketing (pure)
// ──────────────────────────────────────────────────────────
//

/// `(year, month)` walked back `offset` months from the anchor.
fn month_back(year: i32, month: u32, offset: u32) -> (i32, u32) {
    let absolute = year * 12 + (month as i32 - 1) - offset as i32;
    (absolute.div_euclid(12), (absolute.rem_euclid(12) + 1) as u32)
}

/// First day of the oldest month covered by a 6-point trailing histogram.
pub fn histogram_window_start(today: NaiveDate) -> NaiveDate {
    let (year, month) = month_back(today.year(), today.month(), 5);
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is always valid")
}

/// Always 6 buckets, oldest first, last = the anchor's calendar month.
/// Timestamps outside the window are ignored.
pub fn monthly_histogram(today: NaiveDate, created: &[DateTime<Utc>]) -> Vec<MonthBucket> {
    let mut buckets: Vec<MonthBucket> = (0..6)
        .rev()
        .map(|offset| {
            let (year, month) = month_back(today.year(), today.month(), offset);
            MonthBucket {
                year,
                month,
                count: 0,
            }
        })
        .collect();

    for timestamp in created {
        let date = timestamp.date_naive();
        for bucket in buckets.iter_mut() {
            if date.year() == bucket.year && date.month() == bucket.month {
                bucket.count += 1;
                break;
            }
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn histogram_always_has_six_buckets() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

        assert_eq!(monthly_histogram(today, &[]).len(), 6);
        assert_eq!(
            monthly_histogram(today, &vec![ts(2026, 8, 1); 100]).len(),
            6
        );
    }

    #[test]
    fn histogram_is_oldest_first_and_ends_with_current_month() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let buckets = monthly_histogram(today, &[]);

        assert_eq!((buckets[0].year, buckets[0].month), (2026, 3));
        assert_eq!((buckets[5].year, buckets[5].month), (2026, 8));
    }

    #[test]
    fn histogram_crosses_year_boundary() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        let buckets = monthly_histogram(today, &[]);

        assert_eq!((buckets[0].year, buckets[0].month), (2025, 9));
        assert_eq!((buckets[5].year, buckets[5].month), (2026, 2));
    }

    #[test]
    fn histogram_counts_only_matching_months() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let created = vec![
            ts(2026, 8, 1),
            ts(2026, 8, 5),
            ts(2026, 7, 31),
            ts(2026, 3, 2),
            // outside the window, ignored
            ts(2026, 2, 28),
            ts(2020, 1, 1),
        ];

        let buckets = monthly_histogram(today, &created);

        assert_eq!(buckets[5].count, 2); // August
        assert_eq!(buckets[4].count, 1); // July
        assert_eq!(buckets[0].count, 1); // March
        assert_eq!(buckets.iter().map(|b| b.count).sum::<u64>(), 4);
    }

    #[test]
    fn window_start_is_first_of_oldest_month() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(
            histogram_window_start(today),
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
        );

        let january = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_eq!(
            histogram_window_start(january),
            NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
        );
    }
}
