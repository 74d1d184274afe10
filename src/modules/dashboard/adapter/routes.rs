// src/modules/dashboard/adapter/routes.rs

use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::admin::extractor::AdminUser;
use crate::modules::dashboard::application::ports::DashboardError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/dashboard")]
pub async fn get_dashboard_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.dashboard.summary().await {
        Ok(summary) => ApiResponse::success(summary),
        Err(DashboardError::DatabaseError(msg)) => {
            error!("Dashboard query error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Arc;

    use crate::modules::dashboard::application::ports::{
        monthly_histogram, DashboardSummary, DashboardUseCases, MessageStats, ProjectStats,
        TestimonialStats,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::{admin_headers, admin_token_config};

    #[derive(Clone)]
    struct MockDashboardUseCases;

    #[async_trait]
    impl DashboardUseCases for MockDashboardUseCases {
        async fn summary(&self) -> Result<DashboardSummary, DashboardError> {
            Ok(DashboardSummary {
                projects: ProjectStats {
                    total: 2,
                    published: 1,
                    featured: 1,
                    total_views: 10,
                },
                messages: MessageStats {
                    total: 4,
                    new_this_month: 1,
                    unread: 2,
                },
                testimonials: TestimonialStats {
                    total: 3,
                    published: 3,
                },
                recent_projects: vec![],
                recent_messages: vec![],
                top_projects: vec![],
                monthly_projects: monthly_histogram(
                    chrono::Utc::now().date_naive(),
                    &[],
                ),
            })
        }
    }

    #[actix_web::test]
    async fn test_dashboard_summary_shape() {
        let app_state = TestAppStateBuilder::default()
            .with_dashboard(Arc::new(MockDashboardUseCases))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(admin_token_config())
                .service(get_dashboard_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/dashboard")
            .insert_header(admin_headers())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["projects"]["total"], 2);
        assert_eq!(body["data"]["monthly_projects"].as_array().unwrap().len(), 6);
    }

    #[actix_web::test]
    async fn test_dashboard_requires_token() {
        let app_state = TestAppStateBuilder::default()
            .with_dashboard(Arc::new(MockDashboardUseCases))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(admin_token_config())
                .service(get_dashboard_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/dashboard")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
