// src/modules/experience/adapter/routes.rs

use actix_web::{delete, get, patch, post, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

use crate::modules::admin::extractor::AdminUser;
use crate::modules::experience::application::ports::{
    CreateExperienceInput, ExperienceError, PatchExperienceInput,
};
use crate::shared::api::{validation_error_response, ApiResponse};
use crate::shared::content::media::ImageUpload;
use crate::shared::content::ordering::ReorderRequest;
use crate::shared::content::patch::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Validate)]
pub struct CreateExperienceRequest {
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub company: String,
    pub company_logo: Option<ImageUpload>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Default, Deserialize)]
pub struct PatchExperienceRequest {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub company: PatchField<String>,
    pub company_logo: Option<ImageUpload>,
    #[serde(default)]
    pub remove_company_logo: bool,
    #[serde(default)]
    pub responsibilities: PatchField<Vec<String>>,
    #[serde(default)]
    pub achievements: PatchField<Vec<String>>,
    #[serde(default)]
    pub start_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub end_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub is_current: PatchField<bool>,
    #[serde(default)]
    pub sort_order: PatchField<i32>,
}

fn error_response(err: ExperienceError) -> actix_web::HttpResponse {
    match err {
        ExperienceError::NotFound => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }
        ExperienceError::InvalidImage(msg) => ApiResponse::unprocessable("INVALID_IMAGE", &msg),
        ExperienceError::Repository(msg) => {
            error!("Experience repository error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[get("/api/admin/experiences")]
pub async fn list_experiences_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.list().await {
        Ok(items) => ApiResponse::success(items),
        Err(e) => error_response(e),
    }
}

#[get("/api/admin/experiences/{id}")]
pub async fn get_experience_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.get(path.into_inner()).await {
        Ok(item) => ApiResponse::success(item),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/experiences")]
pub async fn create_experience_handler(
    _admin: AdminUser,
    req: web::Json<CreateExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(errors) = req.validate() {
        return validation_error_response(&errors);
    }

    let input = CreateExperienceInput {
        title: req.title,
        company: req.company,
        company_logo: req.company_logo,
        responsibilities: req.responsibilities,
        achievements: req.achievements,
        start_date: req.start_date,
        end_date: req.end_date,
        is_current: req.is_current,
        sort_order: req.sort_order,
    };

    match data.experience.create(input).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => error_response(e),
    }
}

#[patch("/api/admin/experiences/{id}")]
pub async fn patch_experience_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let input = PatchExperienceInput {
        title: req.title,
        company: req.company,
        company_logo: req.company_logo,
        remove_company_logo: req.remove_company_logo,
        responsibilities: req.responsibilities,
        achievements: req.achievements,
        start_date: req.start_date,
        end_date: req.end_date,
        is_current: req.is_current,
        sort_order: req.sort_order,
    };

    match data.experience.patch(path.into_inner(), input).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => error_response(e),
    }
}

#[delete("/api/admin/experiences/{id}")]
pub async fn delete_experience_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/experiences/reorder")]
pub async fn reorder_experiences_handler(
    _admin: AdminUser,
    req: web::Json<ReorderRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.reorder(req.into_inner().items).await {
        Ok(()) => ApiResponse::success(serde_json::json!({ "reordered": true })),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::modules::experience::application::ports::{ExperienceResult, ExperienceUseCases};
    use crate::shared::content::ordering::ReorderItem;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::admin_headers;

    #[derive(Clone)]
    struct MockExperienceUseCases {
        result: Result<ExperienceResult, ExperienceError>,
    }

    #[async_trait]
    impl ExperienceUseCases for MockExperienceUseCases {
        async fn list(&self) -> Result<Vec<ExperienceResult>, ExperienceError> {
            Ok(vec![self.result.clone()?])
        }

        async fn get(&self, _id: Uuid) -> Result<ExperienceResult, ExperienceError> {
            self.result.clone()
        }

        async fn create(
            &self,
            _input: CreateExperienceInput,
        ) -> Result<ExperienceResult, ExperienceError> {
            self.result.clone()
        }

        async fn patch(
            &self,
            _id: Uuid,
            _input: PatchExperienceInput,
        ) -> Result<ExperienceResult, ExperienceError> {
            self.result.clone()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), ExperienceError> {
            self.result.clone().map(|_| ())
        }

        async fn reorder(&self, _items: Vec<ReorderItem>) -> Result<(), ExperienceError> {
            self.result.clone().map(|_| ())
        }
    }

    fn sample_result() -> ExperienceResult {
        ExperienceResult {
            id: Uuid::new_v4(),
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            company_logo: None,
            responsibilities: vec![],
            achievements: vec![],
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: None,
            is_current: true,
            sort_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn create_body() -> Value {
        json!({
            "title": "Backend Engineer",
            "company": "Acme",
            "start_date": "2020-01-01",
            "is_current": true
        })
    }

    #[actix_web::test]
    async fn test_create_experience_success() {
        let app_state = TestAppStateBuilder::default()
            .with_experience(Arc::new(MockExperienceUseCases {
                result: Ok(sample_result()),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::tests::support::admin_token_config())
                .service(create_experience_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/experiences")
            .insert_header(admin_headers())
            .set_json(create_body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["title"], "Backend Engineer");
    }

    #[actix_web::test]
    async fn test_create_experience_empty_title_is_422() {
        let app_state = TestAppStateBuilder::default()
            .with_experience(Arc::new(MockExperienceUseCases {
                result: Ok(sample_result()),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::tests::support::admin_token_config())
                .service(create_experience_handler),
        )
        .await;

        let mut body = create_body();
        body["title"] = json!("");

        let req = test::TestRequest::post()
            .uri("/api/admin/experiences")
            .insert_header(admin_headers())
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["fields"]["title"].is_array());
    }

    #[actix_web::test]
    async fn test_create_experience_requires_admin_token() {
        let app_state = TestAppStateBuilder::default()
            .with_experience(Arc::new(MockExperienceUseCases {
                result: Ok(sample_result()),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::tests::support::admin_token_config())
                .service(create_experience_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/experiences")
            .set_json(create_body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_get_experience_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_experience(Arc::new(MockExperienceUseCases {
                result: Err(ExperienceError::NotFound),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::tests::support::admin_token_config())
                .service(get_experience_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/admin/experiences/{}", Uuid::new_v4()))
            .insert_header(admin_headers())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "EXPERIENCE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_delete_experience_no_content() {
        let app_state = TestAppStateBuilder::default()
            .with_experience(Arc::new(MockExperienceUseCases {
                result: Ok(sample_result()),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::tests::support::admin_token_config())
                .service(delete_experience_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/experiences/{}", Uuid::new_v4()))
            .insert_header(admin_headers())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
}
