// src/modules/technology/adapter/routes.rs

use actix_web::{delete, get, patch, post, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

use crate::modules::admin::extractor::AdminUser;
use crate::modules::technology::application::ports::{
    CreateTechnologyInput, PatchTechnologyData, TechnologyError, TechnologyKind,
    TechnologyListFilter,
};
use crate::shared::api::{validation_error_response, ApiResponse};
use crate::shared::content::ordering::ReorderRequest;
use crate::shared::content::page::PageRequest;
use crate::shared::content::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListTechnologiesQuery {
    pub search: Option<String>,
    pub kind: Option<TechnologyKind>,
    #[serde(default)]
    pub featured_only: bool,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl From<ListTechnologiesQuery> for (TechnologyListFilter, PageRequest) {
    fn from(query: ListTechnologiesQuery) -> Self {
        (
            TechnologyListFilter {
                search: query.search,
                kind: query.kind,
                featured_only: query.featured_only,
            },
            PageRequest::sanitized(query.page, query.per_page),
        )
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTechnologyRequest {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: String,
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub slug: Option<String>,
    #[serde(default)]
    pub kind: TechnologyKind,
    #[validate(length(min = 4, max = 7, message = "must be a hex color like #AABBCC"))]
    pub color: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, max = 100, message = "must be between 0 and 100"))]
    pub proficiency: i16,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Default, Deserialize)]
pub struct PatchTechnologyRequest {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub kind: PatchField<TechnologyKind>,
    #[serde(default)]
    pub color: PatchField<String>,
    #[serde(default)]
    pub proficiency: PatchField<i16>,
    #[serde(default)]
    pub is_featured: PatchField<bool>,
    #[serde(default)]
    pub sort_order: PatchField<i32>,
}

fn error_response(err: TechnologyError) -> actix_web::HttpResponse {
    match err {
        TechnologyError::NotFound => {
            ApiResponse::not_found("TECHNOLOGY_NOT_FOUND", "Technology not found")
        }
        TechnologyError::SlugAlreadyExists => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "Technology slug already exists")
        }
        TechnologyError::InUse(count) => ApiResponse::conflict(
            "TECHNOLOGY_IN_USE",
            &format!("Technology is referenced by {count} project(s) and cannot be deleted"),
        ),
        TechnologyError::Repository(msg) => {
            error!("Technology repository error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/technologies")]
pub async fn list_technologies_handler(
    _admin: AdminUser,
    query: web::Query<ListTechnologiesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, page) = query.into_inner().into();

    match data.technology.list(filter, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => error_response(e),
    }
}

#[get("/api/admin/technologies/{id}")]
pub async fn get_technology_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.technology.get(path.into_inner()).await {
        Ok(item) => ApiResponse::success(item),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/technologies")]
pub async fn create_technology_handler(
    _admin: AdminUser,
    req: web::Json<CreateTechnologyRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(errors) = req.validate() {
        return validation_error_response(&errors);
    }

    let input = CreateTechnologyInput {
        name: req.name,
        slug: req.slug,
        kind: req.kind,
        color: req.color,
        proficiency: req.proficiency,
        is_featured: req.is_featured,
        sort_order: req.sort_order,
    };

    match data.technology.create(input).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => error_response(e),
    }
}

#[patch("/api/admin/technologies/{id}")]
pub async fn patch_technology_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchTechnologyRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let input = PatchTechnologyData {
        name: req.name,
        kind: req.kind,
        color: req.color,
        proficiency: req.proficiency,
        is_featured: req.is_featured,
        sort_order: req.sort_order,
    };

    match data.technology.patch(path.into_inner(), input).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => error_response(e),
    }
}

#[delete("/api/admin/technologies/{id}")]
pub async fn delete_technology_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.technology.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/technologies/reorder")]
pub async fn reorder_technologies_handler(
    _admin: AdminUser,
    req: web::Json<ReorderRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.technology.reorder(req.into_inner().items).await {
        Ok(()) => ApiResponse::success(serde_json::json!({ "reordered": true })),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/technologies/{id}/toggle-featured")]
pub async fn toggle_technology_featured_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.technology.toggle_featured(path.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),
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

    use crate::modules::technology::application::ports::{TechnologyResult, TechnologyUseCases};
    use crate::shared::content::ordering::ReorderItem;
    use crate::shared::content::page::{PageRequest, PageResult};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::{admin_headers, admin_token_config};

    #[derive(Clone)]
    struct MockTechnologyUseCases {
        result: Result<TechnologyResult, TechnologyError>,
    }

    fn sample_technology() -> TechnologyResult {
        TechnologyResult {
            id: Uuid::new_v4(),
            name: "Test Technology".to_string(),
            slug: "test-technology".to_string(),
            kind: TechnologyKind::Tool,
            color: None,
            proficiency: 70,
            is_featured: false,
            sort_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[async_trait]
    impl TechnologyUseCases for MockTechnologyUseCases {
        async fn list(
            &self,
            _filter: TechnologyListFilter,
            page: PageRequest,
        ) -> Result<PageResult<TechnologyResult>, TechnologyError> {
            Ok(PageResult::new(vec![self.result.clone()?], &page, 1))
        }

        async fn list_featured(&self) -> Result<Vec<TechnologyResult>, TechnologyError> {
            Ok(vec![self.result.clone()?])
        }

        async fn get(&self, _id: Uuid) -> Result<TechnologyResult, TechnologyError> {
            self.result.clone()
        }

        async fn create(
            &self,
            _input: CreateTechnologyInput,
        ) -> Result<TechnologyResult, TechnologyError> {
            self.result.clone()
        }

        async fn patch(
            &self,
            _id: Uuid,
            _data: PatchTechnologyData,
        ) -> Result<TechnologyResult, TechnologyError> {
            self.result.clone()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), TechnologyError> {
            self.result.clone().map(|_| ())
        }

        async fn reorder(&self, _items: Vec<ReorderItem>) -> Result<(), TechnologyError> {
            self.result.clone().map(|_| ())
        }

        async fn toggle_featured(&self, _id: Uuid) -> Result<TechnologyResult, TechnologyError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_create_technology_returns_derived_slug() {
        let app_state = TestAppStateBuilder::default()
            .with_technology(Arc::new(MockTechnologyUseCases {
                result: Ok(sample_technology()),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(admin_token_config())
                .service(create_technology_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/technologies")
            .insert_header(admin_headers())
            .set_json(json!({ "name": "Test Technology" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["slug"], "test-technology");
    }

    #[actix_web::test]
    async fn test_delete_technology_in_use_conflict() {
        let app_state = TestAppStateBuilder::default()
            .with_technology(Arc::new(MockTechnologyUseCases {
                result: Err(TechnologyError::InUse(3)),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(admin_token_config())
                .service(delete_technology_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/technologies/{}", Uuid::new_v4()))
            .insert_header(admin_headers())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "TECHNOLOGY_IN_USE");
    }

    #[actix_web::test]
    async fn test_create_technology_slug_conflict() {
        let app_state = TestAppStateBuilder::default()
            .with_technology(Arc::new(MockTechnologyUseCases {
                result: Err(TechnologyError::SlugAlreadyExists),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(admin_token_config())
                .service(create_technology_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/technologies")
            .insert_header(admin_headers())
            .set_json(json!({ "name": "Rust", "slug": "rust" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "SLUG_ALREADY_EXISTS");
    }
}
