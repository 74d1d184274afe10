// src/modules/education/adapter/routes.rs

use actix_web::{delete, get, patch, post, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

use crate::modules::admin::extractor::AdminUser;
use crate::modules::education::application::ports::{
    CreateEducationInput, EducationError, PatchEducationInput,
};
use crate::shared::api::{validation_error_response, ApiResponse};
use crate::shared::content::media::ImageUpload;
use crate::shared::content::ordering::ReorderRequest;
use crate::shared::content::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEducationRequest {
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub degree: String,
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub institution: String,
    pub institution_logo: Option<ImageUpload>,
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub field_of_study: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Default, Deserialize)]
pub struct PatchEducationRequest {
    #[serde(default)]
    pub degree: PatchField<String>,
    #[serde(default)]
    pub institution: PatchField<String>,
    pub institution_logo: Option<ImageUpload>,
    #[serde(default)]
    pub remove_institution_logo: bool,
    #[serde(default)]
    pub field_of_study: PatchField<String>,
    #[serde(default)]
    pub start_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub end_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub is_current: PatchField<bool>,
    #[serde(default)]
    pub sort_order: PatchField<i32>,
}

fn error_response(err: EducationError) -> actix_web::HttpResponse {
    match err {
        EducationError::NotFound => {
            ApiResponse::not_found("EDUCATION_NOT_FOUND", "Education not found")
        }
        EducationError::InvalidImage(msg) => ApiResponse::unprocessable("INVALID_IMAGE", &msg),
        EducationError::Repository(msg) => {
            error!("Education repository error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/educations")]
pub async fn list_educations_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.education.list().await {
        Ok(items) => ApiResponse::success(items),
        Err(e) => error_response(e),
    }
}

#[get("/api/admin/educations/{id}")]
pub async fn get_education_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.education.get(path.into_inner()).await {
        Ok(item) => ApiResponse::success(item),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/educations")]
pub async fn create_education_handler(
    _admin: AdminUser,
    req: web::Json<CreateEducationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(errors) = req.validate() {
        return validation_error_response(&errors);
    }

    let input = CreateEducationInput {
        degree: req.degree,
        institution: req.institution,
        institution_logo: req.institution_logo,
        field_of_study: req.field_of_study,
        start_date: req.start_date,
        end_date: req.end_date,
        is_current: req.is_current,
        sort_order: req.sort_order,
    };

    match data.education.create(input).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => error_response(e),
    }
}

#[patch("/api/admin/educations/{id}")]
pub async fn patch_education_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchEducationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let input = PatchEducationInput {
        degree: req.degree,
        institution: req.institution,
        institution_logo: req.institution_logo,
        remove_institution_logo: req.remove_institution_logo,
        field_of_study: req.field_of_study,
        start_date: req.start_date,
        end_date: req.end_date,
        is_current: req.is_current,
        sort_order: req.sort_order,
    };

    match data.education.patch(path.into_inner(), input).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => error_response(e),
    }
}

#[delete("/api/admin/educations/{id}")]
pub async fn delete_education_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.education.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/educations/reorder")]
pub async fn reorder_educations_handler(
    _admin: AdminUser,
    req: web::Json<ReorderRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.education.reorder(req.into_inner().items).await {
        Ok(()) => ApiResponse::success(serde_json::json!({ "reordered": true })),
        Err(e) => error_response(e),
    }
}
