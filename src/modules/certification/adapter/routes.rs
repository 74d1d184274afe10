// src/modules/certification/adapter/routes.rs

use actix_web::{delete, get, patch, post, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

use crate::modules::admin::extractor::AdminUser;
use crate::modules::certification::application::ports::{
    CertificationError, CertificationStatusFilter, CreateCertificationInput,
    PatchCertificationInput,
};
use crate::shared::api::{validation_error_response, ApiResponse};
use crate::shared::content::media::ImageUpload;
use crate::shared::content::ordering::ReorderRequest;
use crate::shared::content::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListCertificationsQuery {
    #[serde(default)]
    pub status: CertificationStatusFilter,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCertificationRequest {
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub issuing_organization: String,
    pub badge_image: Option<ImageUpload>,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub does_not_expire: bool,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Default, Deserialize)]
pub struct PatchCertificationRequest {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub issuing_organization: PatchField<String>,
    pub badge_image: Option<ImageUpload>,
    #[serde(default)]
    pub remove_badge_image: bool,
    #[serde(default)]
    pub issue_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub expiry_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub does_not_expire: PatchField<bool>,
    #[serde(default)]
    pub sort_order: PatchField<i32>,
}

fn error_response(err: CertificationError) -> actix_web::HttpResponse {
    match err {
        CertificationError::NotFound => {
            ApiResponse::not_found("CERTIFICATION_NOT_FOUND", "Certification not found")
        }
        CertificationError::InvalidImage(msg) => ApiResponse::unprocessable("INVALID_IMAGE", &msg),
        CertificationError::Repository(msg) => {
            error!("Certification repository error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/certifications")]
pub async fn list_certifications_handler(
    _admin: AdminUser,
    query: web::Query<ListCertificationsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.certification.list(query.status).await {
        Ok(items) => ApiResponse::success(items),
        Err(e) => error_response(e),
    }
}

#[get("/api/admin/certifications/{id}")]
pub async fn get_certification_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.certification.get(path.into_inner()).await {
        Ok(item) => ApiResponse::success(item),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/certifications")]
pub async fn create_certification_handler(
    _admin: AdminUser,
    req: web::Json<CreateCertificationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(errors) = req.validate() {
        return validation_error_response(&errors);
    }

    let input = CreateCertificationInput {
        name: req.name,
        issuing_organization: req.issuing_organization,
        badge_image: req.badge_image,
        issue_date: req.issue_date,
        expiry_date: req.expiry_date,
        does_not_expire: req.does_not_expire,
        sort_order: req.sort_order,
    };

    match data.certification.create(input).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => error_response(e),
    }
}

#[patch("/api/admin/certifications/{id}")]
pub async fn patch_certification_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchCertificationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let input = PatchCertificationInput {
        name: req.name,
        issuing_organization: req.issuing_organization,
        badge_image: req.badge_image,
        remove_badge_image: req.remove_badge_image,
        issue_date: req.issue_date,
        expiry_date: req.expiry_date,
        does_not_expire: req.does_not_expire,
        sort_order: req.sort_order,
    };

    match data.certification.patch(path.into_inner(), input).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => error_response(e),
    }
}

#[delete("/api/admin/certifications/{id}")]
pub async fn delete_certification_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.certification.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/certifications/reorder")]
pub async fn reorder_certifications_handler(
    _admin: AdminUser,
    req: web::Json<ReorderRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.certification.reorder(req.into_inner().items).await {
        Ok(()) => ApiResponse::success(serde_json::json!({ "reordered": true })),
        Err(e) => error_response(e),
    }
}
