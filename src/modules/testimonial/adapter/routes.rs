// src/modules/testimonial/adapter/routes.rs

use actix_web::{delete, get, patch, post, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

use crate::modules::admin::extractor::AdminUser;
use crate::modules::testimonial::application::ports::{
    CreateTestimonialInput, PatchTestimonialInput, TestimonialError, TestimonialListFilter,
};
use crate::shared::api::{validation_error_response, ApiResponse};
use crate::shared::content::media::ImageUpload;
use crate::shared::content::ordering::ReorderRequest;
use crate::shared::content::page::PageRequest;
use crate::shared::content::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListTestimonialsQuery {
    pub rating: Option<i16>,
    pub project_id: Option<Uuid>,
    #[serde(default)]
    pub published_only: bool,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTestimonialRequest {
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub client_name: String,
    pub client_avatar: Option<ImageUpload>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: String,
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub rating: i16,
    pub project_id: Option<Uuid>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Default, Deserialize)]
pub struct PatchTestimonialRequest {
    #[serde(default)]
    pub client_name: PatchField<String>,
    pub client_avatar: Option<ImageUpload>,
    #[serde(default)]
    pub remove_client_avatar: bool,
    #[serde(default)]
    pub content: PatchField<String>,
    #[serde(default)]
    pub rating: PatchField<i16>,
    #[serde(default)]
    pub project_id: PatchField<Uuid>,
    #[serde(default)]
    pub is_featured: PatchField<bool>,
    #[serde(default)]
    pub is_published: PatchField<bool>,
    #[serde(default)]
    pub sort_order: PatchField<i32>,
}

fn error_response(err: TestimonialError) -> actix_web::HttpResponse {
    match err {
        TestimonialError::NotFound => {
            ApiResponse::not_found("TESTIMONIAL_NOT_FOUND", "Testimonial not found")
        }
        TestimonialError::InvalidProjectReference => {
            ApiResponse::unprocessable("INVALID_REFERENCE", "Referenced project does not exist")
        }
        TestimonialError::InvalidImage(msg) => ApiResponse::unprocessable("INVALID_IMAGE", &msg),
        TestimonialError::Repository(msg) => {
            error!("Testimonial repository error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/testimonials")]
pub async fn list_testimonials_handler(
    _admin: AdminUser,
    query: web::Query<ListTestimonialsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let filter = TestimonialListFilter {
        rating: query.rating,
        project_id: query.project_id,
        published_only: query.published_only,
    };
    let page = PageRequest::sanitized(query.page, query.per_page);

    match data.testimonial.list(filter, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => error_response(e),
    }
}

#[get("/api/admin/testimonials/{id}")]
pub async fn get_testimonial_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.testimonial.get(path.into_inner()).await {
        Ok(item) => ApiResponse::success(item),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/testimonials")]
pub async fn create_testimonial_handler(
    _admin: AdminUser,
    req: web::Json<CreateTestimonialRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(errors) = req.validate() {
        return validation_error_response(&errors);
    }

    let input = CreateTestimonialInput {
        client_name: req.client_name,
        client_avatar: req.client_avatar,
        content: req.content,
        rating: req.rating,
        project_id: req.project_id,
        is_featured: req.is_featured,
        is_published: req.is_published,
        sort_order: req.sort_order,
    };

    match data.testimonial.create(input).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => error_response(e),
    }
}

#[patch("/api/admin/testimonials/{id}")]
pub async fn patch_testimonial_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchTestimonialRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    // Rating is also range-checked when patched.
    if let PatchField::Value(rating) = &req.rating {
        if !(1..=5).contains(rating) {
            return ApiResponse::validation_failed(
                [(
                    "rating".to_string(),
                    vec!["must be between 1 and 5".to_string()],
                )]
                .into_iter()
                .collect(),
            );
        }
    }

    let input = PatchTestimonialInput {
        client_name: req.client_name,
        client_avatar: req.client_avatar,
        remove_client_avatar: req.remove_client_avatar,
        content: req.content,
        rating: req.rating,
        project_id: req.project_id,
        is_featured: req.is_featured,
        is_published: req.is_published,
        sort_order: req.sort_order,
    };

    match data.testimonial.patch(path.into_inner(), input).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => error_response(e),
    }
}

#[delete("/api/admin/testimonials/{id}")]
pub async fn delete_testimonial_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.testimonial.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/testimonials/reorder")]
pub async fn reorder_testimonials_handler(
    _admin: AdminUser,
    req: web::Json<ReorderRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.testimonial.reorder(req.into_inner().items).await {
        Ok(()) => ApiResponse::success(serde_json::json!({ "reordered": true })),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/testimonials/{id}/toggle-featured")]
pub async fn toggle_testimonial_featured_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.testimonial.toggle_featured(path.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/testimonials/{id}/toggle-published")]
pub async fn toggle_testimonial_published_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.testimonial.toggle_published(path.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => error_response(e),
    }
}

/// Public read: published testimonials in manual order, no auth.
#[get("/api/public/testimonials")]
pub async fn get_public_testimonials_handler(data: web::Data<AppState>) -> impl Responder {
    match data.testimonial.list_published().await {
        Ok(items) => ApiResponse::success(items),
        Err(e) => error_response(e),
    }
}
