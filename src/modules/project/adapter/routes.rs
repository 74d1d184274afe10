// src/modules/project/adapter/routes.rs

use actix_web::{delete, get, patch, post, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

use crate::modules::admin::extractor::AdminUser;
use crate::modules::project::application::ports::{
    CreateProjectInput, PatchProjectInput, ProjectError, ProjectListFilter, ProjectSort,
    ProjectStatus,
};
use crate::shared::api::{validation_error_response, ApiResponse};
use crate::shared::content::media::ImageUpload;
use crate::shared::content::ordering::ReorderRequest;
use crate::shared::content::page::PageRequest;
use crate::shared::content::patch::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct ListProjectsQuery {
    pub status: Option<ProjectStatus>,
    pub search: Option<String>,
    pub technology_id: Option<Uuid>,
    #[serde(default)]
    pub sort: ProjectSort,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub title: String,
    #[validate(length(max = 150, message = "must be at most 150 characters"))]
    pub slug: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    #[serde(default)]
    pub content: String,
    pub featured_image: Option<ImageUpload>,
    pub thumbnail: Option<ImageUpload>,
    #[serde(default)]
    pub gallery: Vec<ImageUpload>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub technology_ids: Vec<Uuid>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PatchProjectRequest {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub content: PatchField<String>,
    pub featured_image: Option<ImageUpload>,
    #[serde(default)]
    pub remove_featured_image: bool,
    pub thumbnail: Option<ImageUpload>,
    #[serde(default)]
    pub remove_thumbnail: bool,
    pub gallery: Option<Vec<ImageUpload>>,
    #[serde(default)]
    pub features: PatchField<Vec<String>>,
    #[serde(default)]
    pub status: PatchField<ProjectStatus>,
    #[serde(default)]
    pub is_featured: PatchField<bool>,
    #[serde(default)]
    pub sort_order: PatchField<i32>,
    #[serde(default)]
    pub technology_ids: PatchField<Vec<Uuid>>,
}

fn error_response(err: ProjectError) -> actix_web::HttpResponse {
    match err {
        ProjectError::NotFound => ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found"),
        ProjectError::SlugAlreadyExists => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "Project slug already exists")
        }
        ProjectError::InvalidTechnologyReference => {
            ApiResponse::unprocessable("INVALID_REFERENCE", "Referenced technology does not exist")
        }
        ProjectError::InvalidImage(msg) => ApiResponse::unprocessable("INVALID_IMAGE", &msg),
        ProjectError::Repository(msg) => {
            error!("Project repository error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Admin handlers
// ──────────────────────────────────────────────────────────
//

#[get("/api/admin/projects")]
pub async fn list_projects_handler(
    _admin: AdminUser,
    query: web::Query<ListProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let filter = ProjectListFilter {
        status: query.status,
        search: query.search,
        technology_id: query.technology_id,
        published_only: false,
        featured_only: false,
    };
    let page = PageRequest::sanitized(query.page, query.per_page);

    match data.project.list(filter, query.sort, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => error_response(e),
    }
}

#[get("/api/admin/projects/{id}")]
pub async fn get_project_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.get(path.into_inner()).await {
        Ok(view) => ApiResponse::success(view),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/projects")]
pub async fn create_project_handler(
    _admin: AdminUser,
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(errors) = req.validate() {
        return validation_error_response(&errors);
    }

    let input = CreateProjectInput {
        title: req.title,
        slug: req.slug,
        description: req.description,
        content: req.content,
        featured_image: req.featured_image,
        thumbnail: req.thumbnail,
        gallery: req.gallery,
        features: req.features,
        status: req.status,
        is_featured: req.is_featured,
        is_published: req.is_published,
        sort_order: req.sort_order,
        technology_ids: req.technology_ids,
    };

    match data.project.create(input).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => error_response(e),
    }
}

#[patch("/api/admin/projects/{id}")]
pub async fn patch_project_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let input = PatchProjectInput {
        title: req.title,
        description: req.description,
        content: req.content,
        featured_image: req.featured_image,
        remove_featured_image: req.remove_featured_image,
        thumbnail: req.thumbnail,
        remove_thumbnail: req.remove_thumbnail,
        gallery: req.gallery,
        features: req.features,
        status: req.status,
        is_featured: req.is_featured,
        sort_order: req.sort_order,
        technology_ids: req.technology_ids,
    };

    match data.project.patch(path.into_inner(), input).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => error_response(e),
    }
}

#[delete("/api/admin/projects/{id}")]
pub async fn delete_project_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/projects/reorder")]
pub async fn reorder_projects_handler(
    _admin: AdminUser,
    req: web::Json<ReorderRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.reorder(req.into_inner().items).await {
        Ok(()) => ApiResponse::success(serde_json::json!({ "reordered": true })),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/projects/{id}/toggle-featured")]
pub async fn toggle_project_featured_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.toggle_featured(path.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/projects/{id}/toggle-published")]
pub async fn toggle_project_published_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.toggle_published(path.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => error_response(e),
    }
}

//
// ──────────────────────────────────────────────────────────
// Public handlers
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct PublicPortfolioQuery {
    pub technology_id: Option<Uuid>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[get("/api/public/portfolio")]
pub async fn get_public_portfolio_handler(
    query: web::Query<PublicPortfolioQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let filter = ProjectListFilter {
        technology_id: query.technology_id,
        published_only: true,
        ..Default::default()
    };
    let page = PageRequest::sanitized(query.page, query.per_page);

    match data
        .project
        .list(filter, ProjectSort::ManualOrder, page)
        .await
    {
        Ok(result) => ApiResponse::success(result),
        Err(e) => error_response(e),
    }
}

#[get("/api/public/projects/{slug}")]
pub async fn get_public_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.get_published_by_slug(&path.into_inner()).await {
        Ok(view) => ApiResponse::success(view),
        Err(e) => error_response(e),
    }
}

#[post("/api/public/projects/{slug}/like")]
pub async fn like_public_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.like_by_slug(&path.into_inner()).await {
        Ok(view) => ApiResponse::success(view),
        Err(e) => error_response(e),
    }
}
