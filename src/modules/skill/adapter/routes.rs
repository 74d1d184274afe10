// src/modules/skill/adapter/routes.rs

use actix_web::{delete, get, patch, post, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

use crate::modules::admin::extractor::AdminUser;
use crate::modules::skill::application::ports::{
    CreateSkillData, PatchSkillData, SkillError, SkillListFilter,
};
use crate::shared::api::{validation_error_response, ApiResponse};
use crate::shared::content::ordering::ReorderRequest;
use crate::shared::content::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListSkillsQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSkillRequest {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub category: String,
    #[serde(default)]
    #[validate(range(min = 0, max = 60, message = "must be between 0 and 60"))]
    pub years_experience: i16,
    #[serde(default)]
    #[validate(range(min = 0, max = 100, message = "must be between 0 and 100"))]
    pub level: i16,
    #[serde(default)]
    pub is_highlighted: bool,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Default, Deserialize)]
pub struct PatchSkillRequest {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub category: PatchField<String>,
    #[serde(default)]
    pub years_experience: PatchField<i16>,
    #[serde(default)]
    pub level: PatchField<i16>,
    #[serde(default)]
    pub is_highlighted: PatchField<bool>,
    #[serde(default)]
    pub sort_order: PatchField<i32>,
}

fn error_response(err: SkillError) -> actix_web::HttpResponse {
    match err {
        SkillError::NotFound => ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found"),
        SkillError::Repository(msg) => {
            error!("Skill repository error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/skills")]
pub async fn list_skills_handler(
    _admin: AdminUser,
    query: web::Query<ListSkillsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let filter = SkillListFilter {
        category: query.category,
        search: query.search,
    };

    match data.skill.list(filter).await {
        Ok(items) => ApiResponse::success(items),
        Err(e) => error_response(e),
    }
}

#[get("/api/admin/skills/{id}")]
pub async fn get_skill_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.get(path.into_inner()).await {
        Ok(item) => ApiResponse::success(item),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/skills")]
pub async fn create_skill_handler(
    _admin: AdminUser,
    req: web::Json<CreateSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(errors) = req.validate() {
        return validation_error_response(&errors);
    }

    let input = CreateSkillData {
        name: req.name,
        category: req.category,
        years_experience: req.years_experience,
        level: req.level,
        is_highlighted: req.is_highlighted,
        sort_order: req.sort_order,
    };

    match data.skill.create(input).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => error_response(e),
    }
}

#[patch("/api/admin/skills/{id}")]
pub async fn patch_skill_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let input = PatchSkillData {
        name: req.name,
        category: req.category,
        years_experience: req.years_experience,
        level: req.level,
        is_highlighted: req.is_highlighted,
        sort_order: req.sort_order,
    };

    match data.skill.patch(path.into_inner(), input).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => error_response(e),
    }
}

#[delete("/api/admin/skills/{id}")]
pub async fn delete_skill_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/skills/reorder")]
pub async fn reorder_skills_handler(
    _admin: AdminUser,
    req: web::Json<ReorderRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.reorder(req.into_inner().items).await {
        Ok(()) => ApiResponse::success(serde_json::json!({ "reordered": true })),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/skills/{id}/toggle-highlighted")]
pub async fn toggle_skill_highlighted_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.toggle_highlighted(path.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => error_response(e),
    }
}

/// Public read: skills grouped by category, no auth.
#[get("/api/public/skills")]
pub async fn get_public_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.grouped_by_category().await {
        Ok(groups) => ApiResponse::success(groups),
        Err(e) => error_response(e),
    }
}
