// src/modules/public_site/routes.rs

use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::public_site::application::PublicSiteError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/public/home")]
pub async fn get_public_home_handler(data: web::Data<AppState>) -> impl Responder {
    match data.public_site.home().await {
        Ok(page) => ApiResponse::success(page),
        Err(PublicSiteError::Upstream(msg)) => {
            error!("Home page composition failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/public/about")]
pub async fn get_public_about_handler(data: web::Data<AppState>) -> impl Responder {
    match data.public_site.about().await {
        Ok(page) => ApiResponse::success(page),
        Err(PublicSiteError::Upstream(msg)) => {
            error!("About page composition failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
