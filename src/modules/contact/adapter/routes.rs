// src/modules/contact/adapter/routes.rs

use actix_web::{delete, get, patch, post, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

use crate::modules::admin::extractor::AdminUser;
use crate::modules::contact::application::ports::{
    ContactError, ContactStatus, CreateContactMessageData,
};
use crate::shared::api::{validation_error_response, ApiResponse};
use crate::shared::content::page::PageRequest;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitContactMessageRequest {
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub subject: String,
    #[validate(length(min = 1, max = 5000, message = "must be 1-5000 characters"))]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ListContactMessagesQuery {
    pub status: Option<ContactStatus>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SetContactStatusRequest {
    pub status: ContactStatus,
}

fn error_response(err: ContactError) -> actix_web::HttpResponse {
    match err {
        ContactError::NotFound => ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found"),
        ContactError::Repository(msg) => {
            error!("Contact repository error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Public intake; no auth, heavy validation.
#[post("/api/public/contact")]
pub async fn submit_contact_message_handler(
    req: web::Json<SubmitContactMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(errors) = req.validate() {
        return validation_error_response(&errors);
    }

    let input = CreateContactMessageData {
        name: req.name,
        email: req.email,
        subject: req.subject,
        message: req.message,
    };

    match data.contact.submit(input).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => error_response(e),
    }
}

#[get("/api/admin/contact-messages")]
pub async fn list_contact_messages_handler(
    _admin: AdminUser,
    query: web::Query<ListContactMessagesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::sanitized(query.page, query.per_page);

    match data.contact.list(query.status, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => error_response(e),
    }
}

#[patch("/api/admin/contact-messages/{id}/status")]
pub async fn set_contact_status_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<SetContactStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.set_status(path.into_inner(), req.status).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => error_response(e),
    }
}

#[delete("/api/admin/contact-messages/{id}")]
pub async fn delete_contact_message_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => error_response(e),
    }
}
