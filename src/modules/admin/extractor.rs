// src/modules/admin/extractor.rs
//
// Session machinery is an external collaborator; the back-office is guarded
// by a single bearer token compared against ADMIN_API_TOKEN.

use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};

use crate::shared::api::ApiResponse;

#[derive(Clone)]
pub struct AdminTokenConfig {
    token: String,
}

impl AdminTokenConfig {
    pub fn new(token: String) -> Self {
        Self { token }
    }

    pub fn from_env() -> Self {
        let token = std::env::var("ADMIN_API_TOKEN").expect("ADMIN_API_TOKEN is not set");
        Self::new(token)
    }
}

/// Extractor required by every write endpoint under /api/admin.
#[derive(Debug, Clone)]
pub struct AdminUser;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let config = match req.app_data::<web::Data<AdminTokenConfig>>() {
            Some(config) => config,
            None => {
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        if token != config.token {
            return ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid admin token",
            ))));
        }

        ready(Ok(AdminUser))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
