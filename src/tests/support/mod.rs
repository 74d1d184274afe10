pub mod app_state_builder;
pub mod stubs;

use actix_web::web;

use crate::modules::admin::extractor::AdminTokenConfig;

pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";

pub fn admin_token_config() -> web::Data<AdminTokenConfig> {
    web::Data::new(AdminTokenConfig::new(TEST_ADMIN_TOKEN.to_string()))
}

pub fn admin_headers() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", TEST_ADMIN_TOKEN))
}
