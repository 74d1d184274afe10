// src/shared/api/validation.rs
//
// Bridges `validator::ValidationErrors` into the API error envelope:
// HTTP 422 with a {field: [messages]} map, input never partially applied.

use actix_web::HttpResponse;
use std::collections::BTreeMap;
use validator::ValidationErrors;

use crate::shared::api::ApiResponse;

pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    ApiResponse::validation_failed(collect_field_errors(errors))
}

fn collect_field_errors(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    let mut fields: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (field, kinds) in errors.field_errors() {
        let messages = fields.entry(field.to_string()).or_default();
        for err in kinds.iter() {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("invalid value ({})", err.code));
            messages.push(message);
        }
    }

    fields
}
