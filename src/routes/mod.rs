//! Actix-Web handlers and the helpers they share.

use actix_web::HttpResponse;
use actix_web::http::header;
use serde_json::json;
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod api;
pub mod client;
pub mod main;
pub mod project;

/// Renders a Tera template into a `200 OK` HTML response.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// JSON error body for API consumers; the status follows the error kind.
pub fn json_error(err: &ServiceError) -> HttpResponse {
    let body = json!({ "error": err.to_string() });
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(body),
        ServiceError::Internal(_) => HttpResponse::InternalServerError().json(body),
    }
}
