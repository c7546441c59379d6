use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;

use crate::domain::search::SearchQuery;
use crate::repository::DieselRepository;
use crate::routes::json_error;
use crate::services::api::{search_clients, search_projects};

#[derive(Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

impl SearchParams {
    pub fn query(&self) -> SearchQuery {
        SearchQuery::from_param(self.q.as_deref())
    }
}

#[get("/clients")]
pub async fn api_clients(
    params: web::Query<SearchParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match search_clients(repo.get_ref(), &params.query()) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(err) => json_error(&err),
    }
}

#[get("/projects")]
pub async fn api_projects(
    params: web::Query<SearchParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match search_projects(repo.get_ref(), &params.query()) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(err) => json_error(&err),
    }
}
