use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::repository::DieselRepository;
use crate::routes::api::SearchParams;
use crate::routes::{redirect, render_template};
use crate::search::render::{ClientRowRenderer, ProjectRowRenderer, RowRenderer};
use crate::services::api::{search_clients, search_projects};

#[get("/")]
pub async fn show_index() -> impl Responder {
    redirect("/clients")
}

#[get("/clients")]
pub async fn show_clients(
    params: web::Query<SearchParams>,
    repo: web::Data<DieselRepository>,
    renderer: web::Data<ClientRowRenderer>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = params.query();

    let clients = match search_clients(repo.get_ref(), &query) {
        Ok(result) => result.results,
        Err(err) => {
            log::error!("Failed to list clients: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let rows = match renderer.render(&clients) {
        Ok(rows) => rows,
        Err(err) => {
            log::error!("Failed to render client rows: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = Context::new();
    context.insert("current_page", "clients");
    context.insert("search_query", query.as_str());
    context.insert("total", &clients.len());
    context.insert("rows", &rows);

    render_template(&tera, "clients/list.html", &context)
}

#[get("/projects")]
pub async fn show_projects(
    params: web::Query<SearchParams>,
    repo: web::Data<DieselRepository>,
    renderer: web::Data<ProjectRowRenderer>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = params.query();

    let projects = match search_projects(repo.get_ref(), &query) {
        Ok(result) => result.results,
        Err(err) => {
            log::error!("Failed to list projects: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let rows = match renderer.render(&projects) {
        Ok(rows) => rows,
        Err(err) => {
            log::error!("Failed to render project rows: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = Context::new();
    context.insert("current_page", "projects");
    context.insert("search_query", query.as_str());
    context.insert("total", &projects.len());
    context.insert("rows", &rows);

    render_template(&tera, "projects/list.html", &context)
}
