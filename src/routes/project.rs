use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::repository::DieselRepository;
use crate::routes::render_template;
use crate::services::ServiceError;
use crate::services::project::get_project_page;

#[get("/projects/{project_id}")]
pub async fn show_project(
    project_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = match get_project_page(repo.get_ref(), project_id.into_inner()) {
        Ok(page) => page,
        Err(ServiceError::NotFound) => {
            return HttpResponse::NotFound().body("Project not found");
        }
        Err(ServiceError::Internal(_)) => {
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = Context::new();
    context.insert("current_page", "projects");
    context.insert("project", &page.project);
    context.insert("client", &page.client);

    render_template(&tera, "projects/detail.html", &context)
}
