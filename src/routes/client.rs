use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::repository::DieselRepository;
use crate::routes::render_template;
use crate::services::ServiceError;
use crate::services::client::get_client_page;

#[get("/clients/{client_id}")]
pub async fn show_client(
    client_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = match get_client_page(repo.get_ref(), client_id.into_inner()) {
        Ok(page) => page,
        Err(ServiceError::NotFound) => {
            return HttpResponse::NotFound().body("Client not found");
        }
        Err(ServiceError::Internal(_)) => {
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = Context::new();
    context.insert("current_page", "clients");
    context.insert("client", &page.client);
    context.insert("projects", &page.projects);
    context.insert("open_projects", &page.open_projects);

    render_template(&tera, "clients/detail.html", &context)
}
