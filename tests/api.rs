use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::Value;
use studioflow::configure_routes;
use studioflow::repository::DieselRepository;
use studioflow::search::{ClientRowRenderer, ProjectRowRenderer};
use tera::Tera;

mod common;

fn seeded_repo(test_db: &common::TestDb) -> DieselRepository {
    let acme = test_db.insert_client(
        "Acme",
        Some("Acme Ltd"),
        Some("hello@acme.test"),
        Some("555-0100"),
    );
    test_db.insert_client("<b>Bold</b>", None, None, None);
    test_db.insert_project(acme, "Website", Some("Pending"), None);
    DieselRepository::new(test_db.pool())
}

macro_rules! app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .configure(configure_routes)
                .app_data(web::Data::new(Tera::new("templates/**/*").unwrap()))
                .app_data(web::Data::new($repo))
                .app_data(web::Data::new(ClientRowRenderer::new().unwrap()))
                .app_data(web::Data::new(ProjectRowRenderer::new().unwrap())),
        )
        .await
    };
}

#[actix_web::test]
async fn test_api_clients_returns_json_results() {
    let test_db = common::TestDb::new("test_api_clients.db");
    let app = app!(seeded_repo(&test_db));

    let req = test::TestRequest::get().uri("/api/clients?q=ac").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().contains("application/json"));

    let body: Value = test::read_body_json(resp).await;
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "Acme");
    assert_eq!(results[0]["company"], "Acme Ltd");
    assert_eq!(results[0]["project_count"], 1);
}

#[actix_web::test]
async fn test_api_clients_without_query_returns_everything() {
    let test_db = common::TestDb::new("test_api_clients_all.db");
    let app = app!(seeded_repo(&test_db));

    let req = test::TestRequest::get().uri("/api/clients").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["results"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_api_projects_include_client_name() {
    let test_db = common::TestDb::new("test_api_projects.db");
    let app = app!(seeded_repo(&test_db));

    let req = test::TestRequest::get()
        .uri("/api/projects?q=acme")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "Website");
    assert_eq!(results[0]["client_name"], "Acme");
    assert_eq!(results[0]["status"], "Pending");
    assert!(results[0]["due_date"].is_null());
}

#[actix_web::test]
async fn test_index_redirects_to_clients() {
    let test_db = common::TestDb::new("test_index.db");
    let app = app!(seeded_repo(&test_db));

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/clients");
}

#[actix_web::test]
async fn test_clients_page_carries_search_anchors_and_escaped_rows() {
    let test_db = common::TestDb::new("test_clients_page.db");
    let app = app!(seeded_repo(&test_db));

    let req = test::TestRequest::get().uri("/clients").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains(r#"id="clientSearch""#));
    assert!(html.contains(r#"id="clientsTbody""#));
    assert!(html.contains("Acme"));
    assert!(html.contains("&lt;b&gt;Bold&lt;&#x2F;b&gt;") || html.contains("&lt;b&gt;Bold"));
    assert!(!html.contains("<b>Bold</b>"));
}

#[actix_web::test]
async fn test_projects_page_shows_no_results_row() {
    let test_db = common::TestDb::new("test_projects_page.db");
    let app = app!(seeded_repo(&test_db));

    let req = test::TestRequest::get()
        .uri("/projects?q=nothing-matches")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = std::str::from_utf8(&body).unwrap();

    assert!(html.contains(r#"id="projectSearch""#));
    assert!(html.contains(r#"id="projectsTbody""#));
    assert!(html.contains(r#"value="nothing-matches""#));
    assert!(html.contains(r#"colspan="5""#));
    assert!(html.contains("No results"));
}

#[actix_web::test]
async fn test_api_projects_with_blank_due_date() {
    let test_db = common::TestDb::new("test_api_blank_due_date.db");
    let acme = test_db.insert_client("Acme", None, None, None);
    test_db.insert_project(acme, "Site", Some("In Progress"), Some(""));
    let app = app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::get().uri("/api/projects").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "Site");
    assert!(results[0]["due_date"].is_null());
}

#[actix_web::test]
async fn test_client_detail_page_lists_projects() {
    let test_db = common::TestDb::new("test_client_detail.db");
    let acme = test_db.insert_client("Acme", Some("Acme Ltd"), None, Some("555-0100"));
    test_db.insert_project(acme, "Website", Some("In Progress"), Some("2025-03-01"));
    test_db.insert_project(acme, "Brand book", Some("Completed"), None);
    let app = app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::get()
        .uri(&format!("/clients/{acme}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("Acme Ltd"));
    assert!(html.contains("555-0100"));
    assert!(html.contains(r#"id="openProjects">1</dd>"#));
    assert!(html.contains("Website"));
    assert!(html.contains("Brand book"));
    assert!(html.contains("2025-03-01"));
}

#[actix_web::test]
async fn test_missing_client_detail_is_not_found() {
    let test_db = common::TestDb::new("test_client_detail_missing.db");
    let app = app!(seeded_repo(&test_db));

    let req = test::TestRequest::get().uri("/clients/999").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_project_detail_page_links_client() {
    let test_db = common::TestDb::new("test_project_detail.db");
    let acme = test_db.insert_client("Acme", None, None, None);
    let project = test_db.insert_project(acme, "Website", Some("Pending"), Some(""));
    let app = app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::get()
        .uri(&format!("/projects/{project}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("Website"));
    assert!(html.contains(&format!(r#"href="/clients/{acme}""#)));
    assert!(html.contains("bg-secondary"));
    assert!(html.contains(r#"<dd class="col-sm-9">-</dd>"#));
}

#[actix_web::test]
async fn test_missing_project_detail_is_not_found() {
    let test_db = common::TestDb::new("test_project_detail_missing.db");
    let app = app!(seeded_repo(&test_db));

    let req = test::TestRequest::get().uri("/projects/999").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
