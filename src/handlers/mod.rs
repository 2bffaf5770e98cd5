pub mod department;
pub mod employee;
pub mod file;

use actix_web::http::Method;
use actix_web::{middleware, web, HttpResponse, Resource};

/// Registers every API route. Literal paths come before their `{id}`
/// siblings so `/employee/SaveFile` is never read as an employee id.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        resource("/department")
            .route(web::get().to(department::get_departments))
            .route(web::post().to(department::create_department))
            .route(web::put().to(department::update_department)),
    )
    .service(
        resource("/department/{id}")
            .route(web::get().to(department::get_department))
            .route(web::delete().to(department::delete_department)),
    )
    .service(
        web::resource(["/employee/SaveFile", "/employee/savefile"])
            .route(web::method(Method::OPTIONS).to(preflight))
            .route(web::post().to(file::save_file)),
    )
    .service(
        resource("/employee")
            .route(web::get().to(employee::get_employees))
            .route(web::post().to(employee::create_employee)),
    )
    .service(
        resource("/employee/{id}")
            .route(web::get().to(employee::get_employee))
            .route(web::put().to(employee::update_employee))
            .route(web::delete().to(employee::delete_employee)),
    )
    .service(resource("/Photos/{filename}").route(web::get().to(file::get_photo)));
}

/// Allow-any CORS headers for the browser client.
pub fn cors_headers() -> middleware::DefaultHeaders {
    middleware::DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "*"))
}

fn resource(path: &str) -> Resource {
    web::resource(path).route(web::method(Method::OPTIONS).to(preflight))
}

async fn preflight() -> HttpResponse {
    HttpResponse::NoContent().finish()
}
