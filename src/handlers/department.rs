use actix_web::http::header;
use actix_web::{web, HttpResponse};

use crate::db::RecordStore;
use crate::errors::AppError;
use crate::models::department::Department;
use crate::services::department as service;

pub async fn get_departments(store: web::Data<dyn RecordStore>) -> Result<HttpResponse, AppError> {
    let departments = service::list(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(departments))
}

pub async fn get_department(
    store: web::Data<dyn RecordStore>,
    department_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let department = service::get_by_id(store.get_ref(), department_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(department))
}

pub async fn create_department(
    store: web::Data<dyn RecordStore>,
    new_department: web::Json<Department>,
) -> Result<HttpResponse, AppError> {
    let department = service::create(store.get_ref(), &new_department.department_name).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/department/{}", department.department_id)))
        .json(department))
}

/// `PUT /department`: the id travels in the body.
pub async fn update_department(
    store: web::Data<dyn RecordStore>,
    updates: web::Json<Department>,
) -> Result<HttpResponse, AppError> {
    let department = service::update(store.get_ref(), updates.department_id, &updates.department_name).await?;
    Ok(HttpResponse::Ok().json(department))
}

pub async fn delete_department(
    store: web::Data<dyn RecordStore>,
    department_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    service::delete(store.get_ref(), department_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
