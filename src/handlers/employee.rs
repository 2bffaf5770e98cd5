use actix_web::http::header;
use actix_web::{web, HttpResponse};

use crate::db::RecordStore;
use crate::errors::AppError;
use crate::models::employee::EmployeeUpsert;
use crate::services::employee as service;
use crate::utils::dates;

pub async fn get_employees(store: web::Data<dyn RecordStore>) -> Result<HttpResponse, AppError> {
    let employees = service::list(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee(
    store: web::Data<dyn RecordStore>,
    employee_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let employee = service::get_by_id(store.get_ref(), employee_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn create_employee(
    store: web::Data<dyn RecordStore>,
    new_employee: web::Json<EmployeeUpsert>,
) -> Result<HttpResponse, AppError> {
    let employee = service::create(store.get_ref(), new_employee.into_inner(), dates::today()).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/employee/{}", employee.employee_id)))
        .json(employee))
}

/// `PUT /employee/{id}`: any id inside the body is ignored.
pub async fn update_employee(
    store: web::Data<dyn RecordStore>,
    employee_id: web::Path<i32>,
    updates: web::Json<EmployeeUpsert>,
) -> Result<HttpResponse, AppError> {
    let employee = service::update(
        store.get_ref(),
        employee_id.into_inner(),
        updates.into_inner(),
        dates::today(),
    )
    .await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee(
    store: web::Data<dyn RecordStore>,
    employee_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    service::delete(store.get_ref(), employee_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
