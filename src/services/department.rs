use crate::db::RecordStore;
use crate::errors::AppError;
use crate::models::department::Department;

pub async fn list(store: &dyn RecordStore) -> Result<Vec<Department>, AppError> {
    Ok(store.list_departments().await?)
}

pub async fn get_by_id(store: &dyn RecordStore, department_id: i32) -> Result<Department, AppError> {
    store.find_department(department_id).await?.ok_or(AppError::NotFound)
}

/// Inserts a department. Names are neither validated nor required to be unique.
pub async fn create(store: &dyn RecordStore, name: &str) -> Result<Department, AppError> {
    let department_id = store.insert_department(name).await?;
    Ok(Department {
        department_id,
        department_name: name.to_owned(),
    })
}

/// Renames a department. Employees keep the old name in their own column.
pub async fn update(store: &dyn RecordStore, department_id: i32, name: &str) -> Result<Department, AppError> {
    store
        .update_department(department_id, name)
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn delete(store: &dyn RecordStore, department_id: i32) -> Result<(), AppError> {
    match store.delete_department(department_id).await? {
        0 => Err(AppError::NotFound),
        _ => Ok(()),
    }
}
