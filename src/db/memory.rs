use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::{RecordStore, StoreError};
use crate::models::department::Department;
use crate::models::employee::{Employee, NewEmployee};

/// In-process [`RecordStore`] with the same id assignment and ordering as
/// the Postgres tables: ids start at 1, grow monotonically and are never
/// reused after a delete.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    departments: BTreeMap<i32, Department>,
    employees: BTreeMap<i32, Employee>,
    last_department_id: i32,
    last_employee_id: i32,
}

impl MemoryStore {
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_departments(&self) -> Result<Vec<Department>, StoreError> {
        Ok(self.tables().departments.values().cloned().collect())
    }

    async fn find_department(&self, department_id: i32) -> Result<Option<Department>, StoreError> {
        Ok(self.tables().departments.get(&department_id).cloned())
    }

    async fn department_name_exists(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self
            .tables()
            .departments
            .values()
            .any(|department| department.department_name == name))
    }

    async fn insert_department(&self, name: &str) -> Result<i32, StoreError> {
        let mut tables = self.tables();
        tables.last_department_id += 1;
        let department_id = tables.last_department_id;
        tables.departments.insert(
            department_id,
            Department {
                department_id,
                department_name: name.to_owned(),
            },
        );
        Ok(department_id)
    }

    async fn update_department(&self, department_id: i32, name: &str) -> Result<Option<Department>, StoreError> {
        let mut tables = self.tables();
        Ok(tables.departments.get_mut(&department_id).map(|department| {
            department.department_name = name.to_owned();
            department.clone()
        }))
    }

    async fn delete_department(&self, department_id: i32) -> Result<u64, StoreError> {
        Ok(u64::from(self.tables().departments.remove(&department_id).is_some()))
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.tables().employees.values().cloned().collect())
    }

    async fn find_employee(&self, employee_id: i32) -> Result<Option<Employee>, StoreError> {
        Ok(self.tables().employees.get(&employee_id).cloned())
    }

    async fn insert_employee(&self, employee: &NewEmployee) -> Result<i32, StoreError> {
        let mut tables = self.tables();
        tables.last_employee_id += 1;
        let employee_id = tables.last_employee_id;
        tables.employees.insert(employee_id, to_row(employee_id, employee));
        Ok(employee_id)
    }

    async fn update_employee(&self, employee_id: i32, employee: &NewEmployee) -> Result<Option<Employee>, StoreError> {
        let mut tables = self.tables();
        Ok(tables.employees.get_mut(&employee_id).map(|row| {
            *row = to_row(employee_id, employee);
            row.clone()
        }))
    }

    async fn delete_employee(&self, employee_id: i32) -> Result<u64, StoreError> {
        Ok(u64::from(self.tables().employees.remove(&employee_id).is_some()))
    }
}

fn to_row(employee_id: i32, employee: &NewEmployee) -> Employee {
    Employee {
        employee_id,
        employee_name: employee.employee_name.clone(),
        department: employee.department.clone(),
        date_of_joining: employee.date_of_joining,
        photo_file_name: employee.photo_file_name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::default();
        let first = store.insert_department("IT").await.expect("insert");
        assert_eq!(store.delete_department(first).await.expect("delete"), 1);
        let second = store.insert_department("HR").await.expect("insert");

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(store.delete_department(first).await.expect("delete"), 0);
    }

    #[tokio::test]
    async fn update_of_missing_row_creates_nothing() {
        let store = MemoryStore::default();

        let updated = store.update_department(7, "Ops").await.expect("update");

        assert_eq!(updated, None);
        assert!(store.list_departments().await.expect("list").is_empty());
    }
}
