use chrono::NaiveDate;
use log::warn;

use crate::db::RecordStore;
use crate::errors::AppError;
use crate::models::employee::{EmployeeDto, EmployeeUpsert, NewEmployee};

pub async fn list(store: &dyn RecordStore) -> Result<Vec<EmployeeDto>, AppError> {
    let employees = store.list_employees().await?;
    Ok(employees.into_iter().map(EmployeeDto::from).collect())
}

pub async fn get_by_id(store: &dyn RecordStore, employee_id: i32) -> Result<EmployeeDto, AppError> {
    store
        .find_employee(employee_id)
        .await?
        .map(EmployeeDto::from)
        .ok_or(AppError::NotFound)
}

/// Inserts an employee. The join date falls back to `today` when it cannot be
/// parsed; the returned DTO carries the assigned id and the stored date.
pub async fn create(store: &dyn RecordStore, upsert: EmployeeUpsert, today: NaiveDate) -> Result<EmployeeDto, AppError> {
    let employee = upsert.into_new_employee(today);
    warn_on_unknown_department(store, &employee).await;

    let employee_id = store.insert_employee(&employee).await?;
    Ok(EmployeeDto::from_new(employee_id, employee))
}

/// Replaces every column of an existing employee.
pub async fn update(
    store: &dyn RecordStore,
    employee_id: i32,
    upsert: EmployeeUpsert,
    today: NaiveDate,
) -> Result<EmployeeDto, AppError> {
    let employee = upsert.into_new_employee(today);
    warn_on_unknown_department(store, &employee).await;

    store
        .update_employee(employee_id, &employee)
        .await?
        .map(EmployeeDto::from)
        .ok_or(AppError::NotFound)
}

pub async fn delete(store: &dyn RecordStore, employee_id: i32) -> Result<(), AppError> {
    match store.delete_employee(employee_id).await? {
        0 => Err(AppError::NotFound),
        _ => Ok(()),
    }
}

// Employees reference departments by name only, so a dangling name is allowed
// and a failed lookup never blocks the write.
async fn warn_on_unknown_department(store: &dyn RecordStore, employee: &NewEmployee) {
    match store.department_name_exists(&employee.department).await {
        Ok(true) => {}
        Ok(false) => warn!(
            "Employee {:?} references unknown department {:?}",
            employee.employee_name, employee.department
        ),
        Err(err) => warn!(
            "Could not check department {:?} for employee {:?}: {}",
            employee.department, employee.employee_name, err
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryStore, StoreError};
    use crate::models::department::Department;
    use crate::models::employee::{Employee, DEFAULT_PHOTO_FILE_NAME};
    use crate::services::department;
    use async_trait::async_trait;
    use rstest::rstest;

    /// Delegates to [`MemoryStore`] except that department lookups by name fail.
    #[derive(Default)]
    struct FailingLookupStore {
        inner: MemoryStore,
    }

    #[async_trait]
    impl RecordStore for FailingLookupStore {
        async fn list_departments(&self) -> Result<Vec<Department>, StoreError> {
            self.inner.list_departments().await
        }

        async fn find_department(&self, department_id: i32) -> Result<Option<Department>, StoreError> {
            self.inner.find_department(department_id).await
        }

        async fn department_name_exists(&self, _name: &str) -> Result<bool, StoreError> {
            Err(StoreError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn insert_department(&self, name: &str) -> Result<i32, StoreError> {
            self.inner.insert_department(name).await
        }

        async fn update_department(&self, department_id: i32, name: &str) -> Result<Option<Department>, StoreError> {
            self.inner.update_department(department_id, name).await
        }

        async fn delete_department(&self, department_id: i32) -> Result<u64, StoreError> {
            self.inner.delete_department(department_id).await
        }

        async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
            self.inner.list_employees().await
        }

        async fn find_employee(&self, employee_id: i32) -> Result<Option<Employee>, StoreError> {
            self.inner.find_employee(employee_id).await
        }

        async fn insert_employee(&self, employee: &NewEmployee) -> Result<i32, StoreError> {
            self.inner.insert_employee(employee).await
        }

        async fn update_employee(&self, employee_id: i32, employee: &NewEmployee) -> Result<Option<Employee>, StoreError> {
            self.inner.update_employee(employee_id, employee).await
        }

        async fn delete_employee(&self, employee_id: i32) -> Result<u64, StoreError> {
            self.inner.delete_employee(employee_id).await
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn upsert(name: &str, department: &str, date: &str) -> EmployeeUpsert {
        EmployeeUpsert {
            employee_name: Some(name.to_owned()),
            department: Some(department.to_owned()),
            date_of_joining: Some(date.to_owned()),
            photo_file_name: None,
        }
    }

    #[tokio::test]
    async fn valid_date_round_trips() {
        let store = MemoryStore::default();

        let created = create(&store, upsert("Bob", "IT", "2021-06-17"), day(2024, 1, 1))
            .await
            .expect("create");
        let fetched = get_by_id(&store, created.employee_id).await.expect("get");

        assert_eq!(created.date_of_joining, "2021-06-17");
        assert_eq!(fetched, created);
        assert_eq!(fetched.photo_file_name, DEFAULT_PHOTO_FILE_NAME);
    }

    #[rstest]
    #[case("")]
    #[case("not-a-date")]
    #[tokio::test]
    async fn invalid_date_becomes_today(#[case] raw: &str) {
        let store = MemoryStore::default();
        let today = day(2024, 5, 20);

        let created = create(&store, upsert("Ann", "HR", raw), today).await.expect("create");

        assert_eq!(created.date_of_joining, "2024-05-20");
        let fetched = get_by_id(&store, created.employee_id).await.expect("get");
        assert_eq!(fetched.date_of_joining, "2024-05-20");
    }

    #[tokio::test]
    async fn unknown_department_is_still_stored() {
        let store = MemoryStore::default();
        department::create(&store, "IT").await.expect("department");

        let created = create(&store, upsert("Eve", "Ghost", "2022-02-02"), day(2024, 1, 1))
            .await
            .expect("create");

        assert_eq!(created.department, "Ghost");
    }

    #[tokio::test]
    async fn failed_department_lookup_does_not_block_writes() {
        let store = FailingLookupStore::default();

        let created = create(&store, upsert("Bob", "IT", "2021-06-17"), day(2024, 1, 1))
            .await
            .expect("create despite failed lookup");
        let updated = update(&store, created.employee_id, upsert("Bob", "HR", "2021-06-17"), day(2024, 1, 1))
            .await
            .expect("update despite failed lookup");

        assert_eq!(updated.department, "HR");
        assert_eq!(get_by_id(&store, created.employee_id).await.expect("get"), updated);
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let store = MemoryStore::default();
        let created = create(&store, upsert("Bob", "IT", "2021-06-17"), day(2024, 1, 1))
            .await
            .expect("create");

        let mut replacement = upsert("Robert", "HR", "2022-07-01");
        replacement.photo_file_name = Some("robert.jpg".to_owned());
        let updated = update(&store, created.employee_id, replacement, day(2024, 1, 1))
            .await
            .expect("update");

        assert_eq!(
            updated,
            EmployeeDto {
                employee_id: created.employee_id,
                employee_name: "Robert".to_owned(),
                department: "HR".to_owned(),
                date_of_joining: "2022-07-01".to_owned(),
                photo_file_name: "robert.jpg".to_owned(),
            }
        );
    }

    #[tokio::test]
    async fn update_and_delete_of_unknown_id_are_not_found() {
        let store = MemoryStore::default();

        let updated = update(&store, 9, upsert("X", "IT", ""), day(2024, 1, 1)).await;
        let deleted = delete(&store, 9).await;

        assert!(matches!(updated, Err(AppError::NotFound)));
        assert!(matches!(deleted, Err(AppError::NotFound)));
        assert!(list(&store).await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn list_is_in_id_order() {
        let store = MemoryStore::default();
        for name in ["a", "b", "c"] {
            create(&store, upsert(name, "IT", "2020-01-01"), day(2024, 1, 1))
                .await
                .expect("create");
        }

        let ids: Vec<_> = list(&store).await.expect("list").iter().map(|e| e.employee_id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }
}
