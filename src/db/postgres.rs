use async_trait::async_trait;
use sqlx::PgPool;

use super::{RecordStore, StoreError};
use crate::models::department::Department;
use crate::models::employee::{Employee, NewEmployee};

const EMPLOYEE_COLUMNS: &str = "employee_id, employee_name, department, date_of_joining, photo_file_name";

/// [`RecordStore`] over a Postgres pool. A connection is checked out for a
/// single statement and returned to the pool when the statement finishes.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn list_departments(&self) -> Result<Vec<Department>, StoreError> {
        let departments = sqlx::query_as::<_, Department>(
            "SELECT department_id, department_name FROM department ORDER BY department_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(departments)
    }

    async fn find_department(&self, department_id: i32) -> Result<Option<Department>, StoreError> {
        let department = sqlx::query_as::<_, Department>(
            "SELECT department_id, department_name FROM department WHERE department_id = $1",
        )
        .bind(department_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(department)
    }

    async fn department_name_exists(&self, name: &str) -> Result<bool, StoreError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM department WHERE department_name = $1)",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn insert_department(&self, name: &str) -> Result<i32, StoreError> {
        let department_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO department (department_name) VALUES ($1) RETURNING department_id",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(department_id)
    }

    async fn update_department(&self, department_id: i32, name: &str) -> Result<Option<Department>, StoreError> {
        let department = sqlx::query_as::<_, Department>(
            "UPDATE department SET department_name = $1 WHERE department_id = $2 \
             RETURNING department_id, department_name",
        )
        .bind(name)
        .bind(department_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(department)
    }

    async fn delete_department(&self, department_id: i32) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM department WHERE department_id = $1")
            .bind(department_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employee ORDER BY employee_id");
        let employees = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    async fn find_employee(&self, employee_id: i32) -> Result<Option<Employee>, StoreError> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE employee_id = $1");
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(employee_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(employee)
    }

    async fn insert_employee(&self, employee: &NewEmployee) -> Result<i32, StoreError> {
        let employee_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO employee (employee_name, department, date_of_joining, photo_file_name) \
             VALUES ($1, $2, $3, $4) RETURNING employee_id",
        )
        .bind(&employee.employee_name)
        .bind(&employee.department)
        .bind(employee.date_of_joining)
        .bind(&employee.photo_file_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(employee_id)
    }

    async fn update_employee(&self, employee_id: i32, employee: &NewEmployee) -> Result<Option<Employee>, StoreError> {
        let sql = format!(
            "UPDATE employee SET employee_name = $1, department = $2, date_of_joining = $3, photo_file_name = $4 \
             WHERE employee_id = $5 RETURNING {EMPLOYEE_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Employee>(&sql)
            .bind(&employee.employee_name)
            .bind(&employee.department)
            .bind(employee.date_of_joining)
            .bind(&employee.photo_file_name)
            .bind(employee_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(updated)
    }

    async fn delete_employee(&self, employee_id: i32) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM employee WHERE employee_id = $1")
            .bind(employee_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
