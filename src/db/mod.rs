mod memory;
mod postgres;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::models::department::Department;
use crate::models::employee::{Employee, NewEmployee};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Persistence for the department and employee tables.
///
/// Every method maps to one parameterized statement. Lookups by id return
/// `None` (or zero affected rows) instead of failing when nothing matches.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All departments in ascending id order.
    async fn list_departments(&self) -> Result<Vec<Department>, StoreError>;

    async fn find_department(&self, department_id: i32) -> Result<Option<Department>, StoreError>;

    /// Whether any department currently carries `name`.
    async fn department_name_exists(&self, name: &str) -> Result<bool, StoreError>;

    /// Inserts a department and returns the assigned id.
    async fn insert_department(&self, name: &str) -> Result<i32, StoreError>;

    async fn update_department(&self, department_id: i32, name: &str) -> Result<Option<Department>, StoreError>;

    /// Returns the number of rows removed.
    async fn delete_department(&self, department_id: i32) -> Result<u64, StoreError>;

    /// All employees in ascending id order.
    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError>;

    async fn find_employee(&self, employee_id: i32) -> Result<Option<Employee>, StoreError>;

    async fn insert_employee(&self, employee: &NewEmployee) -> Result<i32, StoreError>;

    async fn update_employee(&self, employee_id: i32, employee: &NewEmployee) -> Result<Option<Employee>, StoreError>;

    async fn delete_employee(&self, employee_id: i32) -> Result<u64, StoreError>;
}

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}
