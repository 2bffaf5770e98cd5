use serde::{Deserialize, Serialize};

/// A department row, also the JSON shape exchanged with clients.
///
/// Both fields default so that `{"DepartmentName": "IT"}` is a valid create
/// body; an update without `DepartmentId` targets id 0 and finds nothing.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Department {
    pub department_id: i32,
    pub department_name: String,
}
