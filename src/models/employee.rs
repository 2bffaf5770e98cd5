use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::dates;

/// Photo assigned to employees that never uploaded one.
pub const DEFAULT_PHOTO_FILE_NAME: &str = "anonymous.png";

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub employee_id: i32,
    pub employee_name: String,
    pub department: String,
    pub date_of_joining: NaiveDate,
    pub photo_file_name: String,
}

/// Column values written by an insert or a full-row update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub employee_name: String,
    pub department: String,
    pub date_of_joining: NaiveDate,
    pub photo_file_name: String,
}

/// Employee as it travels over the wire, with the join date as `yyyy-MM-dd`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct EmployeeDto {
    pub employee_id: i32,
    pub employee_name: String,
    pub department: String,
    pub date_of_joining: String,
    pub photo_file_name: String,
}

/// Create/update payload. Every field may be missing or `null`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct EmployeeUpsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_joining: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_file_name: Option<String>,
}

impl EmployeeUpsert {
    /// Resolves the payload into storable columns.
    ///
    /// An unparseable or empty join date becomes `today`, an empty photo
    /// becomes [`DEFAULT_PHOTO_FILE_NAME`].
    pub fn into_new_employee(self, today: NaiveDate) -> NewEmployee {
        let date_of_joining = dates::normalize_date(self.date_of_joining.as_deref().unwrap_or_default(), today);
        let photo_file_name = self
            .photo_file_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PHOTO_FILE_NAME.to_owned());

        NewEmployee {
            employee_name: self.employee_name.unwrap_or_default(),
            department: self.department.unwrap_or_default(),
            date_of_joining,
            photo_file_name,
        }
    }
}

impl From<Employee> for EmployeeDto {
    fn from(employee: Employee) -> Self {
        Self {
            employee_id: employee.employee_id,
            employee_name: employee.employee_name,
            department: employee.department,
            date_of_joining: dates::format_date(employee.date_of_joining),
            photo_file_name: employee.photo_file_name,
        }
    }
}

impl EmployeeDto {
    pub fn from_new(employee_id: i32, employee: NewEmployee) -> Self {
        Self {
            employee_id,
            employee_name: employee.employee_name,
            department: employee.department,
            date_of_joining: dates::format_date(employee.date_of_joining),
            photo_file_name: employee.photo_file_name,
        }
    }

    /// Parsed join date, `None` when the text is not a recognisable date.
    pub fn joined_on(&self) -> Option<NaiveDate> {
        dates::parse_date(&self.date_of_joining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let today = day(2024, 3, 9);
        let row = EmployeeUpsert::default().into_new_employee(today);

        assert_eq!(row.employee_name, "");
        assert_eq!(row.department, "");
        assert_eq!(row.date_of_joining, today);
        assert_eq!(row.photo_file_name, DEFAULT_PHOTO_FILE_NAME);
    }

    #[test]
    fn supplied_fields_are_kept() {
        let upsert: EmployeeUpsert = serde_json::from_str(
            r#"{"EmployeeName":"Bob","Department":"IT","DateOfJoining":"2021-06-17","PhotoFileName":"bob.PNG"}"#,
        )
        .expect("valid payload");

        let row = upsert.into_new_employee(day(2024, 3, 9));

        assert_eq!(row.employee_name, "Bob");
        assert_eq!(row.department, "IT");
        assert_eq!(row.date_of_joining, day(2021, 6, 17));
        assert_eq!(row.photo_file_name, "bob.PNG");
    }

    #[test]
    fn null_fields_deserialize_as_missing() {
        let upsert: EmployeeUpsert =
            serde_json::from_str(r#"{"EmployeeName":null,"PhotoFileName":null}"#).expect("valid payload");

        assert_eq!(upsert, EmployeeUpsert::default());
    }

    #[test]
    fn dto_renders_date_as_plain_day() {
        let dto = EmployeeDto::from(Employee {
            employee_id: 4,
            employee_name: "Ann".to_owned(),
            department: "HR".to_owned(),
            date_of_joining: day(2020, 1, 5),
            photo_file_name: "ann.jpg".to_owned(),
        });

        let json = serde_json::to_value(&dto).expect("serializable");
        assert_eq!(json["DateOfJoining"], "2020-01-05");
        assert_eq!(json["EmployeeId"], 4);
        assert_eq!(dto.joined_on(), Some(day(2020, 1, 5)));
    }
}
