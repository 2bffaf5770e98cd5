//! Filtering and sorting of already-fetched tables. Each call works over the
//! full list so results never depend on a previous filter.

use std::cmp::Ordering;

use crate::models::department::Department;
use crate::models::employee::EmployeeDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentColumn {
    Id,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeColumn {
    Id,
    Name,
    Department,
    DateOfJoining,
}

/// Case-insensitive substring filters; a blank filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentFilter {
    pub id: String,
    pub name: String,
}

impl DepartmentFilter {
    pub fn matches(&self, department: &Department) -> bool {
        contains(&department.department_id.to_string(), &self.id) && contains(&department.department_name, &self.name)
    }

    pub fn apply(&self, departments: &[Department]) -> Vec<Department> {
        departments.iter().filter(|d| self.matches(d)).cloned().collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub id: String,
    pub name: String,
    pub department: String,
}

impl EmployeeFilter {
    pub fn matches(&self, employee: &EmployeeDto) -> bool {
        contains(&employee.employee_id.to_string(), &self.id)
            && contains(&employee.employee_name, &self.name)
            && contains(&employee.department, &self.department)
    }

    pub fn apply(&self, employees: &[EmployeeDto]) -> Vec<EmployeeDto> {
        employees.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}

/// Stable sort; equal keys keep their current relative order.
pub fn sort_departments(departments: &mut [Department], column: DepartmentColumn, order: SortOrder) {
    departments.sort_by(|a, b| {
        let ordering = match column {
            DepartmentColumn::Id => a.department_id.cmp(&b.department_id),
            DepartmentColumn::Name => a.department_name.cmp(&b.department_name),
        };
        directed(ordering, order)
    });
}

/// Stable sort. Join dates compare as text, which for `yyyy-MM-dd` is
/// chronological.
pub fn sort_employees(employees: &mut [EmployeeDto], column: EmployeeColumn, order: SortOrder) {
    employees.sort_by(|a, b| {
        let ordering = match column {
            EmployeeColumn::Id => a.employee_id.cmp(&b.employee_id),
            EmployeeColumn::Name => a.employee_name.cmp(&b.employee_name),
            EmployeeColumn::Department => a.department.cmp(&b.department),
            EmployeeColumn::DateOfJoining => a.date_of_joining.cmp(&b.date_of_joining),
        };
        directed(ordering, order)
    });
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => ordering,
        SortOrder::Descending => ordering.reverse(),
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.trim().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn departments() -> Vec<Department> {
        [(1, "IT"), (2, "Human Resources"), (12, "Finance"), (21, "it support")]
            .into_iter()
            .map(|(department_id, name)| Department {
                department_id,
                department_name: name.to_owned(),
            })
            .collect()
    }

    fn employee(employee_id: i32, name: &str, department: &str, date: &str) -> EmployeeDto {
        EmployeeDto {
            employee_id,
            employee_name: name.to_owned(),
            department: department.to_owned(),
            date_of_joining: date.to_owned(),
            photo_file_name: "anonymous.png".to_owned(),
        }
    }

    fn ids(departments: &[Department]) -> Vec<i32> {
        departments.iter().map(|d| d.department_id).collect()
    }

    #[rstest]
    #[case("", "", vec![1, 2, 12, 21])]
    #[case("", " it ", vec![1, 21])]
    #[case("1", "", vec![1, 12, 21])]
    #[case("1", "IT", vec![1, 21])]
    #[case("2", "fin", vec![12])]
    #[case("", "marketing", vec![])]
    fn department_filter(#[case] id: &str, #[case] name: &str, #[case] expected: Vec<i32>) {
        let filter = DepartmentFilter {
            id: id.to_owned(),
            name: name.to_owned(),
        };
        assert_eq!(ids(&filter.apply(&departments())), expected);
    }

    #[test]
    fn employee_filter_combines_columns() {
        let employees = vec![
            employee(1, "Ann Lee", "IT", "2021-01-01"),
            employee(2, "Bob", "HR", "2021-01-01"),
            employee(3, "Anna", "HR", "2021-01-01"),
        ];
        let filter = EmployeeFilter {
            name: "ANN".to_owned(),
            department: "hr".to_owned(),
            ..EmployeeFilter::default()
        };

        let matched: Vec<_> = filter.apply(&employees).iter().map(|e| e.employee_id).collect();
        assert_eq!(matched, [3]);
    }

    #[test]
    fn department_sorting_in_both_directions() {
        let mut rows = departments();

        sort_departments(&mut rows, DepartmentColumn::Name, SortOrder::Ascending);
        assert_eq!(ids(&rows), [12, 2, 1, 21]);

        sort_departments(&mut rows, DepartmentColumn::Id, SortOrder::Descending);
        assert_eq!(ids(&rows), [21, 12, 2, 1]);
    }

    #[test]
    fn employee_sorting_by_date_is_stable() {
        let mut rows = vec![
            employee(1, "a", "IT", "2022-05-01"),
            employee(2, "b", "IT", "2020-01-15"),
            employee(3, "c", "IT", "2022-05-01"),
        ];

        sort_employees(&mut rows, EmployeeColumn::DateOfJoining, SortOrder::Descending);

        let order: Vec<_> = rows.iter().map(|e| e.employee_id).collect();
        assert_eq!(order, [1, 3, 2]);
    }
}
