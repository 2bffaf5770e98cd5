//! Dashboard figures, recomputed from the full department and employee lists.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::department::Department;
use crate::models::employee::EmployeeDto;

/// Employees who joined on or after `today - RECENT_WINDOW_DAYS` are recent.
pub const RECENT_WINDOW_DAYS: i64 = 30;
/// Rows shown in each dashboard panel.
pub const PANEL_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_departments: usize,
    pub total_employees: usize,
    pub recent_joins: usize,
    /// Rounded to one decimal place, `0.0` without departments.
    pub average_employees_per_department: f64,
}

impl DashboardStats {
    pub fn derive(departments: &[Department], employees: &[EmployeeDto], today: NaiveDate) -> Self {
        let average_employees_per_department = if departments.is_empty() {
            0.0
        } else {
            let average = employees.len() as f64 / departments.len() as f64;
            (average * 10.0).round() / 10.0
        };

        Self {
            total_departments: departments.len(),
            total_employees: employees.len(),
            recent_joins: employees.iter().filter(|e| is_recent(e, today)).count(),
            average_employees_per_department,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionEntry {
    pub department: String,
    pub employees: usize,
}

/// Everything the dashboard renders, ready to serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub stats: DashboardStats,
    pub recent_employees: Vec<EmployeeDto>,
    pub department_distribution: Vec<DistributionEntry>,
    pub department_sizes: Vec<DistributionEntry>,
}

pub struct Dashboard<'a> {
    departments: &'a [Department],
    employees: &'a [EmployeeDto],
    today: NaiveDate,
}

impl<'a> Dashboard<'a> {
    pub fn new(departments: &'a [Department], employees: &'a [EmployeeDto], today: NaiveDate) -> Self {
        Self {
            departments,
            employees,
            today,
        }
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::derive(self.departments, self.employees, self.today)
    }

    /// Employees inside the recent window, in list order.
    pub fn recent_joins(&self) -> Vec<&'a EmployeeDto> {
        self.employees.iter().filter(|e| is_recent(e, self.today)).collect()
    }

    /// Latest joins first. Employees whose date does not parse are skipped.
    pub fn recent_employees(&self, limit: usize) -> Vec<&'a EmployeeDto> {
        let mut dated: Vec<(NaiveDate, &'a EmployeeDto)> = self
            .employees
            .iter()
            .filter_map(|e| e.joined_on().map(|date| (date, e)))
            .collect();
        dated.sort_by(|(a, _), (b, _)| b.cmp(a));
        dated.into_iter().take(limit).map(|(_, e)| e).collect()
    }

    /// Head count per department name as stored on the employee rows,
    /// including names with no matching department.
    pub fn distribution_map(&self) -> BTreeMap<&'a str, usize> {
        let mut counts = BTreeMap::new();
        for employee in self.employees {
            *counts.entry(employee.department.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Largest departments first, ties by name, at most `limit` entries.
    pub fn department_distribution(&self, limit: usize) -> Vec<DistributionEntry> {
        let mut entries: Vec<_> = self.distribution_map().into_iter().collect();
        entries.sort_by(|(name_a, a), (name_b, b)| b.cmp(a).then_with(|| name_a.cmp(name_b)));
        entries
            .into_iter()
            .take(limit)
            .map(|(department, employees)| DistributionEntry {
                department: department.to_owned(),
                employees,
            })
            .collect()
    }

    pub fn employees_in_department(&self, department_name: &str) -> usize {
        self.employees
            .iter()
            .filter(|e| e.department == department_name)
            .count()
    }

    pub fn report(&self) -> DashboardReport {
        DashboardReport {
            stats: self.stats(),
            recent_employees: self.recent_employees(PANEL_LIMIT).into_iter().cloned().collect(),
            department_distribution: self.department_distribution(PANEL_LIMIT),
            department_sizes: self
                .departments
                .iter()
                .map(|d| DistributionEntry {
                    department: d.department_name.clone(),
                    employees: self.employees_in_department(&d.department_name),
                })
                .collect(),
        }
    }
}

fn is_recent(employee: &EmployeeDto, today: NaiveDate) -> bool {
    let cutoff = today - Duration::days(RECENT_WINDOW_DAYS);
    employee.joined_on().is_some_and(|date| date >= cutoff)
}
