use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// How an employee's pay is computed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalaryType {
    FixedMonthly,
    Daily,
    Hourly,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    User,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Account shape as the backend returns it. Passwords are write-only and
/// never appear here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub full_name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub photo_url: String,
    pub position: String,
    pub salary_type: SalaryType,
    pub salary_rate: f64,
    pub salary_amount: f64,
    pub user_id: String,
    pub department: String,
    pub hire_date: NaiveDate,
    pub created_at: String,
    pub updated_at: String,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub position: String,
    pub salary_type: SalaryType,
    pub salary_rate: f64,
    /// Optional link to an existing user account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    pub name: String,
    pub position: String,
    pub salary_type: SalaryType,
    pub salary_rate: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub manager_id: String,
    pub employee_ids: Vec<String>,
    pub budget: f64,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub employee_id: String,
    pub project_id: String,
    pub check_in_time: NaiveDateTime,
    pub check_out_time: Option<NaiveDateTime>,
    pub selfie_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttendanceRequest {
    pub employee_id: String,
    pub project_id: String,
    pub check_in_time: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttendanceRequest {
    pub check_in_time: NaiveDateTime,
    pub check_out_time: Option<NaiveDateTime>,
}

/// Server-side attendance filter. Only non-empty fields become query
/// parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceQuery {
    pub project_id: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl AttendanceQuery {
    pub fn for_project(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            ..Self::default()
        }
    }

    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(id) = self.project_id.as_deref().filter(|s| !s.is_empty()) {
            params.push(("projectId", id.to_string()));
        }
        if let Some(d) = self.start_date {
            params.push(("startDate", d.to_string()));
        }
        if let Some(d) = self.end_date {
            params.push(("endDate", d.to_string()));
        }
        params
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAttendanceSummary {
    pub project_name: String,
    pub total_present: i64,
    pub total_absent: i64,
}

/// Read-only aggregate computed server-side; the client never mutates it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub checked_in_today: i64,
    pub absent_today: i64,
    pub monthly_salary_expense: f64,
    pub attendance_per_project: Vec<ProjectAttendanceSummary>,
}
