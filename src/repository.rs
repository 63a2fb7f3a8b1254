use log::warn;

use crate::api::HrApi;
use crate::models::{
    AttendanceQuery, AttendanceRecord, CreateAttendanceRequest, CreateEmployeeRequest,
    CreateUserRequest, DashboardSummary, Employee, LoginRequest, LoginResponse, Project,
    UpdateAttendanceRequest, UpdateEmployeeRequest, UpdateUserRequest, UserResponse,
};

/// Failure-tolerant facade over the API client. View-models never see raised
/// errors: reads and writes come back as `Option`, deletes as `bool`, and
/// every failure is logged with the entity it concerned. Bad credentials, a
/// 500 and a dead network all look the same to the caller; this is the
/// intended trade for an internal console.
#[derive(Clone)]
pub struct HrRepository<A: HrApi> {
    api: A,
}

impl<A: HrApi> HrRepository<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn login(&self, username: &str, password: &str) -> Option<LoginResponse> {
        let request = LoginRequest {
            email: username.to_string(),
            password: password.to_string(),
        };
        match self.api.login(&request).await {
            Ok(response) => Some(response),
            Err(err) => {
                warn!("repository: login failed for {username}: {err}");
                None
            }
        }
    }

    pub async fn get_employees(&self, token: &str) -> Option<Vec<Employee>> {
        match self.api.get_employees(token).await {
            Ok(employees) => Some(employees),
            Err(err) => {
                warn!("repository: failed to fetch employees: {err}");
                None
            }
        }
    }

    pub async fn create_employee(
        &self,
        token: &str,
        request: &CreateEmployeeRequest,
    ) -> Option<Employee> {
        match self.api.create_employee(token, request).await {
            Ok(employee) => Some(employee),
            Err(err) => {
                warn!("repository: failed to create employee: {err}");
                None
            }
        }
    }

    pub async fn update_employee(
        &self,
        token: &str,
        employee_id: &str,
        request: &UpdateEmployeeRequest,
    ) -> Option<Employee> {
        match self.api.update_employee(token, employee_id, request).await {
            Ok(employee) => Some(employee),
            Err(err) => {
                warn!("repository: failed to update employee {employee_id}: {err}");
                None
            }
        }
    }

    pub async fn delete_employee(&self, token: &str, employee_id: &str) -> bool {
        match self.api.delete_employee(token, employee_id).await {
            Ok(()) => true,
            Err(err) => {
                warn!("repository: failed to delete employee {employee_id}: {err}");
                false
            }
        }
    }

    pub async fn get_projects(&self, token: &str) -> Option<Vec<Project>> {
        match self.api.get_projects(token).await {
            Ok(projects) => Some(projects),
            Err(err) => {
                warn!("repository: failed to fetch projects: {err}");
                None
            }
        }
    }

    pub async fn create_project(&self, token: &str, project: &Project) -> Option<Project> {
        match self.api.create_project(token, project).await {
            Ok(project) => Some(project),
            Err(err) => {
                warn!("repository: failed to create project: {err}");
                None
            }
        }
    }

    pub async fn update_project(
        &self,
        token: &str,
        project_id: &str,
        project: &Project,
    ) -> Option<Project> {
        match self.api.update_project(token, project_id, project).await {
            Ok(project) => Some(project),
            Err(err) => {
                warn!("repository: failed to update project {project_id}: {err}");
                None
            }
        }
    }

    pub async fn delete_project(&self, token: &str, project_id: &str) -> bool {
        match self.api.delete_project(token, project_id).await {
            Ok(()) => true,
            Err(err) => {
                warn!("repository: failed to delete project {project_id}: {err}");
                false
            }
        }
    }

    pub async fn get_users(&self, token: &str) -> Option<Vec<UserResponse>> {
        match self.api.get_users(token).await {
            Ok(users) => Some(users),
            Err(err) => {
                warn!("repository: failed to fetch users: {err}");
                None
            }
        }
    }

    pub async fn create_user(
        &self,
        token: &str,
        request: &CreateUserRequest,
    ) -> Option<UserResponse> {
        match self.api.create_user(token, request).await {
            Ok(user) => Some(user),
            Err(err) => {
                warn!("repository: failed to create user: {err}");
                None
            }
        }
    }

    pub async fn update_user(
        &self,
        token: &str,
        user_id: &str,
        request: &UpdateUserRequest,
    ) -> Option<UserResponse> {
        match self.api.update_user(token, user_id, request).await {
            Ok(user) => Some(user),
            Err(err) => {
                warn!("repository: failed to update user {user_id}: {err}");
                None
            }
        }
    }

    pub async fn delete_user(&self, token: &str, user_id: &str) -> bool {
        match self.api.delete_user(token, user_id).await {
            Ok(()) => true,
            Err(err) => {
                warn!("repository: failed to delete user {user_id}: {err}");
                false
            }
        }
    }

    pub async fn get_attendance(
        &self,
        token: &str,
        query: &AttendanceQuery,
    ) -> Option<Vec<AttendanceRecord>> {
        match self.api.get_attendance(token, query).await {
            Ok(records) => Some(records),
            Err(err) => {
                warn!("repository: failed to fetch attendance: {err}");
                None
            }
        }
    }

    pub async fn create_attendance(
        &self,
        token: &str,
        request: &CreateAttendanceRequest,
    ) -> Option<AttendanceRecord> {
        match self.api.create_attendance(token, request).await {
            Ok(record) => Some(record),
            Err(err) => {
                warn!("repository: failed to create attendance record: {err}");
                None
            }
        }
    }

    pub async fn update_attendance(
        &self,
        token: &str,
        record_id: &str,
        request: &UpdateAttendanceRequest,
    ) -> Option<AttendanceRecord> {
        match self.api.update_attendance(token, record_id, request).await {
            Ok(record) => Some(record),
            Err(err) => {
                warn!("repository: failed to update attendance record {record_id}: {err}");
                None
            }
        }
    }

    pub async fn delete_attendance(&self, token: &str, record_id: &str) -> bool {
        match self.api.delete_attendance(token, record_id).await {
            Ok(()) => true,
            Err(err) => {
                warn!("repository: failed to delete attendance record {record_id}: {err}");
                false
            }
        }
    }

    pub async fn get_dashboard_summary(&self, token: &str) -> Option<DashboardSummary> {
        match self.api.get_dashboard_summary(token).await {
            Ok(summary) => Some(summary),
            Err(err) => {
                warn!("repository: failed to fetch dashboard summary: {err}");
                None
            }
        }
    }
}
