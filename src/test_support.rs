//! In-memory stand-in for the backend, shared by repository and view-model
//! tests. Behaves like the real server where it matters: ids are assigned on
//! create, deletes of unknown ids come back 404, list calls are counted so
//! tests can assert the refresh-after-mutation pattern.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveDateTime};

use crate::api::HrApi;
use crate::error::ApiError;
use crate::models::{
    AttendanceQuery, AttendanceRecord, CreateAttendanceRequest, CreateEmployeeRequest,
    CreateUserRequest, DashboardSummary, Employee, LoginRequest, LoginResponse, Project, Role,
    SalaryType, UpdateAttendanceRequest, UpdateEmployeeRequest, UpdateUserRequest, UserResponse,
};

enum PlannedFailure {
    Http { status: u16, body: String },
    Transport,
}

#[derive(Default)]
struct StubState {
    employees: Vec<Employee>,
    projects: Vec<Project>,
    users: Vec<UserResponse>,
    attendance: Vec<AttendanceRecord>,
    summary: Option<DashboardSummary>,
    planned_failures: VecDeque<PlannedFailure>,
    list_calls: HashMap<&'static str, usize>,
    last_attendance_query: Option<AttendanceQuery>,
}

#[derive(Clone, Default)]
pub struct StubApi {
    state: Arc<Mutex<StubState>>,
}

fn synthetic_transport_error() -> ApiError {
    // An empty host never builds into a request, which hands us a real
    // reqwest::Error without touching the network.
    let err = reqwest::Client::new().get("http://").build().unwrap_err();
    ApiError::Transport(err)
}

impl StubApi {
    /// Queues one HTTP failure; each API call consumes one queued failure
    /// before anything else, so chaining calls fails several in a row.
    pub fn fail_next(&self, status: u16, body: &str) {
        self.state
            .lock()
            .unwrap()
            .planned_failures
            .push_back(PlannedFailure::Http {
                status,
                body: body.to_string(),
            });
    }

    /// Queues one failure that looks like the network being down.
    pub fn fail_transport_next(&self) {
        self.state
            .lock()
            .unwrap()
            .planned_failures
            .push_back(PlannedFailure::Transport);
    }

    pub fn seed_employee(&self, employee: Employee) {
        self.state.lock().unwrap().employees.push(employee);
    }

    pub fn seed_project(&self, project: Project) {
        self.state.lock().unwrap().projects.push(project);
    }

    pub fn seed_user(&self, user: UserResponse) {
        self.state.lock().unwrap().users.push(user);
    }

    pub fn seed_attendance(&self, record: AttendanceRecord) {
        self.state.lock().unwrap().attendance.push(record);
    }

    pub fn set_summary(&self, summary: DashboardSummary) {
        self.state.lock().unwrap().summary = Some(summary);
    }

    /// How many list fetches the given entity has seen ("employees",
    /// "projects", "users", "attendance").
    pub fn list_calls(&self, entity: &'static str) -> usize {
        *self
            .state
            .lock()
            .unwrap()
            .list_calls
            .get(entity)
            .unwrap_or(&0)
    }

    pub fn last_attendance_query(&self) -> Option<AttendanceQuery> {
        self.state.lock().unwrap().last_attendance_query.clone()
    }

    fn take_failure(&self) -> Result<(), ApiError> {
        match self.state.lock().unwrap().planned_failures.pop_front() {
            Some(PlannedFailure::Http { status, body }) => Err(ApiError::Http { status, body }),
            Some(PlannedFailure::Transport) => Err(synthetic_transport_error()),
            None => Ok(()),
        }
    }

    fn count_list(&self, entity: &'static str) {
        *self
            .state
            .lock()
            .unwrap()
            .list_calls
            .entry(entity)
            .or_insert(0) += 1;
    }
}

impl HrApi for StubApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.take_failure()?;
        Ok(LoginResponse {
            token: "stub-token".into(),
            user: UserResponse {
                id: "u-admin".into(),
                full_name: "Stub Admin".into(),
                email: request.email.clone(),
                role: Role::Admin,
            },
        })
    }

    async fn get_employees(&self, _token: &str) -> Result<Vec<Employee>, ApiError> {
        self.take_failure()?;
        self.count_list("employees");
        Ok(self.state.lock().unwrap().employees.clone())
    }

    async fn create_employee(
        &self,
        _token: &str,
        request: &CreateEmployeeRequest,
    ) -> Result<Employee, ApiError> {
        self.take_failure()?;
        let mut employee = sample_employee(&uuid::Uuid::new_v4().to_string());
        employee.name = request.name.clone();
        employee.position = request.position.clone();
        employee.salary_type = request.salary_type;
        employee.salary_rate = request.salary_rate;
        self.state.lock().unwrap().employees.push(employee.clone());
        Ok(employee)
    }

    async fn update_employee(
        &self,
        _token: &str,
        employee_id: &str,
        request: &UpdateEmployeeRequest,
    ) -> Result<Employee, ApiError> {
        self.take_failure()?;
        let mut state = self.state.lock().unwrap();
        let Some(employee) = state.employees.iter_mut().find(|e| e.id == employee_id) else {
            return Err(ApiError::Http {
                status: 404,
                body: "employee not found".into(),
            });
        };
        employee.name = request.name.clone();
        employee.position = request.position.clone();
        employee.salary_type = request.salary_type;
        employee.salary_rate = request.salary_rate;
        Ok(employee.clone())
    }

    async fn delete_employee(&self, _token: &str, employee_id: &str) -> Result<(), ApiError> {
        self.take_failure()?;
        let mut state = self.state.lock().unwrap();
        let before = state.employees.len();
        state.employees.retain(|e| e.id != employee_id);
        if state.employees.len() == before {
            return Err(ApiError::Http {
                status: 404,
                body: "employee not found".into(),
            });
        }
        Ok(())
    }

    async fn get_projects(&self, _token: &str) -> Result<Vec<Project>, ApiError> {
        self.take_failure()?;
        self.count_list("projects");
        Ok(self.state.lock().unwrap().projects.clone())
    }

    async fn create_project(&self, _token: &str, project: &Project) -> Result<Project, ApiError> {
        self.take_failure()?;
        let mut created = project.clone();
        created.id = uuid::Uuid::new_v4().to_string();
        self.state.lock().unwrap().projects.push(created.clone());
        Ok(created)
    }

    async fn update_project(
        &self,
        _token: &str,
        project_id: &str,
        project: &Project,
    ) -> Result<Project, ApiError> {
        self.take_failure()?;
        let mut state = self.state.lock().unwrap();
        let Some(existing) = state.projects.iter_mut().find(|p| p.id == project_id) else {
            return Err(ApiError::Http {
                status: 404,
                body: "project not found".into(),
            });
        };
        *existing = Project {
            id: project_id.to_string(),
            ..project.clone()
        };
        Ok(existing.clone())
    }

    async fn delete_project(&self, _token: &str, project_id: &str) -> Result<(), ApiError> {
        self.take_failure()?;
        let mut state = self.state.lock().unwrap();
        let before = state.projects.len();
        state.projects.retain(|p| p.id != project_id);
        if state.projects.len() == before {
            return Err(ApiError::Http {
                status: 404,
                body: "project not found".into(),
            });
        }
        Ok(())
    }

    async fn get_users(&self, _token: &str) -> Result<Vec<UserResponse>, ApiError> {
        self.take_failure()?;
        self.count_list("users");
        Ok(self.state.lock().unwrap().users.clone())
    }

    async fn create_user(
        &self,
        _token: &str,
        request: &CreateUserRequest,
    ) -> Result<UserResponse, ApiError> {
        self.take_failure()?;
        let user = UserResponse {
            id: uuid::Uuid::new_v4().to_string(),
            full_name: request.full_name.clone(),
            email: request.email.clone(),
            role: request.role,
        };
        self.state.lock().unwrap().users.push(user.clone());
        Ok(user)
    }

    async fn update_user(
        &self,
        _token: &str,
        user_id: &str,
        request: &UpdateUserRequest,
    ) -> Result<UserResponse, ApiError> {
        self.take_failure()?;
        let mut state = self.state.lock().unwrap();
        let Some(user) = state.users.iter_mut().find(|u| u.id == user_id) else {
            return Err(ApiError::Http {
                status: 404,
                body: "user not found".into(),
            });
        };
        user.full_name = request.full_name.clone();
        user.email = request.email.clone();
        user.role = request.role;
        Ok(user.clone())
    }

    async fn delete_user(&self, _token: &str, user_id: &str) -> Result<(), ApiError> {
        self.take_failure()?;
        let mut state = self.state.lock().unwrap();
        let before = state.users.len();
        state.users.retain(|u| u.id != user_id);
        if state.users.len() == before {
            return Err(ApiError::Http {
                status: 404,
                body: "user not found".into(),
            });
        }
        Ok(())
    }

    async fn get_attendance(
        &self,
        _token: &str,
        query: &AttendanceQuery,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.take_failure()?;
        self.count_list("attendance");
        let mut state = self.state.lock().unwrap();
        state.last_attendance_query = Some(query.clone());
        let records = state
            .attendance
            .iter()
            .filter(|r| match query.project_id.as_deref() {
                Some(pid) => r.project_id == pid,
                None => true,
            })
            .filter(|r| match query.start_date {
                Some(d) => r.check_in_time.date() >= d,
                None => true,
            })
            .filter(|r| match query.end_date {
                Some(d) => r.check_in_time.date() <= d,
                None => true,
            })
            .cloned()
            .collect();
        Ok(records)
    }

    async fn create_attendance(
        &self,
        _token: &str,
        request: &CreateAttendanceRequest,
    ) -> Result<AttendanceRecord, ApiError> {
        self.take_failure()?;
        let record = AttendanceRecord {
            id: uuid::Uuid::new_v4().to_string(),
            employee_id: request.employee_id.clone(),
            project_id: request.project_id.clone(),
            check_in_time: request.check_in_time,
            check_out_time: request.check_out_time,
            selfie_url: None,
        };
        self.state.lock().unwrap().attendance.push(record.clone());
        Ok(record)
    }

    async fn update_attendance(
        &self,
        _token: &str,
        record_id: &str,
        request: &UpdateAttendanceRequest,
    ) -> Result<AttendanceRecord, ApiError> {
        self.take_failure()?;
        let mut state = self.state.lock().unwrap();
        let Some(record) = state.attendance.iter_mut().find(|r| r.id == record_id) else {
            return Err(ApiError::Http {
                status: 404,
                body: "attendance record not found".into(),
            });
        };
        record.check_in_time = request.check_in_time;
        record.check_out_time = request.check_out_time;
        Ok(record.clone())
    }

    async fn delete_attendance(&self, _token: &str, record_id: &str) -> Result<(), ApiError> {
        self.take_failure()?;
        let mut state = self.state.lock().unwrap();
        let before = state.attendance.len();
        state.attendance.retain(|r| r.id != record_id);
        if state.attendance.len() == before {
            return Err(ApiError::Http {
                status: 404,
                body: "attendance record not found".into(),
            });
        }
        Ok(())
    }

    async fn get_dashboard_summary(&self, _token: &str) -> Result<DashboardSummary, ApiError> {
        self.take_failure()?;
        self.state
            .lock()
            .unwrap()
            .summary
            .clone()
            .ok_or(ApiError::Http {
                status: 404,
                body: "no summary".into(),
            })
    }
}

pub fn sample_employee(id: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: "John Doe".into(),
        photo_url: String::new(),
        position: "Engineer".into(),
        salary_type: SalaryType::FixedMonthly,
        salary_rate: 1200.0,
        salary_amount: 1200.0,
        user_id: "u1".into(),
        department: "Construction".into(),
        hire_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        created_at: "2024-01-01T08:00:00".into(),
        updated_at: "2024-01-01T08:00:00".into(),
        is_active: true,
    }
}

pub fn sample_project(id: &str) -> Project {
    Project {
        id: id.to_string(),
        name: "Site A".into(),
        description: "Main construction site".into(),
        location: "Tashkent".into(),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        manager_id: "u-admin".into(),
        employee_ids: vec!["e1".into()],
        budget: 100_000.0,
        status: "ACTIVE".into(),
        created_at: "2024-01-01T08:00:00".into(),
        updated_at: "2024-01-01T08:00:00".into(),
    }
}

pub fn sample_user(id: &str) -> UserResponse {
    UserResponse {
        id: id.to_string(),
        full_name: "Jane Admin".into(),
        email: "jane@x.com".into(),
        role: Role::Manager,
    }
}

pub fn sample_attendance(id: &str, project_id: &str, check_in: NaiveDateTime) -> AttendanceRecord {
    AttendanceRecord {
        id: id.to_string(),
        employee_id: "e1".into(),
        project_id: project_id.to_string(),
        check_in_time: check_in,
        check_out_time: None,
        selfie_url: None,
    }
}

pub fn sample_summary() -> DashboardSummary {
    DashboardSummary {
        checked_in_today: 12,
        absent_today: 3,
        monthly_salary_expense: 48_000.0,
        attendance_per_project: vec![crate::models::ProjectAttendanceSummary {
            project_name: "Site A".into(),
            total_present: 12,
            total_absent: 3,
        }],
    }
}
