use log::debug;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::error::ApiError;
use crate::models::{
    AttendanceQuery, AttendanceRecord, CreateAttendanceRequest, CreateEmployeeRequest,
    CreateUserRequest, DashboardSummary, Employee, LoginRequest, LoginResponse, Project,
    UpdateAttendanceRequest, UpdateEmployeeRequest, UpdateUserRequest, UserResponse,
};

/// One method per backend operation. `ApiClient` is the production
/// implementation; tests substitute an in-memory stub.
#[allow(async_fn_in_trait)]
pub trait HrApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    async fn get_employees(&self, token: &str) -> Result<Vec<Employee>, ApiError>;
    async fn create_employee(
        &self,
        token: &str,
        request: &CreateEmployeeRequest,
    ) -> Result<Employee, ApiError>;
    async fn update_employee(
        &self,
        token: &str,
        employee_id: &str,
        request: &UpdateEmployeeRequest,
    ) -> Result<Employee, ApiError>;
    async fn delete_employee(&self, token: &str, employee_id: &str) -> Result<(), ApiError>;

    async fn get_projects(&self, token: &str) -> Result<Vec<Project>, ApiError>;
    async fn create_project(&self, token: &str, project: &Project) -> Result<Project, ApiError>;
    async fn update_project(
        &self,
        token: &str,
        project_id: &str,
        project: &Project,
    ) -> Result<Project, ApiError>;
    async fn delete_project(&self, token: &str, project_id: &str) -> Result<(), ApiError>;

    async fn get_users(&self, token: &str) -> Result<Vec<UserResponse>, ApiError>;
    async fn create_user(
        &self,
        token: &str,
        request: &CreateUserRequest,
    ) -> Result<UserResponse, ApiError>;
    async fn update_user(
        &self,
        token: &str,
        user_id: &str,
        request: &UpdateUserRequest,
    ) -> Result<UserResponse, ApiError>;
    async fn delete_user(&self, token: &str, user_id: &str) -> Result<(), ApiError>;

    async fn get_attendance(
        &self,
        token: &str,
        query: &AttendanceQuery,
    ) -> Result<Vec<AttendanceRecord>, ApiError>;
    async fn create_attendance(
        &self,
        token: &str,
        request: &CreateAttendanceRequest,
    ) -> Result<AttendanceRecord, ApiError>;
    async fn update_attendance(
        &self,
        token: &str,
        record_id: &str,
        request: &UpdateAttendanceRequest,
    ) -> Result<AttendanceRecord, ApiError>;
    async fn delete_attendance(&self, token: &str, record_id: &str) -> Result<(), ApiError>;

    async fn get_dashboard_summary(&self, token: &str) -> Result<DashboardSummary, ApiError>;
}

/// Stateless JSON client for the HR backend. Holds nothing mutable beyond
/// the connection pool inside `reqwest::Client`; cloning is cheap.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(ApiError::from_reqwest)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the request and maps every failure mode onto the error
    /// taxonomy. Single attempt, no retries.
    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("api: request failed with {status}: {body}");
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response.text().await.map_err(ApiError::from_reqwest)?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, token: &str, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.get(self.url(path)).bearer_auth(token)).await?;
        Self::read_json(response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .send(self.http.post(self.url(path)).bearer_auth(token).json(body))
            .await?;
        Self::read_json(response).await
    }

    async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .send(self.http.put(self.url(path)).bearer_auth(token).json(body))
            .await?;
        Self::read_json(response).await
    }

    async fn delete(&self, token: &str, path: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(path)).bearer_auth(token))
            .await?;
        Ok(())
    }
}

impl HrApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        debug!("api: login attempt for {}", request.email);
        let response = self
            .send(self.http.post(self.url("/auth/login")).json(request))
            .await?;
        Self::read_json(response).await
    }

    async fn get_employees(&self, token: &str) -> Result<Vec<Employee>, ApiError> {
        self.get_json(token, "/admin/employees").await
    }

    async fn create_employee(
        &self,
        token: &str,
        request: &CreateEmployeeRequest,
    ) -> Result<Employee, ApiError> {
        self.post_json(token, "/admin/employees", request).await
    }

    async fn update_employee(
        &self,
        token: &str,
        employee_id: &str,
        request: &UpdateEmployeeRequest,
    ) -> Result<Employee, ApiError> {
        self.put_json(token, &format!("/admin/employees/{employee_id}"), request)
            .await
    }

    async fn delete_employee(&self, token: &str, employee_id: &str) -> Result<(), ApiError> {
        self.delete(token, &format!("/admin/employees/{employee_id}"))
            .await
    }

    async fn get_projects(&self, token: &str) -> Result<Vec<Project>, ApiError> {
        self.get_json(token, "/admin/projects").await
    }

    async fn create_project(&self, token: &str, project: &Project) -> Result<Project, ApiError> {
        self.post_json(token, "/admin/projects", project).await
    }

    async fn update_project(
        &self,
        token: &str,
        project_id: &str,
        project: &Project,
    ) -> Result<Project, ApiError> {
        self.put_json(token, &format!("/admin/projects/{project_id}"), project)
            .await
    }

    async fn delete_project(&self, token: &str, project_id: &str) -> Result<(), ApiError> {
        self.delete(token, &format!("/admin/projects/{project_id}"))
            .await
    }

    async fn get_users(&self, token: &str) -> Result<Vec<UserResponse>, ApiError> {
        self.get_json(token, "/admin/users").await
    }

    async fn create_user(
        &self,
        token: &str,
        request: &CreateUserRequest,
    ) -> Result<UserResponse, ApiError> {
        self.post_json(token, "/admin/users", request).await
    }

    async fn update_user(
        &self,
        token: &str,
        user_id: &str,
        request: &UpdateUserRequest,
    ) -> Result<UserResponse, ApiError> {
        self.put_json(token, &format!("/admin/users/{user_id}"), request)
            .await
    }

    async fn delete_user(&self, token: &str, user_id: &str) -> Result<(), ApiError> {
        self.delete(token, &format!("/admin/users/{user_id}")).await
    }

    async fn get_attendance(
        &self,
        token: &str,
        query: &AttendanceQuery,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let response = self
            .send(
                self.http
                    .get(self.url("/admin/attendance"))
                    .bearer_auth(token)
                    .query(&query.params()),
            )
            .await?;
        Self::read_json(response).await
    }

    async fn create_attendance(
        &self,
        token: &str,
        request: &CreateAttendanceRequest,
    ) -> Result<AttendanceRecord, ApiError> {
        self.post_json(token, "/admin/attendance", request).await
    }

    async fn update_attendance(
        &self,
        token: &str,
        record_id: &str,
        request: &UpdateAttendanceRequest,
    ) -> Result<AttendanceRecord, ApiError> {
        self.put_json(token, &format!("/admin/attendance/{record_id}"), request)
            .await
    }

    async fn delete_attendance(&self, token: &str, record_id: &str) -> Result<(), ApiError> {
        self.delete(token, &format!("/admin/attendance/{record_id}"))
            .await
    }

    async fn get_dashboard_summary(&self, token: &str) -> Result<DashboardSummary, ApiError> {
        self.get_json(token, "/admin/reports/summary").await
    }
}
