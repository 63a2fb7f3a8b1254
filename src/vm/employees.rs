use crate::api::HrApi;
use crate::models::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};
use crate::repository::HrRepository;

pub struct EmployeeViewModel<A: HrApi> {
    repo: HrRepository<A>,
    pub employees: Vec<Employee>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl<A: HrApi> EmployeeViewModel<A> {
    pub fn new(repo: HrRepository<A>) -> Self {
        Self {
            repo,
            employees: Vec::new(),
            is_loading: true,
            error_message: None,
        }
    }

    pub async fn refresh(&mut self, token: &str) {
        self.is_loading = true;
        self.error_message = None;
        match self.repo.get_employees(token).await {
            Some(employees) => self.employees = employees,
            // The stale list stays on screen; only the banner changes.
            None => self.error_message = Some("Failed to load employees".to_string()),
        }
        self.is_loading = false;
    }

    pub async fn create(
        &mut self,
        token: &str,
        request: &CreateEmployeeRequest,
        on_success: impl FnOnce(),
    ) {
        if self.repo.create_employee(token, request).await.is_some() {
            on_success();
        }
        self.refresh(token).await;
    }

    pub async fn update(
        &mut self,
        token: &str,
        employee_id: &str,
        request: &UpdateEmployeeRequest,
        on_success: impl FnOnce(),
    ) {
        if self
            .repo
            .update_employee(token, employee_id, request)
            .await
            .is_some()
        {
            on_success();
        }
        self.refresh(token).await;
    }

    pub async fn delete(&mut self, token: &str, employee_id: &str, on_success: impl FnOnce()) {
        if self.repo.delete_employee(token, employee_id).await {
            on_success();
        }
        self.refresh(token).await;
    }
}
