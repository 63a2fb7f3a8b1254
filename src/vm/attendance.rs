use crate::api::HrApi;
use crate::models::{
    AttendanceQuery, AttendanceRecord, CreateAttendanceRequest, Project, UpdateAttendanceRequest,
};
use crate::repository::HrRepository;

/// Attendance screen state. Also carries the project list so the screen can
/// resolve project names and offer a project filter; both are re-fetched on
/// every refresh. Filtering is done server-side via query parameters.
pub struct AttendanceViewModel<A: HrApi> {
    repo: HrRepository<A>,
    pub records: Vec<AttendanceRecord>,
    pub projects: Vec<Project>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl<A: HrApi> AttendanceViewModel<A> {
    pub fn new(repo: HrRepository<A>) -> Self {
        Self {
            repo,
            records: Vec::new(),
            projects: Vec::new(),
            is_loading: true,
            error_message: None,
        }
    }

    /// Unfiltered refresh, used on mount and after every mutation.
    pub async fn refresh(&mut self, token: &str) {
        self.filter(token, &AttendanceQuery::default()).await;
    }

    pub async fn filter(&mut self, token: &str, query: &AttendanceQuery) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.get_projects(token).await {
            Some(projects) => self.projects = projects,
            None => self.error_message = Some("Failed to load projects".to_string()),
        }
        match self.repo.get_attendance(token, query).await {
            Some(records) => self.records = records,
            None => self.error_message = Some("Failed to load attendance".to_string()),
        }

        self.is_loading = false;
    }

    pub async fn create(
        &mut self,
        token: &str,
        request: &CreateAttendanceRequest,
        on_success: impl FnOnce(),
    ) {
        if self.repo.create_attendance(token, request).await.is_some() {
            on_success();
        }
        self.refresh(token).await;
    }

    pub async fn update(
        &mut self,
        token: &str,
        record_id: &str,
        request: &UpdateAttendanceRequest,
        on_success: impl FnOnce(),
    ) {
        if self
            .repo
            .update_attendance(token, record_id, request)
            .await
            .is_some()
        {
            on_success();
        }
        self.refresh(token).await;
    }

    pub async fn delete(&mut self, token: &str, record_id: &str, on_success: impl FnOnce()) {
        if self.repo.delete_attendance(token, record_id).await {
            on_success();
        }
        self.refresh(token).await;
    }
}
