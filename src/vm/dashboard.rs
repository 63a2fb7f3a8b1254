use crate::api::HrApi;
use crate::models::DashboardSummary;
use crate::repository::HrRepository;

/// Read-only reporting screen. There is nothing to mutate; the summary is
/// computed server-side and only ever refreshed.
pub struct DashboardViewModel<A: HrApi> {
    repo: HrRepository<A>,
    pub summary: Option<DashboardSummary>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl<A: HrApi> DashboardViewModel<A> {
    pub fn new(repo: HrRepository<A>) -> Self {
        Self {
            repo,
            summary: None,
            is_loading: true,
            error_message: None,
        }
    }

    pub async fn refresh(&mut self, token: &str) {
        self.is_loading = true;
        self.error_message = None;
        match self.repo.get_dashboard_summary(token).await {
            Some(summary) => self.summary = Some(summary),
            None => self.error_message = Some("Failed to load summary".to_string()),
        }
        self.is_loading = false;
    }
}
