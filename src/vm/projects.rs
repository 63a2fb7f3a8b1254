use crate::api::HrApi;
use crate::models::Project;
use crate::repository::HrRepository;

pub struct ProjectViewModel<A: HrApi> {
    repo: HrRepository<A>,
    pub projects: Vec<Project>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl<A: HrApi> ProjectViewModel<A> {
    pub fn new(repo: HrRepository<A>) -> Self {
        Self {
            repo,
            projects: Vec::new(),
            is_loading: true,
            error_message: None,
        }
    }

    pub async fn refresh(&mut self, token: &str) {
        self.is_loading = true;
        self.error_message = None;
        match self.repo.get_projects(token).await {
            Some(projects) => self.projects = projects,
            None => self.error_message = Some("Failed to load projects".to_string()),
        }
        self.is_loading = false;
    }

    pub async fn create(&mut self, token: &str, project: &Project, on_success: impl FnOnce()) {
        if self.repo.create_project(token, project).await.is_some() {
            on_success();
        }
        self.refresh(token).await;
    }

    pub async fn update(
        &mut self,
        token: &str,
        project_id: &str,
        project: &Project,
        on_success: impl FnOnce(),
    ) {
        if self
            .repo
            .update_project(token, project_id, project)
            .await
            .is_some()
        {
            on_success();
        }
        self.refresh(token).await;
    }

    pub async fn delete(&mut self, token: &str, project_id: &str, on_success: impl FnOnce()) {
        if self.repo.delete_project(token, project_id).await {
            on_success();
        }
        self.refresh(token).await;
    }
}
