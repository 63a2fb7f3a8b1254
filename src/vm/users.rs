use crate::api::HrApi;
use crate::models::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::repository::HrRepository;

pub struct UserViewModel<A: HrApi> {
    repo: HrRepository<A>,
    pub users: Vec<UserResponse>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl<A: HrApi> UserViewModel<A> {
    pub fn new(repo: HrRepository<A>) -> Self {
        Self {
            repo,
            users: Vec::new(),
            is_loading: true,
            error_message: None,
        }
    }

    pub async fn refresh(&mut self, token: &str) {
        self.is_loading = true;
        self.error_message = None;
        match self.repo.get_users(token).await {
            Some(users) => self.users = users,
            None => self.error_message = Some("Failed to load users".to_string()),
        }
        self.is_loading = false;
    }

    pub async fn create(
        &mut self,
        token: &str,
        request: &CreateUserRequest,
        on_success: impl FnOnce(),
    ) {
        if self.repo.create_user(token, request).await.is_some() {
            on_success();
        }
        self.refresh(token).await;
    }

    pub async fn update(
        &mut self,
        token: &str,
        user_id: &str,
        request: &UpdateUserRequest,
        on_success: impl FnOnce(),
    ) {
        if self.repo.update_user(token, user_id, request).await.is_some() {
            on_success();
        }
        self.refresh(token).await;
    }

    pub async fn delete(&mut self, token: &str, user_id: &str, on_success: impl FnOnce()) {
        if self.repo.delete_user(token, user_id).await {
            on_success();
        }
        self.refresh(token).await;
    }
}
