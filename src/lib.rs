//! Data-access core for the HR Admin Console.
//!
//! Layering, outermost first: screens (not in this crate) drive the
//! view-models in [`vm`], which call the failure-tolerant
//! [`repository::HrRepository`], which wraps the [`api::ApiClient`], the
//! only place network I/O happens. [`session::SessionStore`] keeps the
//! logged-in session on disk across restarts.
//!
//! ```no_run
//! use hr_console::{ApiClient, Config, EmployeeViewModel, HrRepository, SessionStore};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(&Config::from_env())?;
//! let repo = HrRepository::new(client);
//!
//! let session = repo.login("admin@x.com", "secret").await.ok_or("invalid credentials")?;
//! let store = SessionStore::open("hr_console.db")?;
//! store.save(&session)?;
//!
//! let mut employees = EmployeeViewModel::new(repo.clone());
//! employees.refresh(&session.token).await;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod session;
pub mod vm;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::{ApiClient, HrApi};
pub use config::Config;
pub use error::ApiError;
pub use repository::HrRepository;
pub use session::{SessionStore, StoreError};
pub use vm::{
    AttendanceViewModel, DashboardViewModel, EmployeeViewModel, ProjectViewModel, UserViewModel,
};
