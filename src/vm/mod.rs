//! Per-screen state holders. Every management view-model follows the same
//! state machine: start empty with `is_loading = true`, `refresh` swaps in
//! the server's list or records an error while keeping the stale list, and
//! every mutation re-fetches the whole list afterwards regardless of outcome
//! so the screen always ends up consistent with the server. No optimistic
//! local patching, no request de-duplication; the exclusive `&mut self`
//! borrow serializes state writes, and a view-model dropped at screen
//! teardown simply cancels its in-flight work.

pub mod attendance;
pub mod dashboard;
pub mod employees;
pub mod projects;
pub mod users;

pub use attendance::AttendanceViewModel;
pub use dashboard::DashboardViewModel;
pub use employees::EmployeeViewModel;
pub use projects::ProjectViewModel;
pub use users::UserViewModel;
