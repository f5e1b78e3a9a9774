pub mod auth;
pub mod dashboard;

pub use auth::{Landing, Login};
pub use dashboard::{AiAssistant, DashboardHome, TasksPage};
