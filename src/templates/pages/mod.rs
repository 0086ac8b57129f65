pub mod dashboard;
pub mod error;
pub mod login;

pub use dashboard::{dashboard_page, DashboardVm};
pub use error::error_page;
pub use login::login_page;
