pub mod dashboard;
pub mod profile;

pub use dashboard::DashboardPage;
pub use profile::ProfilePage;
