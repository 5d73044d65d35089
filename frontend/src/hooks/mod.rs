pub mod use_dashboard;
pub mod use_profile;
pub mod use_session;

pub use use_dashboard::use_dashboard;
pub use use_profile::{use_profile, ProfileEvents};
pub use use_session::use_session;
