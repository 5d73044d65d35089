pub mod appointment_item;
pub mod avatar;
pub mod button;
pub mod day_picker;
pub mod header;
pub mod input;
pub mod loading;
pub mod toast;
pub mod tooltip;

pub use appointment_item::AppointmentItem;
pub use avatar::Avatar;
pub use button::Button;
pub use day_picker::DayPicker;
pub use header::Header;
pub use input::Input;
pub use loading::Loading;
pub use toast::ToastMessage;
pub use tooltip::Tooltip;
