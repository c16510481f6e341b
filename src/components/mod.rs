//! UI Components
//!
//! Leptos components for the plant picker, care card, reminders and tip.

mod delete_confirm_button;
mod eco_tip;
mod plant_details;
mod plant_picker;
mod reminder_list;

pub use delete_confirm_button::DeleteConfirmButton;
pub use eco_tip::EcoTip;
pub use plant_details::PlantDetails;
pub use plant_picker::PlantPicker;
pub use reminder_list::ReminderList;
