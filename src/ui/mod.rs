mod detail;
mod dropdown;
mod listing;
mod styles;
mod text;
mod ui_config;

pub use dropdown::{DropdownEvent, DropdownState, SearchDropdown, filter_items};

pub(crate) use styles::{percent_change_text, setup_custom_visuals};
pub(crate) use text::UI_TEXT;
pub(crate) use ui_config::UI_CONFIG;
