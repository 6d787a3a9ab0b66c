pub mod main_window;
pub mod svg_icons;

pub mod backend;

pub mod results_interface;
pub mod search_interface;
pub mod upload_interface;

pub mod search_state;
