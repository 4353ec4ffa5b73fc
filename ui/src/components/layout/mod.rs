pub mod mobile_menu;
pub mod nav_bar;

pub use mobile_menu::*;
pub use nav_bar::*;
