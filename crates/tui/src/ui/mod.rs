//! UI components for the shell terminal

pub mod boot_screen;
pub mod console_pane;
pub mod hud_pane;
pub mod layout;
pub mod module_pane;
