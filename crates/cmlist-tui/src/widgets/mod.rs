//! Custom widget components

mod action_menu;
mod contact_list;
mod dialog_frame;
mod error_dialog;
mod header;
pub mod modal_overlay;
mod status_bar;

pub use action_menu::ActionMenu;
pub use contact_list::{truncate, ContactList};
pub use dialog_frame::DialogFrame;
pub use error_dialog::ErrorDialog;
pub use header::Header;
pub use status_bar::{Focus, StatusBar};
