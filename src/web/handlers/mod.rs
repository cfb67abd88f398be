//! HTML page handlers.

mod history;
mod home;
mod shorten;

pub use history::history_handler;
pub use home::home_handler;
pub use shorten::shorten_handler;
