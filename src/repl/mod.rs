//! Interactive menu module

pub mod interactive;

pub use interactive::run_menu;
