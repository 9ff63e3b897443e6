pub mod handler;
pub mod keymap;
