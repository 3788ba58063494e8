pub mod app;
pub mod components;
pub mod events;
pub mod input;
pub mod keybindings;
pub mod selection;
pub mod theme;
pub mod ui;

pub use app::{App, Focus};
pub use keybindings::Action;
