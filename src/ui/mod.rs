pub mod app;
pub mod detail_view;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod list_view;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
