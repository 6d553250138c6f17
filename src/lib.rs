pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod params;
pub mod sync;
pub mod ui;
