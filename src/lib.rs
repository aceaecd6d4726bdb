pub mod app;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod model;
pub mod queue;
pub mod ui;
