pub mod app;
pub mod config;
pub mod pages;
pub mod style;
