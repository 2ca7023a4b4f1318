pub mod app;
pub mod config;
pub mod errors;
pub mod hooks;
pub mod pages;
pub mod routes;
pub mod services;
pub mod shared;
