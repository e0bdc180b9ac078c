pub mod config;
pub mod db;
pub mod handlers;
pub mod models;
pub mod services;
pub mod validation;
pub mod web;

pub use config::Config;
