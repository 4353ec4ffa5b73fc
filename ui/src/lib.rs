//! This crate contains all UI components, features and services for the portfolio site.

pub mod app;
pub use app::Portfolio;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
