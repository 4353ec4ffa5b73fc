//! Infrastructure Services
//!
//! This module provides the infrastructure behind the portfolio page:
//!
//! - **delivery**: the email delivery collaborator and its EmailJS client
//! - **config**: build-time configuration and global settings
//! - **errors**: error types shared by the contact form
//!
//! The services are designed to be WASM-first, using browser fetch through
//! reqwest and async traits without Send/Sync bounds.

pub mod config;
pub mod delivery;
pub mod errors;
