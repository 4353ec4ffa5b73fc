//! User Interface Components
//!
//! This module contains the Dioxus components that make up the portfolio page:
//!
//! - **display**: notification banner, project cards and loading indicators
//! - **forms**: the contact message form
//! - **input**: validated input fields and inline error feedback
//! - **layout**: navigation bar and mobile menu
//! - **sections**: the about, projects and contact sections of the page

pub mod display;
pub mod forms;
pub mod input;
pub mod layout;
pub mod sections;
