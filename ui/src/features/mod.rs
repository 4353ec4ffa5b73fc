//! Page features
//!
//! - **contact**: contact form state, validation and submission flow
//! - **navigation**: section anchors and navigation bar state
//! - **profile**: about-me content, social links and the glint animation
//! - **projects**: the static project catalog

pub mod contact;
pub mod navigation;
pub mod profile;
pub mod projects;
