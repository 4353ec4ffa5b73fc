pub mod about;
pub mod contact;
pub mod projects;

pub use about::*;
pub use contact::*;
pub use projects::*;
