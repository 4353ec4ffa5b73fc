pub mod content;
pub mod glint;

pub use content::*;
pub use glint::*;
