pub mod loading_indicator;
pub mod notification_banner;
pub mod project_card;

pub use loading_indicator::*;
pub use notification_banner::*;
pub use project_card::*;
