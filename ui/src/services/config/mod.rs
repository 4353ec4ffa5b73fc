mod site_config;

use crate::console_warn;

pub use site_config::*;

use std::sync::OnceLock;

static GLOBAL_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the global configuration, read once from the build environment.
///
/// An invalid configuration is still returned so the page renders; the
/// delivery client then reports what is missing on submit.
pub fn get_global_config() -> SiteConfig {
    GLOBAL_CONFIG
        .get_or_init(|| {
            let config = SiteConfig::from_build_env();
            if let Err(errors) = config.validate() {
                for error in errors {
                    console_warn!("Invalid configuration: {}", error);
                }
            }
            config
        })
        .clone()
}
