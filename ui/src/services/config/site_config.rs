//! Site configuration
//!
//! Everything here is fixed when the WASM bundle is built. EmailJS
//! credentials come from `PORTFOLIO_EMAILJS_*` environment variables read
//! with `option_env!`; the UI constants are plain defaults.

use serde::{Deserialize, Serialize};

pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Configuration for the whole page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Credentials for the delivery service
    pub email: EmailJsConfig,

    /// Transient notification behavior
    pub notification: NotificationConfig,

    /// Navigation bar geometry and scroll behavior
    pub navigation: NavigationConfig,

    /// Decorative animation timings
    pub animation: AnimationConfig,
}

/// EmailJS account settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailJsConfig {
    /// REST endpoint for sending a templated email
    pub endpoint: String,

    pub service_id: String,

    pub template_id: String,

    /// Public key (sent as `user_id`)
    pub public_key: String,

    /// Optional private key for accounts that require it
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a notification stays up before hiding itself
    pub auto_hide_ms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Scroll distance after which the bar compacts
    pub scroll_threshold_px: f64,

    /// Bar height at the top of the page on desktop
    pub expanded_height_px: u32,

    /// Bar height once scrolled, and always on mobile
    pub compact_height_px: u32,

    /// Viewports at or below this width get the mobile layout
    pub mobile_breakpoint_px: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Length of the profile picture glint
    pub glint_duration_ms: u32,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_EMAILJS_ENDPOINT.to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            access_token: None,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { auto_hide_ms: 6000 }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 100.0,
            expanded_height_px: 100,
            compact_height_px: 70,
            mobile_breakpoint_px: 600,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            glint_duration_ms: 1200,
        }
    }
}

impl EmailJsConfig {
    /// Reads the credentials baked in at compile time
    pub fn from_build_env() -> Self {
        let mut config = Self {
            service_id: option_env!("PORTFOLIO_EMAILJS_SERVICE_ID")
                .unwrap_or_default()
                .to_string(),
            template_id: option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID")
                .unwrap_or_default()
                .to_string(),
            public_key: option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY")
                .unwrap_or_default()
                .to_string(),
            access_token: option_env!("PORTFOLIO_EMAILJS_ACCESS_TOKEN")
                .filter(|token| !token.is_empty())
                .map(str::to_string),
            ..Self::default()
        };

        if let Some(endpoint) = option_env!("PORTFOLIO_EMAILJS_ENDPOINT").filter(|e| !e.is_empty()) {
            config.endpoint = endpoint.to_string();
        }

        config
    }

    /// Build-time variable that supplies a required credential
    pub fn env_var(credential: &str) -> &'static str {
        match credential {
            "service_id" => "PORTFOLIO_EMAILJS_SERVICE_ID",
            "template_id" => "PORTFOLIO_EMAILJS_TEMPLATE_ID",
            _ => "PORTFOLIO_EMAILJS_PUBLIC_KEY",
        }
    }

    /// Names of required credentials that are blank
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        [
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

impl SiteConfig {
    /// Configuration for the bundle being built
    pub fn from_build_env() -> Self {
        Self {
            email: EmailJsConfig::from_build_env(),
            ..Self::default()
        }
    }

    /// Validate the configuration, collecting every problem
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for name in self.email.missing_credentials() {
            errors.push(format!(
                "Email {} is missing; set {} when building",
                name,
                EmailJsConfig::env_var(name)
            ));
        }

        if !self.email.endpoint.starts_with("http://") && !self.email.endpoint.starts_with("https://") {
            errors.push(format!(
                "Email endpoint must be an http(s) URL, got {:?}",
                self.email.endpoint
            ));
        }

        if self.notification.auto_hide_ms == 0 {
            errors.push("Notification auto_hide_ms must be greater than 0".to_string());
        }

        if self.navigation.compact_height_px > self.navigation.expanded_height_px {
            errors.push("Navigation compact_height_px must not exceed expanded_height_px".to_string());
        }

        if self.navigation.scroll_threshold_px < 0.0 {
            errors.push("Navigation scroll_threshold_px must not be negative".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.email.service_id = "service_test".to_string();
        config.email.template_id = "template_test".to_string();
        config.email.public_key = "public_test".to_string();
        config
    }

    #[test]
    fn test_config_validation() {
        assert!(configured().validate().is_ok());
    }

    #[test]
    fn test_missing_credentials_are_each_reported() {
        let errors = SiteConfig::default().validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("service_id"));
        assert!(errors[1].contains("template_id"));
        assert!(errors[2].contains("public_key"));
        assert!(errors[0].contains("PORTFOLIO_EMAILJS_SERVICE_ID"));
        assert!(errors[1].contains("PORTFOLIO_EMAILJS_TEMPLATE_ID"));
        assert!(errors[2].contains("PORTFOLIO_EMAILJS_PUBLIC_KEY"));
    }

    #[test]
    fn test_invalid_config() {
        let mut config = configured();
        config.email.endpoint = "ftp://example.com".to_string();
        config.notification.auto_hide_ms = 0;
        config.navigation.compact_height_px = 120;

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_whitespace_credential_counts_as_missing() {
        let mut config = configured().email;
        config.template_id = "   ".to_string();
        assert_eq!(config.missing_credentials(), vec!["template_id"]);
    }

    #[test]
    fn test_ui_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.notification.auto_hide_ms, 6000);
        assert_eq!(config.navigation.expanded_height_px, 100);
        assert_eq!(config.navigation.compact_height_px, 70);
        assert_eq!(config.navigation.mobile_breakpoint_px, 600);
        assert_eq!(config.animation.glint_duration_ms, 1200);
        assert_eq!(config.email.endpoint, DEFAULT_EMAILJS_ENDPOINT);
    }
}
