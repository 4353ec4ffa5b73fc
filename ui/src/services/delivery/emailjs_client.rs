use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{info, instrument, warn};

use super::errors::{DeliveryError, DeliveryResult};
use super::traits::EmailDelivery;
use crate::features::contact::ContactSubmission;
use crate::services::config::{get_global_config, EmailJsConfig};

/// Body of `POST /api/v1.0/email/send`
#[derive(Serialize, Debug)]
pub struct EmailJsRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    /// EmailJS calls the public key `user_id`
    pub user_id: &'a str,
    pub template_params: &'a ContactSubmission,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<&'a str>,
}

/// Client for the EmailJS REST API
#[derive(Clone)]
pub struct EmailJsClient {
    pub(crate) http_client: Client,
    pub(crate) config: EmailJsConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }

    /// Client built from the credentials embedded at build time
    pub fn from_global_config() -> Self {
        Self::new(get_global_config().email)
    }

    /// Builds the request body, refusing to go further without credentials
    pub fn build_request<'a>(
        &'a self,
        submission: &'a ContactSubmission,
    ) -> DeliveryResult<EmailJsRequest<'a>> {
        let missing = self.config.missing_credentials();
        if !missing.is_empty() {
            return Err(DeliveryError::NotConfigured { missing });
        }

        Ok(EmailJsRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: submission,
            access_token: self.config.access_token.as_deref(),
        })
    }
}

#[async_trait(?Send)]
impl EmailDelivery for EmailJsClient {
    #[instrument(skip(self, submission), fields(service_id = %self.config.service_id), err)]
    async fn send(&self, submission: &ContactSubmission) -> Result<(), DeliveryError> {
        let body = self.build_request(submission)?;

        let response = self
            .http_client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!("Contact message accepted by EmailJS");
            return Ok(());
        }

        let message = rejection_message(status.as_u16(), response.text().await);
        warn!(status = status.as_u16(), %message, "EmailJS rejected contact message");
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// EmailJS explains rejections in a plain text body; fall back to the status
fn rejection_message<E: std::fmt::Display>(status: u16, body: Result<String, E>) -> String {
    match body {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => format!("HTTP {} with an empty body", status),
        Err(e) => {
            warn!(status, error = %e, "Could not read EmailJS rejection body");
            format!("HTTP {} (body unreadable: {})", status, e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn configured() -> EmailJsConfig {
        EmailJsConfig {
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: "public_test".to_string(),
            ..EmailJsConfig::default()
        }
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_request_body_matches_emailjs_shape() {
        let client = EmailJsClient::new(configured());
        let submission = submission();

        let body = client.build_request(&submission).unwrap();
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(
            value,
            json!({
                "service_id": "service_test",
                "template_id": "template_test",
                "user_id": "public_test",
                "template_params": {
                    "name": "Ada",
                    "email": "ada@example.com",
                    "message": "Hello there"
                }
            })
        );
    }

    #[test]
    fn test_access_token_is_sent_when_configured() {
        let mut config = configured();
        config.access_token = Some("private_test".to_string());
        let client = EmailJsClient::new(config);
        let submission = submission();

        let value = serde_json::to_value(client.build_request(&submission).unwrap()).unwrap();
        assert_eq!(value["accessToken"], "private_test");
    }

    #[test]
    fn test_rejection_message_keeps_body() {
        let body: Result<String, String> = Ok("The template ID is invalid".to_string());
        assert_eq!(rejection_message(400, body), "The template ID is invalid");
    }

    #[test]
    fn test_rejection_message_falls_back_to_status() {
        let empty: Result<String, String> = Ok("  ".to_string());
        assert_eq!(rejection_message(502, empty), "HTTP 502 with an empty body");

        let unreadable: Result<String, String> = Err("stream closed".to_string());
        assert_eq!(
            rejection_message(500, unreadable),
            "HTTP 500 (body unreadable: stream closed)"
        );
    }

    #[tokio::test]
    async fn test_send_without_credentials_fails_before_any_request() {
        let client = EmailJsClient::new(EmailJsConfig {
            endpoint: "http://127.0.0.1:9/unreachable".to_string(),
            ..EmailJsConfig::default()
        });

        let result = client.send(&submission()).await;
        assert_eq!(
            result,
            Err(DeliveryError::NotConfigured {
                missing: vec!["service_id", "template_id", "public_key"],
            })
        );
    }
}
