use anyhow::{Error, Result};
use reqwest::Client;

use crate::{api::utils::REQUEST_TIMEOUT, models::EmailMessage};

const BASE_URL: &str = "https://api.sendgrid.com/v3";
const SUBJECT: &str = "Today's biggest stock market movers";

#[derive(Clone, Debug)]
pub struct SendGridApi {
    client: Client,
    api_key: String,
    email: String,
    base_url: String,
}

impl SendGridApi {
    pub fn new(api_key: String, email: String) -> Self {
        Self::with_base_url(api_key, email, BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, email: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            email,
            base_url,
        }
    }

    /// Builds the outgoing message for a rendered report. The configured
    /// address is both sender and recipient.
    pub fn message_for(&self, html: &str) -> EmailMessage {
        EmailMessage::new(
            self.email.clone(),
            self.email.clone(),
            SUBJECT.to_string(),
            html.to_string(),
        )
    }

    pub async fn send(&self, message: &EmailMessage) -> Result<()> {
        let payload = serde_json::json!({
            "personalizations": [{ "to": [{ "email": message.to() }] }],
            "from": { "email": message.from() },
            "subject": message.subject(),
            "content": [{ "type": "text/html", "value": message.html() }]
        });

        let res = self
            .client
            .post(format!("{}/mail/send", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(Error::msg(format!("Send failed: {}", res.status())));
        }

        Ok(())
    }
}
