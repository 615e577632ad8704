use std::env;

use anyhow::{Context, Result};
use derive_getters::Getters;

/// Process configuration, read once at startup. Components get their
/// credentials through constructors so they can be built with test values.
#[derive(Clone, Debug, Getters)]
pub struct Config {
    email: String,
    iex_api_key: String,
    sendgrid_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        Ok(Self {
            email: env::var("EMAIL").context("Missing EMAIL in environment")?,
            iex_api_key: env::var("IEX_API_KEY").context("Missing IEX_API_KEY in environment")?,
            sendgrid_api_key: env::var("SENDGRID_API_KEY")
                .context("Missing SENDGRID_API_KEY in environment")?,
        })
    }
}
