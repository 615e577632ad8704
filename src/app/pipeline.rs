use anyhow::Result;
use tracing::error;

use crate::{
    api::{iex::IexApi, sendgrid::SendGridApi},
    app::report,
    config::Config,
    error::PipelineError,
};

/// How a run ended. A failed send still counts as a completed run; only a
/// failed fetch is fatal (surfaced as `Err`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RunOutcome {
    Sent,
    SendFailed,
}

pub struct Pipeline {
    movers: IexApi,
    mailer: SendGridApi,
}

impl Pipeline {
    pub fn new(config: &Config) -> Self {
        Self::with_apis(
            IexApi::new(config.iex_api_key().clone()),
            SendGridApi::new(config.sendgrid_api_key().clone(), config.email().clone()),
        )
    }

    pub fn with_apis(movers: IexApi, mailer: SendGridApi) -> Self {
        Self { movers, mailer }
    }

    /// One run: fetch movers, render the report, send it. Nothing is sent
    /// when the fetch fails.
    pub async fn run(&self) -> Result<RunOutcome, PipelineError> {
        let movers = self
            .movers
            .top_movers()
            .await
            .map_err(PipelineError::DataFetch)?;

        let html = report::render(&movers);
        let message = self.mailer.message_for(&html);

        Ok(send_outcome(self.mailer.send(&message).await))
    }
}

/// A failed send is logged, never fatal; the run still completes.
pub(crate) fn send_outcome(sent: Result<()>) -> RunOutcome {
    match sent {
        Ok(()) => RunOutcome::Sent,
        Err(e) => {
            error!("{}", PipelineError::Send(e));
            RunOutcome::SendFailed
        }
    }
}
