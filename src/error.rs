use thiserror::Error;

/// The two failure categories of a run. Fetch failures are fatal and turn
/// into a nonzero exit; send failures are logged and the run completes
/// normally (best-effort notification).
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Could not get data: {0}")]
    DataFetch(anyhow::Error),
    #[error("Could not send message: {0}")]
    Send(anyhow::Error),
}
