use std::process;

use stock_movers_mailer::{app::Pipeline, config::Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    let pipeline = Pipeline::new(&config);

    match pipeline.run().await {
        Ok(_) => info!("Sent stock mover email to {}!", config.email()),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
