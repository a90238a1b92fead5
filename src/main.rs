use station_display::display::Panel;
use station_display::{AppState, Config, clock};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; the display owns stdout.
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    let state = AppState::new(Panel::new(), clock::now_ms());
    info!(
        "polling {} every {:?}",
        config.endpoint, config.poll_interval
    );

    let (_poller, _clock) = station_display::start(state, config);

    tokio::signal::ctrl_c().await?;
    println!();
    info!("shutting down");
    Ok(())
}
