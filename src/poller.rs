use crate::clock;
use crate::config::Config;
use crate::display;
use crate::models::SensorReport;
use crate::state::AppState;
use reqwest::Client;
use std::time::Duration;
use tracing::error;

pub async fn run(state: AppState, config: Config) {
    let client = Client::new();
    let mut ticks = tokio::time::interval(config.poll_interval);
    loop {
        ticks.tick().await;

        // Each fetch runs on its own task so a slow response never delays
        // the next scheduled poll.
        let state = state.clone();
        let client = client.clone();
        let endpoint = config.endpoint.clone();
        let timeout = config.fetch_timeout;
        tokio::spawn(async move {
            if let Err(err) = poll_once(&state, &client, &endpoint, timeout).await {
                error!("poll failed: {err}");
            }
        });
    }
}

pub async fn poll_once(
    state: &AppState,
    client: &Client,
    endpoint: &str,
    timeout: Duration,
) -> Result<(), reqwest::Error> {
    let seq = state.begin_poll().await;
    let report: SensorReport = client
        .get(endpoint)
        .timeout(timeout)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    if state.apply_report(seq, &report, clock::now_ms()).await {
        let (panel, _) = state.snapshot().await;
        display::repaint(&panel);
    }
    Ok(())
}
