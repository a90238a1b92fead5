use crate::clock;
use crate::config::Config;
use crate::display;
use crate::state::AppState;

pub async fn run(state: AppState, config: Config) {
    let mut ticks = tokio::time::interval(config.clock_interval);
    loop {
        ticks.tick().await;
        if state.extrapolate(clock::now_ms()).await.is_some() {
            let (panel, _) = state.snapshot().await;
            display::repaint(&panel);
        }
    }
}
