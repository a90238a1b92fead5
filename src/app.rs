use crate::config::Config;
use crate::state::AppState;
use crate::{poller, ticker};
use tokio::task::JoinHandle;

// The two loops stay independently scheduled: a stuck fetch must not stall
// the clock tick.
pub fn start(state: AppState, config: Config) -> (JoinHandle<()>, JoinHandle<()>) {
    let poll = tokio::spawn(poller::run(state.clone(), config.clone()));
    let clock = tokio::spawn(ticker::run(state, config));
    (poll, clock)
}
