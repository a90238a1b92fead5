pub mod app;
pub mod clock;
pub mod config;
pub mod display;
pub mod errors;
pub mod models;
pub mod poller;
pub mod state;
pub mod ticker;

pub use app::start;
pub use config::Config;
pub use state::AppState;
