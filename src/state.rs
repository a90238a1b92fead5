use crate::clock;
use crate::display::Panel;
use crate::models::{SensorReport, display_scalar};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockAnchor {
    pub reading_ms: Option<i64>,
    pub polled_at_ms: i64,
}

#[derive(Debug)]
struct StationData {
    panel: Panel,
    anchor: ClockAnchor,
    next_seq: u64,
    applied_seq: u64,
}

#[derive(Clone)]
pub struct AppState {
    data: Arc<Mutex<StationData>>,
}

impl AppState {
    pub fn new(panel: Panel, now_ms: i64) -> Self {
        let anchor = ClockAnchor {
            reading_ms: clock::parse_time_text(&panel.time.text),
            polled_at_ms: now_ms,
        };
        Self {
            data: Arc::new(Mutex::new(StationData {
                panel,
                anchor,
                next_seq: 0,
                applied_seq: 0,
            })),
        }
    }

    pub async fn begin_poll(&self) -> u64 {
        let mut data = self.data.lock().await;
        data.next_seq += 1;
        data.next_seq
    }

    pub async fn apply_report(&self, seq: u64, report: &SensorReport, now_ms: i64) -> bool {
        let mut data = self.data.lock().await;
        if seq <= data.applied_seq {
            debug!(
                "discarding stale poll response (seq {seq}, newest applied {})",
                data.applied_seq
            );
            return false;
        }
        data.applied_seq = seq;

        data.panel.temperature = display_scalar(&report.temperature);
        data.panel.humidity = display_scalar(&report.humidity);
        data.panel.time.set(display_scalar(&report.time));

        // Both halves of the anchor advance together so the extrapolator
        // never sees an old reading paired with a new capture instant.
        data.anchor = ClockAnchor {
            reading_ms: clock::parse_time_value(&report.time),
            polled_at_ms: now_ms,
        };
        true
    }

    pub async fn extrapolate(&self, now_ms: i64) -> Option<String> {
        let mut data = self.data.lock().await;
        let reading_ms = data.anchor.reading_ms?;
        let formatted =
            clock::format_time_of_day(reading_ms + (now_ms - data.anchor.polled_at_ms));
        data.panel.time.set(formatted.clone());
        Some(formatted)
    }

    pub async fn snapshot(&self) -> (Panel, ClockAnchor) {
        let data = self.data.lock().await;
        (data.panel.clone(), data.anchor)
    }
}
