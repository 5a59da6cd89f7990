//! Detection of a map widget that never finishes loading.
//!
//! A single one-shot timer armed at startup. The watchdog is polled from the
//! main loop together with the widget's readiness flag; whichever happens
//! first - the widget becoming ready or the timeout elapsing - decides the
//! final state, and the watchdog never changes its mind afterwards. This is
//! a coarse binary signal, not a structured error.

use std::time::Duration;

use web_time::SystemTime;

/// Default time the map widget is given to load.
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(5);

/// Load state of the map widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapLoadState {
    /// The widget has not reported ready yet and the watchdog has not
    /// expired.
    Loading,
    /// The widget became ready before the watchdog expired.
    Ready,
    /// The watchdog expired before the widget became ready.
    Failed,
}

/// One-shot watchdog for the map widget load.
pub struct LoadWatchdog {
    started: SystemTime,
    timeout: Duration,
    state: MapLoadState,
}

impl LoadWatchdog {
    /// Arms the watchdog with the given timeout, starting now.
    pub fn new(timeout: Duration) -> Self {
        Self {
            started: SystemTime::now(),
            timeout,
            state: MapLoadState::Loading,
        }
    }

    /// Current state without advancing the watchdog.
    pub fn state(&self) -> MapLoadState {
        self.state
    }

    /// Advances the watchdog with the widget's current readiness flag.
    ///
    /// Once the state leaves [`MapLoadState::Loading`] it is final.
    pub fn poll(&mut self, widget_ready: bool) -> MapLoadState {
        if self.state != MapLoadState::Loading {
            return self.state;
        }

        if widget_ready {
            self.state = MapLoadState::Ready;
        } else {
            let elapsed = SystemTime::now()
                .duration_since(self.started)
                .unwrap_or_default();
            if elapsed >= self.timeout {
                log::error!("map widget failed to load within {:?}", self.timeout);
                self.state = MapLoadState::Failed;
            }
        }

        self.state
    }
}

impl Default for LoadWatchdog {
    fn default() -> Self {
        Self::new(DEFAULT_LOAD_TIMEOUT)
    }
}
