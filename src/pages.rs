//! Page navigation.
//!
//! Press `Y` to switch between the instrument cluster and the debug view.
//!
//! # Pages
//!
//! - [`Page::Dashboard`]: gauges, level bars, indicators and clock
//! - [`Page::Debug`]: loop timing, event counters, vehicle snapshot, event log

/// Available pages.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Instrument cluster.
    #[default]
    Dashboard,

    /// Metrics and event log.
    Debug,
}

impl Page {
    /// The other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Dashboard => Self::Debug,
            Self::Debug => Self::Dashboard,
        }
    }

    /// Event log line announcing a switch to this page.
    pub const fn log_line(self) -> &'static str {
        match self {
            Self::Dashboard => "Page: Dashboard",
            Self::Debug => "Page: Debug",
        }
    }
}
