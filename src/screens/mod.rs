//! Full-screen pages other than the cluster itself.
//!
//! - **Debug Page** ([`debug`]): loop timing, event counters, vehicle snapshot
//!   and the event log (toggle with `Y`)
//!
//! The cluster page is drawn by [`Dashboard::draw`](crate::dashboard::Dashboard::draw).

mod debug;

pub use debug::draw_debug_page;
