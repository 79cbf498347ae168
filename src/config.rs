//! Application configuration constants.
//!
//! Every widget sits at a fixed absolute position on a fixed-size canvas, so
//! the whole layout lives here as `const` values. Nothing is read at runtime.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Canvas width in pixels.
pub const SCREEN_WIDTH: u32 = 1200;

/// Canvas height in pixels.
pub const SCREEN_HEIGHT: u32 = 800;

/// Window title.
pub const WINDOW_TITLE: &str = "Advanced Car Dashboard";

/// Simulator pixel scale (1 = native size).
pub const WINDOW_SCALE: u32 = 1;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Dashboard tick interval: state advance, widget update, warning broadcast.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Clock refresh interval, independent of the dashboard tick.
pub const CLOCK_INTERVAL: Duration = Duration::from_secs(1);

/// Upper bound on how long the event loop sleeps between polls. Keeps key
/// handling responsive while both timers are far from due.
pub const MAX_POLL_INTERVAL: Duration = Duration::from_millis(10);

// =============================================================================
// Gauge Layout
// =============================================================================

/// Speedometer center.
pub const SPEEDO_CENTER: (i32, i32) = (400, 400);

/// Tachometer center.
pub const TACHO_CENTER: (i32, i32) = (800, 400);

/// Radius shared by both gauges.
pub const GAUGE_RADIUS: i32 = 150;

/// Arc start angle in degrees (counter-clockwise from +x). Lower left.
pub const GAUGE_START_ANGLE: f32 = 225.0;

/// Arc end angle in degrees. Lower right.
pub const GAUGE_END_ANGLE: f32 = -45.0;

/// Number of equal subdivisions of the scale that get a numeric marker.
pub const GAUGE_MARKER_DIVISIONS: usize = 8;

/// Marker labels sit this far inside the arc.
pub const GAUGE_MARKER_INSET: i32 = 20;

/// The needle stops this far short of the arc.
pub const GAUGE_NEEDLE_INSET: i32 = 40;

/// The danger panel extends this far past the arc.
pub const GAUGE_PANEL_OUTSET: i32 = 10;

// =============================================================================
// Level Bar Layout
// =============================================================================

/// Fuel bar top-left corner.
pub const FUEL_BAR_POS: (i32, i32) = (100, 300);

/// Temperature bar top-left corner.
pub const TEMP_BAR_POS: (i32, i32) = (1050, 300);

/// Bar outer width.
pub const BAR_WIDTH: u32 = 50;

/// Bar outer height.
pub const BAR_HEIGHT: u32 = 300;

/// Gap between the bar border and its fill.
pub const BAR_INSET: i32 = 5;

// =============================================================================
// Indicator Layout
// =============================================================================

/// Row of status indicators: y coordinate of the icon tops.
pub const INDICATOR_ROW_Y: i32 = 50;

/// X coordinate of the first indicator icon.
pub const INDICATOR_FIRST_X: i32 = 100;

/// Horizontal distance between indicator icons.
pub const INDICATOR_SPACING: i32 = 50;

/// Edge length of the square indicator icons after resizing.
pub const ICON_SIZE: u32 = 30;

/// Warning dot offset from the icon's top-left corner.
pub const WARNING_DOT_OFFSET: (i32, i32) = (35, 5);

/// Warning dot diameter.
pub const WARNING_DOT_DIAMETER: u32 = 10;

/// Icon files in indicator construction order: seatbelt, engine, battery,
/// lights, airbag.
pub const ICON_PATHS: [&str; 5] = [
    "assets/Seat-Belt-Indicator.png",
    "assets/Check-Engine-Light.png",
    "assets/Battery-Charge-Warning-Light.png",
    "assets/Headlight-Range-Control.png",
    "assets/Airbag-Indicator.png",
];

// =============================================================================
// Clock Layout
// =============================================================================

/// Clock panel top-left corner.
pub const CLOCK_POS: (i32, i32) = (1000, 20);

/// Horizontal padding between the clock border and its text.
pub const CLOCK_PAD_X: u32 = 15;

/// Vertical padding between the clock border and its text.
pub const CLOCK_PAD_Y: u32 = 8;

/// Clock border thickness.
pub const CLOCK_BORDER: u32 = 2;
