//! Color constants for the instrument cluster.
//!
//! Standard colors come from the `RgbColor` trait constants. Custom colors are
//! `Rgb565::new(r5, g6, b5)` values converted from the 24-bit palette of the
//! cluster design (noted next to each constant).
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Canvas background and neutral gauge panel.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Gauge chrome, bar borders, clock text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (#ff0000). Needles, warning dots, low-level bar tier.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (#00ff00). Fuel bar normal tier.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow (#ffff00). Fuel bar medium tier.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Cyan (#00ffff). Temperature bar normal tier.
pub const CYAN: Rgb565 = Rgb565::CYAN;

// =============================================================================
// Custom Colors
// =============================================================================

/// Orange (#ffa500). Temperature bar medium tier.
/// RGB565: (31, 41, 0).
pub const ORANGE: Rgb565 = Rgb565::new(31, 41, 0);

/// Dark red (#500000) gauge panel when the value is in the danger zone.
/// RGB565: (10, 0, 0).
pub const DANGER_RED: Rgb565 = Rgb565::new(10, 0, 0);

/// Dark gray for debug page dividers and section headers.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);
