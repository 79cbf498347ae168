//! Dashboard widgets.
//!
//! - [`gauge`]: speedometer and tachometer dials
//! - [`level_bar`]: fuel and temperature bars
//! - [`indicator`]: status icons with blinking warning dots
//! - [`clock`]: wall-clock panel
//! - [`primitives`]: shared drawing helpers
//!
//! # Architecture
//!
//! Every widget separates state from pixels. `update` stores the latest value,
//! `render` turns a value into a small `PartialEq` description (needle tip,
//! fill rectangle, tier color, dot visibility), and `draw` paints that
//! description onto any `DrawTarget<Color = Rgb565>`. Each `draw` repaints the
//! widget's own area completely, so the main loop never clears the screen
//! between dashboard frames.

mod clock;
mod gauge;
mod indicator;
mod level_bar;
mod primitives;

pub use clock::{ClockDisplay, local_now};
pub use gauge::{GaugeDisplay, SPEEDOMETER, TACHOMETER};
pub use indicator::{IndicatorId, StatusIndicator};
pub use level_bar::{FUEL_BAR, LevelBar, TEMP_BAR};
pub use primitives::draw_hline;
