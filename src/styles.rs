//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` are `const fn` constructible in
//! embedded-graphics 0.8, so every style the cluster uses is built at compile
//! time and referenced directly from the drawing code.
//!
//! Font choice follows the cluster design:
//! - readouts and clock: `ProFont` 24pt
//! - gauge titles: `ProFont` 18pt
//! - bar labels: `ProFont` 14pt
//! - gauge markers and units: `ProFont` 12pt
//! - debug page: 10x20 / 9x15 mono fonts

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_9X15, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::WHITE;

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Text centered on its anchor point in both axes. Canvas text in the cluster
/// is anchored at its center.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Left-aligned, top-anchored text. Used for the debug page columns.
pub const LEFT_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Right-aligned, top-anchored text. Used for the debug page header.
pub const RIGHT_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Gauge readout font. Also sizes the clock panel.
pub const READOUT_FONT: &MonoFont = &PROFONT_24_POINT;

/// Debug page body font.
pub const DEBUG_FONT: &MonoFont = &FONT_9X15;

/// Large debug page font.
pub const DEBUG_TITLE_FONT: &MonoFont = &FONT_10X20;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Large white gauge readout.
pub const READOUT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

/// Gauge title ("SPEED", "ENGINE").
pub const GAUGE_TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);

/// Gauge units and scale markers.
pub const GAUGE_SMALL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, WHITE);

/// Level bar label ("FUEL", "TEMP").
pub const BAR_LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_14_POINT, WHITE);

/// Clock text.
pub const CLOCK_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);
