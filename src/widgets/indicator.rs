//! Status indicators and their warning dots.
//!
//! Each indicator carries two independent layers:
//!
//! - an icon, drawn at normal brightness or brightened while `active`
//!   (toggled by the number keys)
//! - a red warning dot, shown only while the global warning condition holds
//!   and the blink phase is on
//!
//! The warning broadcast reaches all five indicators in the same tick, and
//! every dot starts in the same phase, so the dots blink in lockstep.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};

use super::primitives::clear_area;
use crate::assets::{ACTIVE_BRIGHTNESS, IconVariants, NORMAL_BRIGHTNESS};
use crate::colors::{BLACK, RED};
use crate::config::{
    ICON_SIZE, INDICATOR_FIRST_X, INDICATOR_ROW_Y, INDICATOR_SPACING, WARNING_DOT_DIAMETER, WARNING_DOT_OFFSET,
};

const DOT_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);
const DOT_CLEAR: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);

// =============================================================================
// Indicator Identity
// =============================================================================

/// The five fixed indicators, in construction order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndicatorId {
    Seatbelt,
    Engine,
    Battery,
    Lights,
    Airbag,
}

impl IndicatorId {
    pub const COUNT: usize = 5;

    #[allow(dead_code)]
    pub const ALL: [Self; Self::COUNT] = [Self::Seatbelt, Self::Engine, Self::Battery, Self::Lights, Self::Airbag];

    /// Position in [`Self::ALL`]; also the slot index on the indicator row.
    #[inline]
    pub const fn index(self) -> usize { self as usize }

    /// Display name used in log lines.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Seatbelt => "Seatbelt",
            Self::Engine => "Engine",
            Self::Battery => "Battery",
            Self::Lights => "Lights",
            Self::Airbag => "Airbag",
        }
    }

    /// Top-left corner of this indicator's icon.
    pub const fn origin(self) -> Point {
        Point::new(INDICATOR_FIRST_X + INDICATOR_SPACING * self.index() as i32, INDICATOR_ROW_Y)
    }
}

/// Icon brightness multiplier for the given active state.
#[inline]
pub const fn brightness_factor(active: bool) -> f32 { if active { ACTIVE_BRIGHTNESS } else { NORMAL_BRIGHTNESS } }

// =============================================================================
// Warning Dot
// =============================================================================

/// Blinking red dot attached to an indicator.
///
/// `visible` follows the warning broadcast. `blink_on` is the blink phase and
/// only advances while visible. The dot is shown when both are set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WarningDot {
    visible: bool,
    blink_on: bool,
}

impl WarningDot {
    /// Hidden, blink phase off. The first warning tick blinks it on.
    pub const fn new() -> Self {
        Self {
            visible: false,
            blink_on: false,
        }
    }

    /// Set by the warning broadcast. Becoming visible resets the blink phase
    /// to off so every warning episode starts with the dot blinking on.
    #[inline]
    pub const fn set_visibility(
        &mut self,
        visible: bool,
    ) {
        if visible && !self.visible {
            self.blink_on = false;
        }
        self.visible = visible;
    }

    /// Invert the blink phase. No effect while not visible.
    #[inline]
    pub const fn blink(&mut self) {
        if self.visible {
            self.blink_on = !self.blink_on;
        }
    }

    #[inline]
    #[allow(dead_code)]
    pub const fn is_visible(&self) -> bool { self.visible }

    /// Whether the dot is drawn right now.
    #[inline]
    pub const fn is_shown(&self) -> bool { self.visible && self.blink_on }
}

impl Default for WarningDot {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Status Indicator
// =============================================================================

/// Pure visual description of one indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorFrame {
    pub origin: Point,
    pub active: bool,
    #[allow(dead_code)]
    pub brightness: f32,
    pub dot_shown: bool,
}

/// One icon slot on the indicator row.
#[derive(Clone, Debug)]
pub struct StatusIndicator {
    id: IndicatorId,
    active: bool,
    dot: WarningDot,
    icons: IconVariants,
}

impl StatusIndicator {
    pub const fn new(
        id: IndicatorId,
        icons: IconVariants,
    ) -> Self {
        Self {
            id,
            active: false,
            dot: WarningDot::new(),
            icons,
        }
    }

    #[inline]
    #[allow(dead_code)]
    pub const fn id(&self) -> IndicatorId { self.id }

    #[inline]
    pub const fn is_active(&self) -> bool { self.active }

    #[inline]
    #[allow(dead_code)]
    pub const fn dot(&self) -> &WarningDot { &self.dot }

    /// Flip the active state. Returns the new state.
    pub const fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    #[inline]
    pub const fn brightness(&self) -> f32 { brightness_factor(self.active) }

    #[inline]
    pub const fn set_warning(
        &mut self,
        visible: bool,
    ) {
        self.dot.set_visibility(visible);
    }

    #[inline]
    pub const fn blink(&mut self) { self.dot.blink(); }

    pub const fn render(&self) -> IndicatorFrame {
        IndicatorFrame {
            origin: self.id.origin(),
            active: self.active,
            brightness: self.brightness(),
            dot_shown: self.dot.is_shown(),
        }
    }

    /// Draw the icon variant for the current state and the warning dot (or
    /// clear the dot's area when it is hidden).
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let frame = self.render();

        clear_area(display, Rectangle::new(frame.origin, Size::new(ICON_SIZE, ICON_SIZE)));
        display.draw_iter(self.icons.get(frame.active).pixels_at(frame.origin)).ok();

        let dot_origin = frame.origin + Point::new(WARNING_DOT_OFFSET.0, WARNING_DOT_OFFSET.1);
        let dot_style = if frame.dot_shown { DOT_FILL } else { DOT_CLEAR };
        Circle::new(dot_origin, WARNING_DOT_DIAMETER)
            .into_styled(dot_style)
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
