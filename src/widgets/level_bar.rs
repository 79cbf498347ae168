//! Vertical level bars (fuel, coolant temperature).
//!
//! The fill grows upward from the bottom inset and is colored by tier. Tier
//! boundaries belong to the higher tier: 20 is medium, 50 is normal.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::{BLACK, CYAN, GREEN, ORANGE, RED, WHITE, YELLOW};
use crate::config::{BAR_HEIGHT, BAR_INSET, BAR_WIDTH, FUEL_BAR_POS, TEMP_BAR_POS};
use crate::styles::{BAR_LABEL_STYLE, CENTERED_MIDDLE};
use crate::thresholds::{LEVEL_LOW_BELOW, LEVEL_MAX, LEVEL_MEDIUM_BELOW};

const FRAME_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyleBuilder::new()
    .stroke_color(WHITE)
    .stroke_width(2)
    .fill_color(BLACK)
    .build();

/// Label sits this far below the bar.
const LABEL_GAP: i32 = 20;

/// Color tier of a level value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelTier {
    Low,
    Medium,
    Normal,
}

impl LevelTier {
    pub fn of(value: f32) -> Self {
        if value < LEVEL_LOW_BELOW {
            Self::Low
        } else if value < LEVEL_MEDIUM_BELOW {
            Self::Medium
        } else {
            Self::Normal
        }
    }
}

/// Fixed parameters of one bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarConfig {
    pub position: (i32, i32),
    pub size: (u32, u32),
    pub label: &'static str,
    pub normal: Rgb565,
    pub medium: Rgb565,
    pub low: Rgb565,
}

impl BarConfig {
    pub const fn color(
        &self,
        tier: LevelTier,
    ) -> Rgb565 {
        match tier {
            LevelTier::Low => self.low,
            LevelTier::Medium => self.medium,
            LevelTier::Normal => self.normal,
        }
    }
}

pub const FUEL_BAR: BarConfig = BarConfig {
    position: FUEL_BAR_POS,
    size: (BAR_WIDTH, BAR_HEIGHT),
    label: "FUEL",
    normal: GREEN,
    medium: YELLOW,
    low: RED,
};

pub const TEMP_BAR: BarConfig = BarConfig {
    position: TEMP_BAR_POS,
    size: (BAR_WIDTH, BAR_HEIGHT),
    label: "TEMP",
    normal: CYAN,
    medium: ORANGE,
    low: RED,
};

/// Visual description of a bar at one value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarFrame {
    /// Filled rectangle, anchored to the bottom inset. Zero height when empty.
    pub fill: Rectangle,
    #[allow(dead_code)]
    pub tier: LevelTier,
    pub color: Rgb565,
}

/// A level bar holding its last value.
#[derive(Clone, Copy, Debug)]
pub struct LevelBar {
    config: BarConfig,
    value: f32,
}

impl LevelBar {
    pub const fn new(config: BarConfig) -> Self { Self { config, value: 0.0 } }

    #[inline]
    #[allow(dead_code)]
    pub const fn config(&self) -> &BarConfig { &self.config }

    #[inline]
    #[allow(dead_code)]
    pub const fn value(&self) -> f32 { self.value }

    /// Outer rectangle of the bar.
    pub const fn outline(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.config.position.0, self.config.position.1),
            Size::new(self.config.size.0, self.config.size.1),
        )
    }

    /// Visual description for `value`. Pure; tier is decided fresh each call.
    pub fn render(
        &self,
        value: f32,
    ) -> BarFrame {
        let value = value.clamp(0.0, LEVEL_MAX);
        let (x, y) = self.config.position;
        let (w, h) = (self.config.size.0 as i32, self.config.size.1 as i32);

        let inner_height = (h - 2 * BAR_INSET) as f32;
        let fill_height = ((value / LEVEL_MAX) * inner_height) as i32;
        let bottom = y + h - BAR_INSET;

        let tier = LevelTier::of(value);
        BarFrame {
            fill: Rectangle::new(
                Point::new(x + BAR_INSET, bottom - fill_height),
                Size::new((w - 2 * BAR_INSET) as u32, fill_height as u32),
            ),
            tier,
            color: self.config.color(tier),
        }
    }

    /// Store a new value. Repeating the same value changes nothing.
    pub fn update(
        &mut self,
        value: f32,
    ) {
        self.value = value.clamp(0.0, LEVEL_MAX);
    }

    #[inline]
    pub fn frame(&self) -> BarFrame { self.render(self.value) }

    /// Draw border, fill and label for the current value.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let frame = self.frame();
        let outline = self.outline();

        outline.into_styled(FRAME_STYLE).draw(display).ok();
        if frame.fill.size.height > 0 {
            frame
                .fill
                .into_styled(PrimitiveStyle::with_fill(frame.color))
                .draw(display)
                .ok();
        }

        let label_pos = Point::new(
            outline.top_left.x + self.config.size.0 as i32 / 2,
            outline.top_left.y + self.config.size.1 as i32 + LABEL_GAP,
        );
        Text::with_text_style(self.config.label, label_pos, BAR_LABEL_STYLE, CENTERED_MIDDLE)
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
