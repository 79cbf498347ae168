//! Circular dial gauges (speedometer, tachometer).
//!
//! Angles are in degrees, 0 along +x, counter-clockwise positive, and the
//! scale runs clockwise from `start_angle` (value 0) to `end_angle` (max).
//! On screen y grows downward, so a direction `theta` maps to
//! `(cos theta, -sin theta)`.
//!
//! # Redraw
//!
//! Every draw clears the gauge's bounding square first and then paints the
//! full gauge. The needle therefore always replaces the previous one and a
//! repeated value produces identical pixels.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Line, PrimitiveStyle, Rectangle, Sector};
use embedded_graphics::text::Text;
use heapless::{String, Vec};

use super::primitives::clear_area;
use crate::colors::{BLACK, DANGER_RED, RED, WHITE};
use crate::config::{
    GAUGE_END_ANGLE, GAUGE_MARKER_DIVISIONS, GAUGE_MARKER_INSET, GAUGE_NEEDLE_INSET, GAUGE_PANEL_OUTSET, GAUGE_RADIUS,
    GAUGE_START_ANGLE, SPEEDO_CENTER, TACHO_CENTER,
};
use crate::styles::{CENTERED_MIDDLE, GAUGE_SMALL_STYLE, GAUGE_TITLE_STYLE, READOUT_STYLE};
use crate::thresholds::{RPM_DANGER, RPM_MAX, SPEED_DANGER, SPEED_MAX};

const ARC_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 3);
const NEEDLE_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(RED, 3);

/// Readout sits this far below the gauge center.
const READOUT_OFFSET: i32 = 40;

/// Number of scale labels (both ends inclusive).
const MARKER_COUNT: usize = GAUGE_MARKER_DIVISIONS + 1;

// =============================================================================
// Gauge Configuration
// =============================================================================

/// Fixed parameters of one gauge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeConfig {
    pub center: (i32, i32),
    pub radius: i32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub max: f32,
    pub label: &'static str,
    pub units: &'static str,
    pub danger_threshold: f32,
}

pub const SPEEDOMETER: GaugeConfig = GaugeConfig {
    center: SPEEDO_CENTER,
    radius: GAUGE_RADIUS,
    start_angle: GAUGE_START_ANGLE,
    end_angle: GAUGE_END_ANGLE,
    max: SPEED_MAX as f32,
    label: "SPEED",
    units: "km/h",
    danger_threshold: SPEED_DANGER as f32,
};

pub const TACHOMETER: GaugeConfig = GaugeConfig {
    center: TACHO_CENTER,
    radius: GAUGE_RADIUS,
    start_angle: GAUGE_START_ANGLE,
    end_angle: GAUGE_END_ANGLE,
    max: RPM_MAX as f32,
    label: "ENGINE",
    units: "RPM",
    danger_threshold: RPM_DANGER as f32,
};

// =============================================================================
// Visual Description
// =============================================================================

/// A numeric scale label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Marker {
    pub position: Point,
    pub text: String<8>,
}

/// Value-dependent part of a gauge, as produced by [`GaugeDisplay::render`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeFrame {
    /// Needle angle in degrees.
    #[allow(dead_code)]
    pub angle: f32,
    /// Needle tip; the needle starts at the gauge center.
    pub needle_end: Point,
    /// Danger panel lit.
    pub danger: bool,
    /// Integer part of the value.
    pub readout: i32,
}

/// Point at `distance` from `center` along `degrees` (screen coordinates).
fn polar(
    center: Point,
    distance: f32,
    degrees: f32,
) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point::new(
        center.x + (distance * cos).round() as i32,
        center.y - (distance * sin).round() as i32,
    )
}

// =============================================================================
// Gauge Display
// =============================================================================

/// A dial gauge holding its last value.
#[derive(Clone, Debug)]
pub struct GaugeDisplay {
    config: GaugeConfig,
    center: Point,
    markers: Vec<Marker, MARKER_COUNT>,
    value: f32,
}

impl GaugeDisplay {
    /// Build a gauge at value 0. Marker positions are computed here once.
    pub fn new(config: GaugeConfig) -> Self {
        let center = Point::new(config.center.0, config.center.1);
        let mut gauge = Self {
            config,
            center,
            markers: Vec::new(),
            value: 0.0,
        };

        let marker_radius = (config.radius - GAUGE_MARKER_INSET) as f32;
        for i in 0..MARKER_COUNT {
            let value = config.max * i as f32 / GAUGE_MARKER_DIVISIONS as f32;
            let mut text: String<8> = String::new();
            write!(text, "{}", value as i32).ok();
            // MARKER_COUNT is the Vec capacity
            gauge
                .markers
                .push(Marker {
                    position: polar(center, marker_radius, gauge.angle_for(value)),
                    text,
                })
                .ok();
        }
        gauge
    }

    #[inline]
    #[allow(dead_code)]
    pub const fn config(&self) -> &GaugeConfig { &self.config }

    #[inline]
    #[allow(dead_code)]
    pub const fn value(&self) -> f32 { self.value }

    #[inline]
    #[allow(dead_code)]
    pub fn markers(&self) -> &[Marker] { &self.markers }

    /// Needle angle in degrees for `value`.
    pub fn angle_for(
        &self,
        value: f32,
    ) -> f32 {
        let GaugeConfig {
            start_angle,
            end_angle,
            max,
            ..
        } = self.config;
        start_angle - (value / max) * (start_angle - end_angle)
    }

    /// Value-dependent visual description. Pure.
    pub fn render(
        &self,
        value: f32,
    ) -> GaugeFrame {
        let value = value.clamp(0.0, self.config.max);
        let angle = self.angle_for(value);
        GaugeFrame {
            angle,
            needle_end: polar(self.center, (self.config.radius - GAUGE_NEEDLE_INSET) as f32, angle),
            danger: value >= self.config.danger_threshold,
            readout: value as i32,
        }
    }

    /// Store a new value. Repeating the same value changes nothing.
    pub fn update(
        &mut self,
        value: f32,
    ) {
        self.value = value.clamp(0.0, self.config.max);
    }

    /// Description of the current value.
    #[inline]
    pub fn frame(&self) -> GaugeFrame { self.render(self.value) }

    /// Square covering the danger panel and everything drawn inside it.
    pub fn bounding_box(&self) -> Rectangle {
        let side = (2 * (self.config.radius + GAUGE_PANEL_OUTSET) + 2) as u32;
        Rectangle::with_center(self.center, Size::new(side, side))
    }

    /// Draw the whole gauge for its current value.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let frame = self.frame();
        let config = &self.config;

        clear_area(display, self.bounding_box());

        // Sector/Arc angles grow clockwise on screen: negate and sweep forward
        let start = Angle::from_degrees(-config.start_angle);
        let sweep = Angle::from_degrees(config.start_angle - config.end_angle);

        let panel_color = if frame.danger { DANGER_RED } else { BLACK };
        Sector::with_center(self.center, (2 * (config.radius + GAUGE_PANEL_OUTSET)) as u32, start, sweep)
            .into_styled(PrimitiveStyle::with_fill(panel_color))
            .draw(display)
            .ok();
        Arc::with_center(self.center, (2 * config.radius) as u32, start, sweep)
            .into_styled(ARC_STYLE)
            .draw(display)
            .ok();

        for marker in &self.markers {
            Text::with_text_style(&marker.text, marker.position, GAUGE_SMALL_STYLE, CENTERED_MIDDLE)
                .draw(display)
                .ok();
        }

        let half = config.radius / 2;
        Text::with_text_style(
            config.label,
            self.center + Point::new(0, half + 20),
            GAUGE_TITLE_STYLE,
            CENTERED_MIDDLE,
        )
        .draw(display)
        .ok();
        Text::with_text_style(
            config.units,
            self.center + Point::new(0, half + 45),
            GAUGE_SMALL_STYLE,
            CENTERED_MIDDLE,
        )
        .draw(display)
        .ok();

        Line::new(self.center, frame.needle_end)
            .into_styled(NEEDLE_STYLE)
            .draw(display)
            .ok();

        let mut readout: String<12> = String::new();
        write!(readout, "{}", frame.readout).ok();
        Text::with_text_style(
            &readout,
            self.center + Point::new(0, READOUT_OFFSET),
            READOUT_STYLE,
            CENTERED_MIDDLE,
        )
        .draw(display)
        .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
