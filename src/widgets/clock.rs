//! Wall-clock panel.
//!
//! Refreshed on its own 1 s timer, independent of the dashboard tick. The
//! time is passed in by the caller so the formatting can be tested with a
//! fixed `NaiveTime`.

use core::fmt::Write;

use chrono::{Local, NaiveTime};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{BLACK, WHITE};
use crate::config::{CLOCK_BORDER, CLOCK_PAD_X, CLOCK_PAD_Y, CLOCK_POS};
use crate::styles::{CLOCK_STYLE, LEFT_TOP, READOUT_FONT};

/// 12-hour clock, e.g. `03:07:09 PM`.
const TIME_FORMAT: &str = "%I:%M:%S %p";

/// Length of a formatted time string.
const TIME_LEN: u32 = 11;

const PANEL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyleBuilder::new()
    .stroke_color(WHITE)
    .stroke_width(CLOCK_BORDER)
    .fill_color(BLACK)
    .build();

/// Current wall-clock time in the local zone.
pub fn local_now() -> NaiveTime { Local::now().time() }

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClockDisplay {
    text: String<16>,
}

impl ClockDisplay {
    /// An empty clock. Call [`Self::refresh`] before the first draw.
    pub const fn new() -> Self { Self { text: String::new() } }

    #[inline]
    #[allow(dead_code)]
    pub fn text(&self) -> &str { &self.text }

    /// Format `now` into the panel text.
    pub fn refresh(
        &mut self,
        now: NaiveTime,
    ) {
        self.text.clear();
        write!(self.text, "{}", now.format(TIME_FORMAT)).ok();
    }

    /// Panel rectangle, sized to fit an 11-character time in the readout font.
    pub fn panel(&self) -> Rectangle {
        let glyph = READOUT_FONT.character_size;
        let text_width = TIME_LEN * glyph.width + (TIME_LEN - 1) * READOUT_FONT.character_spacing;
        Rectangle::new(
            Point::new(CLOCK_POS.0, CLOCK_POS.1),
            Size::new(text_width + 2 * CLOCK_PAD_X, glyph.height + 2 * CLOCK_PAD_Y),
        )
    }

    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let panel = self.panel();
        panel.into_styled(PANEL_STYLE).draw(display).ok();
        Text::with_text_style(
            &self.text,
            panel.top_left + Point::new(CLOCK_PAD_X as i32, CLOCK_PAD_Y as i32),
            CLOCK_STYLE,
            LEFT_TOP,
        )
        .draw(display)
        .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;

    fn at(
        h: u32,
        m: u32,
        s: u32,
    ) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_new_clock_is_empty() {
        assert_eq!(ClockDisplay::new().text(), "");
    }

    #[test]
    fn test_twelve_hour_format() {
        let mut clock = ClockDisplay::new();

        clock.refresh(at(15, 7, 9));
        assert_eq!(clock.text(), "03:07:09 PM");

        clock.refresh(at(0, 0, 0));
        assert_eq!(clock.text(), "12:00:00 AM", "midnight is 12 AM");

        clock.refresh(at(12, 30, 59));
        assert_eq!(clock.text(), "12:30:59 PM", "noon is 12 PM");
    }

    #[test]
    fn test_refresh_replaces_text() {
        let mut clock = ClockDisplay::new();
        clock.refresh(at(9, 0, 0));
        clock.refresh(at(9, 0, 1));
        assert_eq!(clock.text(), "09:00:01 AM");
        assert_eq!(clock.text().len(), TIME_LEN as usize);
    }

    #[test]
    fn test_panel_position() {
        let panel = ClockDisplay::new().panel();
        assert_eq!(panel.top_left, Point::new(1000, 20));
        assert!(panel.size.width > 2 * CLOCK_PAD_X);
    }

    #[test]
    fn test_draw_border() {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(1200, 100));
        let mut clock = ClockDisplay::new();
        clock.refresh(at(10, 10, 10));
        clock.draw(&mut display);

        let panel = clock.panel();
        assert_eq!(display.get_pixel(panel.top_left + Point::new(0, 10)), WHITE, "left border");
        assert_eq!(display.get_pixel(panel.top_left + Point::new(5, 5)), BLACK, "padding stays black");
    }
}
