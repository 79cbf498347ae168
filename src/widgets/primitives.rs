//! Small drawing helpers shared by the widgets and the debug page.
//!
//! Widgets repaint their own area on every draw instead of clearing the whole
//! screen, so the helpers here work on an explicit rectangle.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

use crate::colors::BLACK;

/// Fill `area` with the background color.
pub fn clear_area<D>(
    display: &mut D,
    area: Rectangle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    area.into_styled(PrimitiveStyle::with_fill(BLACK)).draw(display).ok();
}

/// Draw a 1px horizontal line across `x0..=x1` at row `y`.
pub fn draw_hline<D>(
    display: &mut D,
    x0: i32,
    x1: i32,
    y: i32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(x0, y), Point::new(x1, y))
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::colors::WHITE;

    #[test]
    fn test_clear_area_fills_black() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        clear_area(&mut display, Rectangle::new(Point::new(1, 1), Size::new(2, 2)));
        assert_eq!(display.get_pixel(Point::new(1, 1)), Some(BLACK));
        assert_eq!(display.get_pixel(Point::new(2, 2)), Some(BLACK));
        assert_eq!(display.get_pixel(Point::new(0, 0)), None, "outside the area untouched");
    }

    #[test]
    fn test_hline_spans_inclusive() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        draw_hline(&mut display, 2, 5, 3, WHITE);
        assert_eq!(display.get_pixel(Point::new(2, 3)), Some(WHITE));
        assert_eq!(display.get_pixel(Point::new(5, 3)), Some(WHITE));
        assert_eq!(display.get_pixel(Point::new(6, 3)), None);
        assert_eq!(display.get_pixel(Point::new(3, 2)), None);
    }
}
