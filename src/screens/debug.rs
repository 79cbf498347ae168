//! Debug page rendering.
//!
//! Loop timing, event counters, a snapshot of the simulated vehicle and the
//! event log. Press `Y` to toggle from the dashboard.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ DEBUG VIEW                                 UP 00:12:34   98 Hz   │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ TIMING              │ COUNTERS           │ VEHICLE               │
//! │ Frame:  10.1ms      │ Ticks:   14820     │ Speed:  123.0 km/h    │
//! │ Render: 0.4ms       │ Clock:   741       │ RPM:    4600          │
//! │ Sleep:  9.6ms       │ Warning: 312       │ Temp:   81.5          │
//! │ Min:    10.0ms      │ Toggles: 6         │ Fuel:   87.2%         │
//! │ Max:    14.2ms      │ Redraws: 15561     │ Gear:   1             │
//! │ Avg:    10.1ms      │ Loops:   74100     │ Accel:  ON  Warn: OFF │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ > Dashboard running                                              │
//! │ > Page: Debug                                                    │
//! │ > _                                                              │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{BLACK, GRAY, GREEN, ORANGE, RED, WHITE, YELLOW};
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::dashboard::Dashboard;
use crate::profiling::{DebugLog, ProfilingMetrics};
use crate::styles::{DEBUG_FONT, DEBUG_TITLE_FONT, LEFT_TOP, RIGHT_TOP};
use crate::widgets::draw_hline;

// =============================================================================
// Layout Constants
// =============================================================================

const MARGIN: i32 = 20;

/// Header text top
const HEADER_Y: i32 = 12;

/// Divider below header
const HEADER_DIVIDER_Y: i32 = 44;

/// Column titles
const SECTION_HEADER_Y: i32 = 60;

/// First stats row
const STATS_Y: i32 = 88;

/// Divider above the log
const LOG_DIVIDER_Y: i32 = 230;

/// First log line
const LOG_Y: i32 = 244;

const LOG_LINE_HEIGHT: i32 = 20;

const COL1_X: i32 = MARGIN;
const COL2_X: i32 = 400;
const COL3_X: i32 = 780;

const STAT_LINE_HEIGHT: i32 = 22;

// =============================================================================
// Colors
// =============================================================================

const HEADER_COLOR: Rgb565 = GREEN;
const SECTION_COLOR: Rgb565 = GRAY;
const VALUE_COLOR: Rgb565 = WHITE;
const HIGHLIGHT_COLOR: Rgb565 = YELLOW;
const LOG_PROMPT_COLOR: Rgb565 = GREEN;
const LOG_TEXT_COLOR: Rgb565 = ORANGE;
const DIVIDER_COLOR: Rgb565 = GRAY;

/// Terminal background (very dark green)
const LOG_BG: Rgb565 = Rgb565::new(1, 2, 1);

// =============================================================================
// Debug Page Drawing
// =============================================================================

/// Draw the full debug page. Clears the display first.
pub fn draw_debug_page<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
    log: &DebugLog,
    dashboard: &Dashboard,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();

    draw_header(display, metrics);
    draw_hline(display, 2, SCREEN_WIDTH as i32 - 3, HEADER_DIVIDER_Y, DIVIDER_COLOR);

    draw_section_headers(display);
    draw_timing_column(display, metrics);
    draw_counter_column(display, metrics);
    draw_vehicle_column(display, dashboard);

    draw_hline(display, 2, SCREEN_WIDTH as i32 - 3, LOG_DIVIDER_Y, DIVIDER_COLOR);
    draw_log_terminal(display, log);
}

/// Write one formatted line at `(x, y)`.
fn stat_line<D>(
    display: &mut D,
    text: &str,
    x: i32,
    y: i32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(text, Point::new(x, y), MonoTextStyle::new(DEBUG_FONT, color), LEFT_TOP)
        .draw(display)
        .ok();
}

fn draw_header<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let title_style = MonoTextStyle::new(DEBUG_TITLE_FONT, HEADER_COLOR);
    let info_style = MonoTextStyle::new(DEBUG_TITLE_FONT, VALUE_COLOR);

    Text::with_text_style("DEBUG VIEW", Point::new(COL1_X, HEADER_Y), title_style, LEFT_TOP)
        .draw(display)
        .ok();

    let mut info: String<40> = String::new();
    write!(info, "UP {}   {:.0} Hz", metrics.uptime_string(), metrics.loop_rate()).ok();
    Text::with_text_style(
        &info,
        Point::new(SCREEN_WIDTH as i32 - MARGIN, HEADER_Y),
        info_style,
        RIGHT_TOP,
    )
    .draw(display)
    .ok();
}

fn draw_section_headers<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    stat_line(display, "TIMING", COL1_X, SECTION_HEADER_Y, SECTION_COLOR);
    stat_line(display, "COUNTERS", COL2_X, SECTION_HEADER_Y, SECTION_COLOR);
    stat_line(display, "VEHICLE", COL3_X, SECTION_HEADER_Y, SECTION_COLOR);
}

/// Loop timing (left column).
fn draw_timing_column<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let min_us = if metrics.frame_time_min_us == u32::MAX {
        0
    } else {
        metrics.frame_time_min_us
    };
    let rows = [
        ("Frame: ", metrics.frame_time_us, VALUE_COLOR),
        ("Render:", metrics.render_time_us, VALUE_COLOR),
        ("Sleep: ", metrics.sleep_time_us, VALUE_COLOR),
        ("Min:   ", min_us, HIGHLIGHT_COLOR),
        ("Max:   ", metrics.frame_time_max_us, HIGHLIGHT_COLOR),
        ("Avg:   ", metrics.frame_time_avg_us(), HIGHLIGHT_COLOR),
    ];

    let mut y = STATS_Y;
    for (label, us, color) in rows {
        let mut s: String<24> = String::new();
        write!(s, "{label} {:.1}ms", us as f32 / 1000.0).ok();
        stat_line(display, &s, COL1_X, y, color);
        y += STAT_LINE_HEIGHT;
    }
}

/// Event counters (middle column).
fn draw_counter_column<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let rows = [
        ("Ticks:  ", metrics.ticks),
        ("Clock:  ", u64::from(metrics.clock_refreshes)),
        ("Warning:", u64::from(metrics.warning_ticks)),
        ("Toggles:", u64::from(metrics.indicator_toggles)),
        ("Redraws:", u64::from(metrics.redraws)),
        ("Loops:  ", metrics.total_frames),
    ];

    let mut y = STATS_Y;
    for (label, count) in rows {
        let mut s: String<32> = String::new();
        write!(s, "{label} {count}").ok();
        stat_line(display, &s, COL2_X, y, VALUE_COLOR);
        y += STAT_LINE_HEIGHT;
    }
}

/// Snapshot of the simulated vehicle (right column).
fn draw_vehicle_column<D>(
    display: &mut D,
    dashboard: &Dashboard,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let vehicle = dashboard.vehicle();
    let x = COL3_X;
    let mut y = STATS_Y;

    let mut s: String<32> = String::new();
    write!(s, "Speed:  {:.1} km/h", vehicle.speed()).ok();
    stat_line(display, &s, x, y, VALUE_COLOR);
    y += STAT_LINE_HEIGHT;

    let mut s: String<32> = String::new();
    write!(s, "RPM:    {:.0}", vehicle.rpm()).ok();
    stat_line(display, &s, x, y, VALUE_COLOR);
    y += STAT_LINE_HEIGHT;

    let mut s: String<32> = String::new();
    write!(s, "Temp:   {:.1}", vehicle.temperature()).ok();
    stat_line(display, &s, x, y, VALUE_COLOR);
    y += STAT_LINE_HEIGHT;

    let mut s: String<32> = String::new();
    write!(s, "Fuel:   {:.1}%", vehicle.fuel()).ok();
    stat_line(display, &s, x, y, VALUE_COLOR);
    y += STAT_LINE_HEIGHT;

    let mut s: String<32> = String::new();
    write!(s, "Gear:   {}", vehicle.gear).ok();
    stat_line(display, &s, x, y, VALUE_COLOR);
    y += STAT_LINE_HEIGHT;

    let on_off = |flag: bool| if flag { "ON " } else { "OFF" };
    let mut s: String<32> = String::new();
    write!(s, "Accel:  {}  Warn: {}", on_off(vehicle.accelerating), on_off(dashboard.warning())).ok();
    let color = if dashboard.warning() { RED } else { HIGHLIGHT_COLOR };
    stat_line(display, &s, x, y, color);
}

/// Event log terminal (bottom section).
fn draw_log_terminal<D>(
    display: &mut D,
    log: &DebugLog,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(LOG_BG))
    .draw(display)
    .ok();

    let mut y = LOG_Y;
    for line in log.iter() {
        stat_line(display, ">", COL1_X, y, LOG_PROMPT_COLOR);
        stat_line(display, line, COL1_X + 20, y, LOG_TEXT_COLOR);
        y += LOG_LINE_HEIGHT;
    }

    stat_line(display, "> _", COL1_X, y, LOG_PROMPT_COLOR);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;
    use image::{DynamicImage, Rgba, RgbaImage};

    use super::*;
    use crate::assets::IconSet;

    fn dashboard() -> Dashboard {
        let image = RgbaImage::from_pixel(30, 30, Rgba([90, 90, 90, 255]));
        Dashboard::new(IconSet::uniform(&DynamicImage::ImageRgba8(image)))
    }

    fn count_color(
        display: &SimulatorDisplay<Rgb565>,
        area: Rectangle,
        color: Rgb565,
    ) -> usize {
        area.points().filter(|&p| display.get_pixel(p) == color).count()
    }

    #[test]
    fn test_debug_page_sections() {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let metrics = ProfilingMetrics::new();
        let mut log = DebugLog::new();
        log.push("Dashboard running");

        draw_debug_page(&mut display, &metrics, &log, &dashboard());

        let title = Rectangle::new(Point::new(COL1_X, HEADER_Y), Size::new(120, 20));
        assert!(count_color(&display, title, HEADER_COLOR) > 0, "title drawn in green");

        let divider = Point::new(SCREEN_WIDTH as i32 / 2, HEADER_DIVIDER_Y);
        assert_eq!(display.get_pixel(divider), DIVIDER_COLOR);

        let log_line = Rectangle::new(Point::new(COL1_X + 20, LOG_Y), Size::new(150, 15));
        assert!(count_color(&display, log_line, LOG_TEXT_COLOR) > 0, "log text drawn");
        assert_eq!(display.get_pixel(Point::new(SCREEN_WIDTH as i32 - 5, 780)), LOG_BG);
    }

    #[test]
    fn test_warning_snapshot_highlighted() {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let mut dash = dashboard();
        *dash.vehicle_mut() = crate::vehicle::VehicleState::with_values(190.0, 7000.0, 90.0, 50.0);
        dash.vehicle_mut().accelerating = true;
        dash.tick();

        draw_debug_page(&mut display, &ProfilingMetrics::new(), &DebugLog::new(), &dash);

        let last_row = Rectangle::new(Point::new(COL3_X, STATS_Y + 5 * STAT_LINE_HEIGHT), Size::new(300, 15));
        assert!(count_color(&display, last_row, RED) > 0, "warning row drawn in red");
    }
}
