// Crate-level lints: allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in gauge and bar calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // f32->u8/u32 where the value is already clamped non-negative
#![allow(clippy::too_many_lines)] // run() holds the whole event loop

//! Vehicle instrument cluster simulator.
//!
//! A desktop window showing a simulated instrument cluster:
//! - Speedometer and tachometer dials with danger zones
//! - Fuel and coolant temperature level bars
//! - Five status indicators with blinking warning dots
//! - Wall clock
//!
//! The vehicle model is physics-free: each 50 ms tick adds or subtracts a
//! fixed step depending on whether the accelerator is held. The clock has its
//! own 1 s timer. Both timers are polled from one single-threaded event loop.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `W` | Accelerate while held |
//! | `1`..`5` | Toggle seatbelt, engine, battery, lights, airbag indicator |
//! | `Y` | Switch between Dashboard and Debug page |
//!
//! Key repeat never re-toggles an indicator.
//!
//! # Warning Policy
//!
//! When speed reaches 160 km/h or engine speed reaches 6400 RPM, every warning
//! dot becomes visible and all of them blink together, one phase per tick.
//!
//! # Layout
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  [S][E][B][L][A]                              [12:00:00 PM] │
//! │                                                            │
//! │ ┌─┐        ╭────────╮          ╭────────╮             ┌─┐ │
//! │ │F│       ╱  SPEED   ╲        ╱ ENGINE   ╲            │T│ │
//! │ │U│      │     \      │      │     /      │           │E│ │
//! │ │E│       ╲   123    ╱        ╲  4600    ╱            │M│ │
//! │ │L│        km/h                 RPM                   │P│ │
//! │ └─┘                                                   └─┘ │
//! └────────────────────────────────────────────────────────────┘
//!                          1200 x 800
//! ```
//!
//! # Logging
//!
//! Process logs go through `tracing`; set `RUST_LOG` to change the level
//! (default `info`). Control changes and warning edges also appear in the
//! in-app event log on the debug page.

mod assets;
mod colors;
mod config;
mod dashboard;
mod input;
mod pages;
mod profiling;
mod render;
mod screens;
mod styles;
mod thresholds;
mod timing;
mod vehicle;
mod widgets;

use core::fmt::Write;
use std::error::Error;
use std::process;
use std::thread;
use std::time::Instant;

use assets::{AssetError, IconSet};
use colors::BLACK;
use config::{MAX_POLL_INTERVAL, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_SCALE, WINDOW_TITLE};
use dashboard::Dashboard;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;
use input::{Control, KeyMap};
use pages::Page;
use profiling::{DebugLog, LOG_LINE_LENGTH, ProfilingMetrics};
use render::RenderState;
use screens::draw_debug_page;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run() {
        tracing::error!(error = %err, "startup failed");
        eprintln!("error: {err}");
        if let Some(source) = err.source() {
            eprintln!("  caused by: {source}");
        }
        process::exit(1);
    }
}

const fn on_off(flag: bool) -> &'static str { if flag { "ON" } else { "OFF" } }

/// Load assets, open the window and run the event loop until it is closed.
fn run() -> Result<(), AssetError> {
    // Icons first: a missing asset must abort before the window opens
    let icons = IconSet::load_default()?;
    let mut dashboard = Dashboard::new(icons);

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    let keys = KeyMap::new();
    let mut render_state = RenderState::new();
    let mut current_page = Page::default();
    let mut metrics = ProfilingMetrics::new();
    let mut debug_log = DebugLog::new();

    dashboard.run(Instant::now());
    metrics.inc_tick(dashboard.warning());
    metrics.inc_clock_refreshes();
    debug_log.push("Dashboard running");

    // ==========================================================================
    // Event Loop
    // ==========================================================================

    loop {
        let loop_start = Instant::now();

        for ev in window.events() {
            let control = match ev {
                SimulatorEvent::Quit => {
                    tracing::info!(ticks = dashboard.tick_count(), "window closed");
                    return Ok(());
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => keys.key_down(keycode, repeat),
                SimulatorEvent::KeyUp { keycode, .. } => keys.key_up(keycode),
                _ => None,
            };
            let Some(control) = control else {
                continue;
            };

            match control {
                Control::TogglePage => {
                    current_page = current_page.toggle();
                    render_state.mark_page_switched();
                    debug_log.push(current_page.log_line());
                }
                Control::Accelerate(on) => {
                    // OS repeat re-sends key down while W is held; log edges only
                    if dashboard.apply(control) {
                        let mut line: String<LOG_LINE_LENGTH> = String::new();
                        write!(line, "Accelerate: {}", on_off(on)).ok();
                        debug_log.push(&line);
                    }
                }
                Control::ToggleIndicator(id) => {
                    dashboard.apply(control);
                    metrics.inc_indicator_toggles();
                    render_state.mark_dirty();

                    let mut line: String<LOG_LINE_LENGTH> = String::new();
                    write!(line, "{}: {}", id.name(), on_off(dashboard.indicator(id).is_active())).ok();
                    debug_log.push(&line);
                }
            }
        }

        // ======================================================================
        // Timers
        // ======================================================================

        let poll = dashboard.poll(Instant::now());
        if poll.ticked {
            metrics.inc_tick(dashboard.warning());
        }
        if poll.clock_refreshed {
            metrics.inc_clock_refreshes();
        }
        if let Some(on) = poll.warning_edge {
            let vehicle = dashboard.vehicle();
            tracing::warn!(speed = vehicle.speed(), rpm = vehicle.rpm(), active = on, "warning condition changed");
            let mut line: String<LOG_LINE_LENGTH> = String::new();
            write!(line, "Warning: {}", on_off(on)).ok();
            debug_log.push(&line);
        }
        if poll.changed() {
            render_state.mark_dirty();
        }

        // ======================================================================
        // Drawing
        // ======================================================================

        if render_state.needs_clear() {
            display.clear(BLACK).ok();
        }
        if render_state.needs_redraw() {
            match current_page {
                Page::Dashboard => {
                    dashboard.draw(&mut display);
                    metrics.inc_redraws();
                }
                Page::Debug => draw_debug_page(&mut display, &metrics, &debug_log, &dashboard),
            }
        }

        let render_time = loop_start.elapsed();
        render_state.end_frame();
        window.update(&display);

        // ======================================================================
        // Sleep Until Next Deadline
        // ======================================================================

        let pre_sleep = loop_start.elapsed();
        let sleep_for = dashboard
            .next_deadline()
            .map_or(MAX_POLL_INTERVAL, |due| {
                due.saturating_duration_since(Instant::now()).min(MAX_POLL_INTERVAL)
            });
        thread::sleep(sleep_for);
        let sleep_time = loop_start.elapsed().saturating_sub(pre_sleep);

        metrics.record_frame(loop_start.elapsed(), render_time, sleep_time);
    }
}
