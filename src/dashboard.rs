//! Dashboard orchestrator.
//!
//! Owns the vehicle state, every widget and both timers. The event loop
//! calls [`Dashboard::poll`] with the current time; the dashboard decides
//! whether a tick and/or a clock refresh is due.
//!
//! # Lifecycle
//!
//! ```text
//! Idle --run(now)--> Running
//! ```
//!
//! `run` performs one immediate tick and clock refresh, then starts the 50 ms
//! tick timer and the 1 s clock timer. There is no terminal state; the
//! dashboard lives until the process exits.
//!
//! # Tick Order
//!
//! 1. advance the vehicle state
//! 2. push speed/rpm into the gauges and fuel/temperature into the bars
//! 3. evaluate the warning condition and broadcast it to every indicator,
//!    blinking all dots once when it holds

use std::time::Instant;

use chrono::NaiveTime;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::assets::IconSet;
use crate::config::{CLOCK_INTERVAL, TICK_INTERVAL};
use crate::input::Control;
use crate::timing::RepeatingTimer;
use crate::vehicle::VehicleState;
use crate::widgets::{
    ClockDisplay, FUEL_BAR, GaugeDisplay, IndicatorId, LevelBar, SPEEDOMETER, StatusIndicator, TACHOMETER, TEMP_BAR,
    local_now,
};

/// Orchestrator lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Idle,
    Running,
}

/// What happened during one [`Dashboard::poll`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PollResult {
    pub ticked: bool,
    pub clock_refreshed: bool,
    /// `Some(new_state)` when the warning condition flipped on this tick.
    pub warning_edge: Option<bool>,
}

impl PollResult {
    /// Anything visible changed.
    #[inline]
    pub const fn changed(&self) -> bool { self.ticked || self.clock_refreshed }
}

pub struct Dashboard {
    lifecycle: Lifecycle,
    vehicle: VehicleState,
    speedometer: GaugeDisplay,
    tachometer: GaugeDisplay,
    fuel_bar: LevelBar,
    temp_bar: LevelBar,
    indicators: [StatusIndicator; IndicatorId::COUNT],
    clock: ClockDisplay,
    tick_timer: RepeatingTimer,
    clock_timer: RepeatingTimer,
    warning: bool,
    tick_count: u64,
}

impl Dashboard {
    /// Build all widgets in the idle state.
    pub fn new(icons: IconSet) -> Self {
        let [seatbelt, engine, battery, lights, airbag] = icons.into_array();
        let indicators = [
            StatusIndicator::new(IndicatorId::Seatbelt, seatbelt),
            StatusIndicator::new(IndicatorId::Engine, engine),
            StatusIndicator::new(IndicatorId::Battery, battery),
            StatusIndicator::new(IndicatorId::Lights, lights),
            StatusIndicator::new(IndicatorId::Airbag, airbag),
        ];

        Self {
            lifecycle: Lifecycle::Idle,
            vehicle: VehicleState::new(),
            speedometer: GaugeDisplay::new(SPEEDOMETER),
            tachometer: GaugeDisplay::new(TACHOMETER),
            fuel_bar: LevelBar::new(FUEL_BAR),
            temp_bar: LevelBar::new(TEMP_BAR),
            indicators,
            clock: ClockDisplay::new(),
            tick_timer: RepeatingTimer::new(TICK_INTERVAL),
            clock_timer: RepeatingTimer::new(CLOCK_INTERVAL),
            warning: false,
            tick_count: 0,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Idle -> Running: one immediate update, then start both timers.
    /// Calling it again while running does nothing.
    pub fn run(
        &mut self,
        now: Instant,
    ) {
        self.run_at(now, local_now());
    }

    /// [`Self::run`] with an explicit wall-clock time.
    pub fn run_at(
        &mut self,
        now: Instant,
        wall: NaiveTime,
    ) {
        if self.lifecycle == Lifecycle::Running {
            return;
        }
        self.lifecycle = Lifecycle::Running;
        self.tick();
        self.clock.refresh(wall);
        self.tick_timer.start(now);
        self.clock_timer.start(now);
        tracing::info!("dashboard running");
    }

    #[inline]
    #[allow(dead_code)]
    pub const fn lifecycle(&self) -> Lifecycle { self.lifecycle }

    /// Run whatever timers are due at `now`. Tick first, then clock.
    pub fn poll(
        &mut self,
        now: Instant,
    ) -> PollResult {
        self.poll_at(now, local_now)
    }

    /// [`Self::poll`] with an injectable wall-clock source. Only called when
    /// the clock timer fires.
    pub fn poll_at<F>(
        &mut self,
        now: Instant,
        wall: F,
    ) -> PollResult
    where
        F: FnOnce() -> NaiveTime,
    {
        let mut result = PollResult::default();

        if self.tick_timer.poll(now) {
            result.warning_edge = self.tick();
            result.ticked = true;
        }
        if self.clock_timer.poll(now) {
            self.clock.refresh(wall());
            result.clock_refreshed = true;
        }
        result
    }

    /// Earliest pending deadline, or `None` while idle.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.tick_timer.next_due(), self.clock_timer.next_due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // =========================================================================
    // Tick
    // =========================================================================

    /// One simulation step. Returns the new warning state if it changed.
    pub fn tick(&mut self) -> Option<bool> {
        self.vehicle.advance();
        self.tick_count += 1;

        self.speedometer.update(self.vehicle.speed() as f32);
        self.tachometer.update(self.vehicle.rpm() as f32);
        self.fuel_bar.update(self.vehicle.fuel() as f32);
        self.temp_bar.update(self.vehicle.temperature() as f32);

        let warning = self.vehicle.warning();
        for indicator in &mut self.indicators {
            indicator.set_warning(warning);
            if warning {
                indicator.blink();
            }
        }

        let edge = (warning != self.warning).then_some(warning);
        self.warning = warning;
        edge
    }

    // =========================================================================
    // Controls
    // =========================================================================

    /// Apply a vehicle or indicator control. Page switching is owned by the
    /// caller and ignored here. Returns `true` if anything changed.
    pub fn apply(
        &mut self,
        control: Control,
    ) -> bool {
        match control {
            Control::Accelerate(on) => {
                let changed = self.vehicle.accelerating != on;
                self.vehicle.accelerating = on;
                changed
            }
            Control::ToggleIndicator(id) => {
                self.indicators[id.index()].toggle();
                true
            }
            Control::TogglePage => false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub const fn vehicle(&self) -> &VehicleState { &self.vehicle }

    /// Mutable access for seeding scenarios.
    #[inline]
    #[allow(dead_code)]
    pub const fn vehicle_mut(&mut self) -> &mut VehicleState { &mut self.vehicle }

    #[inline]
    #[allow(dead_code)]
    pub const fn speedometer(&self) -> &GaugeDisplay { &self.speedometer }

    #[inline]
    #[allow(dead_code)]
    pub const fn tachometer(&self) -> &GaugeDisplay { &self.tachometer }

    #[inline]
    #[allow(dead_code)]
    pub const fn fuel_bar(&self) -> &LevelBar { &self.fuel_bar }

    #[inline]
    #[allow(dead_code)]
    pub const fn temp_bar(&self) -> &LevelBar { &self.temp_bar }

    #[inline]
    pub const fn indicator(
        &self,
        id: IndicatorId,
    ) -> &StatusIndicator {
        &self.indicators[id.index()]
    }

    #[inline]
    #[allow(dead_code)]
    pub const fn indicators(&self) -> &[StatusIndicator; IndicatorId::COUNT] { &self.indicators }

    #[inline]
    #[allow(dead_code)]
    pub const fn clock(&self) -> &ClockDisplay { &self.clock }

    #[inline]
    pub const fn warning(&self) -> bool { self.warning }

    #[inline]
    pub const fn tick_count(&self) -> u64 { self.tick_count }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Draw every widget. Each widget repaints its own area.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        self.speedometer.draw(display);
        self.tachometer.draw(display);
        self.fuel_bar.draw(display);
        self.temp_bar.draw(display);
        for indicator in &self.indicators {
            indicator.draw(display);
        }
        self.clock.draw(display);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use embedded_graphics_simulator::SimulatorDisplay;
    use image::{DynamicImage, Rgba, RgbaImage};

    use super::*;
    use crate::colors::{BLACK, RED};
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

    const TOLERANCE: f64 = 1e-3;

    /// Vehicle values are `f64`, widget values `f32`.
    fn approx(
        actual: impl Into<f64>,
        expected: f64,
    ) -> bool {
        (actual.into() - expected).abs() < TOLERANCE
    }

    fn dashboard() -> Dashboard {
        let image = RgbaImage::from_pixel(30, 30, Rgba([90, 90, 90, 255]));
        Dashboard::new(IconSet::uniform(&DynamicImage::ImageRgba8(image)))
    }

    fn noon() -> NaiveTime { NaiveTime::from_hms_opt(12, 0, 0).unwrap() }

    fn all_dots_shown(dash: &Dashboard) -> Vec<bool> {
        dash.indicators().iter().map(|i| i.dot().is_shown()).collect()
    }

    fn all_dots_visible(dash: &Dashboard) -> Vec<bool> {
        dash.indicators().iter().map(|i| i.dot().is_visible()).collect()
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    #[test]
    fn test_starts_idle() {
        let dash = dashboard();
        assert_eq!(dash.lifecycle(), Lifecycle::Idle);
        assert_eq!(dash.next_deadline(), None);
        assert_eq!(dash.tick_count(), 0);
    }

    #[test]
    fn test_run_performs_immediate_update() {
        let mut dash = dashboard();
        let t0 = Instant::now();
        dash.run_at(t0, noon());

        assert_eq!(dash.lifecycle(), Lifecycle::Running);
        assert_eq!(dash.tick_count(), 1, "one tick right away");
        assert_eq!(dash.clock().text(), "12:00:00 PM", "clock read immediately");
        assert_eq!(dash.next_deadline(), Some(t0 + TICK_INTERVAL));
    }

    #[test]
    fn test_run_twice_is_noop() {
        let mut dash = dashboard();
        let t0 = Instant::now();
        dash.run_at(t0, noon());
        dash.run_at(t0 + Duration::from_secs(1), noon());
        assert_eq!(dash.tick_count(), 1);
    }

    #[test]
    fn test_idle_poll_does_nothing() {
        let mut dash = dashboard();
        let result = dash.poll_at(Instant::now() + Duration::from_secs(5), noon);
        assert_eq!(result, PollResult::default());
        assert_eq!(dash.tick_count(), 0);
    }

    // -------------------------------------------------------------------------
    // Timer Streams
    // -------------------------------------------------------------------------

    #[test]
    fn test_tick_and_clock_streams() {
        let mut dash = dashboard();
        let t0 = Instant::now();
        dash.run_at(t0, noon());

        let mut refreshes = 0;
        for ms in (10..=2000u64).step_by(10) {
            let result = dash.poll_at(t0 + Duration::from_millis(ms), noon);
            refreshes += u32::from(result.clock_refreshed);
        }
        // 1 immediate + 40 timed ticks over 2 s
        assert_eq!(dash.tick_count(), 41);
        assert_eq!(refreshes, 2);
    }

    #[test]
    fn test_clock_source_only_read_when_due() {
        let mut dash = dashboard();
        let t0 = Instant::now();
        dash.run_at(t0, noon());

        let result = dash.poll_at(t0 + TICK_INTERVAL, || panic!("clock not due"));
        assert!(result.ticked);
        assert!(!result.clock_refreshed);
    }

    // -------------------------------------------------------------------------
    // Tick Order and Widgets
    // -------------------------------------------------------------------------

    #[test]
    fn test_tick_pushes_values_into_widgets() {
        let mut dash = dashboard();
        dash.apply(Control::Accelerate(true));
        dash.tick();

        assert!(approx(dash.speedometer().value(), 2.0));
        assert!(approx(dash.tachometer().value(), 200.0));
        assert!(approx(dash.fuel_bar().value(), 99.9));
        assert!(approx(dash.temp_bar().value(), 50.5));
    }

    #[test]
    fn test_accelerate_then_coast_scenario() {
        let mut dash = dashboard();
        dash.apply(Control::Accelerate(true));
        for _ in 0..10 {
            dash.tick();
        }
        let v = dash.vehicle();
        assert!(approx(v.speed(), 20.0));
        assert!(approx(v.rpm(), 2000.0));
        assert!(approx(v.fuel(), 99.0), "fuel was {}", v.fuel());
        assert!(approx(v.temperature(), 55.0));

        dash.apply(Control::Accelerate(false));
        for _ in 0..10 {
            dash.tick();
        }
        let v = dash.vehicle();
        assert!(approx(v.speed(), 10.0));
        assert!(approx(v.rpm(), 1000.0));
        assert!(approx(v.temperature(), 53.0), "temperature was {}", v.temperature());
        assert!(approx(v.fuel(), 99.0));
        assert_eq!(dash.speedometer().frame().readout, 10);
    }

    // -------------------------------------------------------------------------
    // Warning Broadcast
    // -------------------------------------------------------------------------

    #[test]
    fn test_warning_boundary_broadcast() {
        let mut dash = dashboard();

        // Coasting tick takes 160 to 159: no warning
        *dash.vehicle_mut() = VehicleState::with_values(160.0, 0.0, 50.0, 100.0);
        assert_eq!(dash.tick(), None);
        assert!(approx(dash.vehicle().speed(), 159.0));
        assert_eq!(all_dots_visible(&dash), vec![false; 5]);

        // Accelerating from 158 lands exactly on 160
        *dash.vehicle_mut() = VehicleState::with_values(158.0, 0.0, 50.0, 100.0);
        dash.vehicle_mut().accelerating = true;
        assert_eq!(dash.tick(), Some(true));
        assert!(approx(dash.vehicle().speed(), 160.0));
        assert_eq!(all_dots_visible(&dash), vec![true; 5]);
        assert_eq!(all_dots_shown(&dash), vec![true; 5], "all dots blink on together");
    }

    #[test]
    fn test_rpm_alone_triggers_warning() {
        let mut dash = dashboard();
        *dash.vehicle_mut() = VehicleState::with_values(0.0, 6300.0, 50.0, 100.0);
        dash.vehicle_mut().accelerating = true;
        dash.tick();
        assert!(dash.warning());
        assert_eq!(all_dots_visible(&dash), vec![true; 5]);
    }

    #[test]
    fn test_dots_blink_in_lockstep() {
        let mut dash = dashboard();
        *dash.vehicle_mut() = VehicleState::with_values(180.0, 7000.0, 80.0, 50.0);
        dash.vehicle_mut().accelerating = true;

        for tick in 0..6 {
            dash.tick();
            let expected = tick % 2 == 0;
            assert_eq!(all_dots_shown(&dash), vec![expected; 5], "tick {tick}");
        }
    }

    #[test]
    fn test_warning_edges() {
        let mut dash = dashboard();
        *dash.vehicle_mut() = VehicleState::with_values(161.0, 0.0, 50.0, 100.0);
        dash.vehicle_mut().accelerating = true;
        assert_eq!(dash.tick(), Some(true));
        assert_eq!(dash.tick(), None, "steady warning reports no edge");

        // Coasting from 160 drops to 159
        *dash.vehicle_mut() = VehicleState::with_values(160.0, 0.0, 50.0, 100.0);
        assert_eq!(dash.tick(), Some(false));
        assert_eq!(all_dots_shown(&dash), vec![false; 5]);
    }

    #[test]
    fn test_each_warning_episode_starts_with_dots_on() {
        let mut dash = dashboard();

        // Episode of one tick: 158 -> 160, then coasting 160 -> 159 ends it
        *dash.vehicle_mut() = VehicleState::with_values(158.0, 0.0, 50.0, 100.0);
        dash.vehicle_mut().accelerating = true;
        assert_eq!(dash.tick(), Some(true));
        assert_eq!(all_dots_shown(&dash), vec![true; 5]);
        dash.vehicle_mut().accelerating = false;
        assert_eq!(dash.tick(), Some(false));
        assert_eq!(all_dots_shown(&dash), vec![false; 5]);

        // Second episode after an odd-length first one
        dash.vehicle_mut().accelerating = true;
        assert_eq!(dash.tick(), Some(true));
        assert!(approx(dash.vehicle().speed(), 161.0));
        assert_eq!(all_dots_shown(&dash), vec![true; 5], "second episode opens with the dots lit");
        assert_eq!(dash.tick(), None);
        assert_eq!(all_dots_shown(&dash), vec![false; 5]);
    }

    // -------------------------------------------------------------------------
    // Controls
    // -------------------------------------------------------------------------

    #[test]
    fn test_toggle_engine_twice() {
        let mut dash = dashboard();
        assert!(dash.apply(Control::ToggleIndicator(IndicatorId::Engine)));
        assert_eq!(dash.indicator(IndicatorId::Engine).brightness(), 2.0);
        assert_eq!(dash.indicator(IndicatorId::Seatbelt).brightness(), 1.0, "only the engine toggles");

        dash.apply(Control::ToggleIndicator(IndicatorId::Engine));
        assert_eq!(dash.indicator(IndicatorId::Engine).brightness(), 1.0);
    }

    #[test]
    fn test_accelerate_reports_change() {
        let mut dash = dashboard();
        assert!(dash.apply(Control::Accelerate(true)));
        assert!(!dash.apply(Control::Accelerate(true)), "already accelerating");
        assert!(dash.vehicle().accelerating);
        assert!(dash.apply(Control::Accelerate(false)));
    }

    #[test]
    fn test_page_control_ignored() {
        let mut dash = dashboard();
        assert!(!dash.apply(Control::TogglePage));
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    #[test]
    fn test_draw_full_dashboard() {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let mut dash = dashboard();
        dash.run_at(Instant::now(), noon());
        dash.draw(&mut display);

        // Speedometer needle near zero points down-left
        assert_eq!(display.get_pixel(Point::new(361, 439)), RED);
        // No warning: seatbelt dot area is black
        assert_eq!(display.get_pixel(Point::new(140, 60)), BLACK);
    }
}
