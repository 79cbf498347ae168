//! Simulated vehicle state.
//!
//! A single `VehicleState` record is owned by the [`Dashboard`](crate::dashboard::Dashboard)
//! and advanced once per tick. There is no physics: each tick adds or
//! subtracts a fixed step depending on whether the accelerator is held, and
//! every field is clamped to its range on every write.
//!
//! | Field | Range | Accelerating | Coasting |
//! |-------|-------|--------------|----------|
//! | speed | 0..=200 | +2 | -1 |
//! | rpm | 0..=8000 | +200 | -100 |
//! | temperature | 50..=100 | +0.5 | -0.2 |
//! | fuel | 0..=100 | -0.1 | unchanged |

use crate::thresholds::{
    FUEL_BURN_STEP, FUEL_MAX, RPM_ACCEL_STEP, RPM_COAST_STEP, RPM_MAX, SPEED_ACCEL_STEP, SPEED_COAST_STEP, SPEED_MAX,
    TEMP_ACCEL_STEP, TEMP_COAST_STEP, TEMP_MAX, TEMP_MIN, is_warning,
};

/// Current simulated values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VehicleState {
    /// Speed in km/h, `0..=200`.
    speed: f64,
    /// Engine speed, `0..=8000`.
    rpm: f64,
    /// Coolant temperature, `50..=100`.
    temperature: f64,
    /// Fuel level in percent, `0..=100`.
    fuel: f64,
    /// Selected gear. Displayed on the debug page only.
    pub gear: u8,
    /// Accelerator held. Set by the key handlers.
    pub accelerating: bool,
}

impl VehicleState {
    /// Engine cold, tank full, standing still in first gear.
    pub const fn new() -> Self {
        Self {
            speed: 0.0,
            rpm: 0.0,
            temperature: TEMP_MIN,
            fuel: FUEL_MAX,
            gear: 1,
            accelerating: false,
        }
    }

    /// Build a state from arbitrary values, clamping each into its range.
    #[allow(dead_code)]
    pub fn with_values(
        speed: f64,
        rpm: f64,
        temperature: f64,
        fuel: f64,
    ) -> Self {
        let mut state = Self::new();
        state.set_speed(speed);
        state.set_rpm(rpm);
        state.set_temperature(temperature);
        state.set_fuel(fuel);
        state
    }

    #[inline]
    pub const fn speed(&self) -> f64 { self.speed }

    #[inline]
    pub const fn rpm(&self) -> f64 { self.rpm }

    #[inline]
    pub const fn temperature(&self) -> f64 { self.temperature }

    #[inline]
    pub const fn fuel(&self) -> f64 { self.fuel }

    pub fn set_speed(
        &mut self,
        speed: f64,
    ) {
        self.speed = speed.clamp(0.0, SPEED_MAX);
    }

    pub fn set_rpm(
        &mut self,
        rpm: f64,
    ) {
        self.rpm = rpm.clamp(0.0, RPM_MAX);
    }

    pub fn set_temperature(
        &mut self,
        temperature: f64,
    ) {
        self.temperature = temperature.clamp(TEMP_MIN, TEMP_MAX);
    }

    pub fn set_fuel(
        &mut self,
        fuel: f64,
    ) {
        self.fuel = fuel.clamp(0.0, FUEL_MAX);
    }

    /// Advance the state by one tick.
    ///
    /// Deterministic: the result depends only on the current values and the
    /// `accelerating` flag.
    pub fn advance(&mut self) {
        if self.accelerating {
            self.set_speed(self.speed + SPEED_ACCEL_STEP);
            self.set_rpm(self.rpm + RPM_ACCEL_STEP);
            self.set_temperature(self.temperature + TEMP_ACCEL_STEP);
            self.set_fuel(self.fuel - FUEL_BURN_STEP);
        } else {
            self.set_speed(self.speed - SPEED_COAST_STEP);
            self.set_rpm(self.rpm - RPM_COAST_STEP);
            self.set_temperature(self.temperature - TEMP_COAST_STEP);
        }
    }

    /// Whether the global warning condition holds for the current values.
    #[inline]
    pub fn warning(&self) -> bool { is_warning(self.speed, self.rpm) }
}

impl Default for VehicleState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
