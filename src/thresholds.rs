//! Vehicle ranges, per-tick rates and warning thresholds.
//!
//! All values are compile-time constants. Each group carries `const`
//! assertions so a mis-ordered edit fails the build instead of producing a
//! gauge that can never reach its danger zone.

// =============================================================================
// Vehicle Value Ranges
// =============================================================================

/// Maximum speed in km/h. Also the speedometer full-scale value.
pub const SPEED_MAX: f64 = 200.0;

/// Maximum engine speed in RPM. Also the tachometer full-scale value.
pub const RPM_MAX: f64 = 8000.0;

/// Coolant temperature floor (engine at rest).
pub const TEMP_MIN: f64 = 50.0;

/// Coolant temperature ceiling.
pub const TEMP_MAX: f64 = 100.0;

/// Fuel level ceiling (percent).
pub const FUEL_MAX: f64 = 100.0;

// =============================================================================
// Per-Tick Rates
// =============================================================================

/// Speed gained per tick while accelerating.
pub const SPEED_ACCEL_STEP: f64 = 2.0;

/// Speed lost per tick while coasting.
pub const SPEED_COAST_STEP: f64 = 1.0;

/// RPM gained per tick while accelerating.
pub const RPM_ACCEL_STEP: f64 = 200.0;

/// RPM lost per tick while coasting.
pub const RPM_COAST_STEP: f64 = 100.0;

/// Temperature gained per tick while accelerating.
pub const TEMP_ACCEL_STEP: f64 = 0.5;

/// Temperature lost per tick while coasting.
pub const TEMP_COAST_STEP: f64 = 0.2;

/// Fuel burned per tick while accelerating. Coasting burns nothing.
pub const FUEL_BURN_STEP: f64 = 0.1;

// =============================================================================
// Warning Thresholds (80% of each gauge's full scale)
// =============================================================================

/// Speed at which the warning lamps start blinking and the speedometer panel
/// turns red.
pub const SPEED_DANGER: f64 = 160.0;

/// RPM at which the warning lamps start blinking and the tachometer panel
/// turns red.
pub const RPM_DANGER: f64 = 6400.0;

const _: () = assert!(SPEED_DANGER < SPEED_MAX);
const _: () = assert!(RPM_DANGER < RPM_MAX);

// =============================================================================
// Level Bar Tiers
// =============================================================================

/// Below this value a level bar uses its "low" color.
pub const LEVEL_LOW_BELOW: f32 = 20.0;

/// Below this value (and at or above `LEVEL_LOW_BELOW`) a level bar uses its
/// "medium" color. At or above it, "normal".
pub const LEVEL_MEDIUM_BELOW: f32 = 50.0;

const _: () = assert!(LEVEL_LOW_BELOW < LEVEL_MEDIUM_BELOW);

/// Full-scale value of a level bar.
pub const LEVEL_MAX: f32 = 100.0;

// =============================================================================
// Warning Policy
// =============================================================================

/// Global warning condition broadcast to every indicator each tick.
///
/// Inclusive on both thresholds: exactly 160 km/h or exactly 6400 RPM warns.
#[inline]
pub fn is_warning(
    speed: f64,
    rpm: f64,
) -> bool {
    speed >= SPEED_DANGER || rpm >= RPM_DANGER
}

// =============================================================================
// Unit Tests
// =============================================================================
