//! Keyboard bindings.
//!
//! | Key | Action |
//! |-----|--------|
//! | `W` (hold) | Accelerate while held |
//! | `1`..`5` | Toggle seatbelt, engine, battery, lights, airbag |
//! | `Y` | Switch page (Dashboard / Debug) |
//!
//! The binding table is a plain array built at compile time. Lookups scan it
//! linearly; with seven entries nothing faster is needed.

use embedded_graphics_simulator::sdl2::Keycode;

use crate::widgets::IndicatorId;

/// A control action produced by a key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Accelerator pressed (`true`) or released (`false`).
    Accelerate(bool),
    /// Flip one indicator's active state.
    ToggleIndicator(IndicatorId),
    /// Switch between the dashboard and the debug page.
    TogglePage,
}

/// What a bound key does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Binding {
    /// Held key: down and up both matter.
    Accelerator,
    /// Toggle on key down, ignore key up and OS repeat.
    Indicator(IndicatorId),
    Page,
}

/// Key to action table.
pub struct KeyMap {
    bindings: [(Keycode, Binding); 7],
}

impl KeyMap {
    /// The cluster's fixed bindings.
    pub const fn new() -> Self {
        Self {
            bindings: [
                (Keycode::W, Binding::Accelerator),
                (Keycode::Num1, Binding::Indicator(IndicatorId::Seatbelt)),
                (Keycode::Num2, Binding::Indicator(IndicatorId::Engine)),
                (Keycode::Num3, Binding::Indicator(IndicatorId::Battery)),
                (Keycode::Num4, Binding::Indicator(IndicatorId::Lights)),
                (Keycode::Num5, Binding::Indicator(IndicatorId::Airbag)),
                (Keycode::Y, Binding::Page),
            ],
        }
    }

    fn binding(
        &self,
        keycode: Keycode,
    ) -> Option<Binding> {
        self.bindings
            .iter()
            .find(|(key, _)| *key == keycode)
            .map(|&(_, binding)| binding)
    }

    /// Action for a key-down event. OS repeat only re-asserts the accelerator.
    pub fn key_down(
        &self,
        keycode: Keycode,
        repeat: bool,
    ) -> Option<Control> {
        match self.binding(keycode)? {
            Binding::Accelerator => Some(Control::Accelerate(true)),
            _ if repeat => None,
            Binding::Indicator(id) => Some(Control::ToggleIndicator(id)),
            Binding::Page => Some(Control::TogglePage),
        }
    }

    /// Action for a key-up event. Only the accelerator reacts.
    pub fn key_up(
        &self,
        keycode: Keycode,
    ) -> Option<Control> {
        match self.binding(keycode)? {
            Binding::Accelerator => Some(Control::Accelerate(false)),
            _ => None,
        }
    }
}

impl Default for KeyMap {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
