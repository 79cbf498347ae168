//! Render bookkeeping for the main loop.
//!
//! The loop polls far more often than anything changes (every 10 ms against
//! a 50 ms tick), so it only draws when something asked for it.
//!
//! | Trigger | Clear screen | Redraw |
//! |---------|--------------|--------|
//! | First frame | yes | yes |
//! | Page switch | yes | yes |
//! | Tick, clock refresh, indicator toggle | no | yes |
//! | Nothing happened | no | no |
//!
//! Dashboard widgets repaint their own areas, so a plain redraw never needs a
//! full clear. A page switch does, to remove the other page's content.

/// Tracks whether the current frame needs a clear and/or a redraw.
pub struct RenderState {
    /// First frame since startup.
    first_frame: bool,

    /// Page switched this frame; the previous page must be wiped.
    page_switched: bool,

    /// Something visible changed since the last drawn frame.
    dirty: bool,
}

impl RenderState {
    pub const fn new() -> Self {
        Self {
            first_frame: true,
            page_switched: false,
            dirty: false,
        }
    }

    /// Request a redraw this frame.
    #[inline]
    pub const fn mark_dirty(&mut self) { self.dirty = true; }

    /// Request a clear and a redraw this frame.
    #[inline]
    pub const fn mark_page_switched(&mut self) {
        self.page_switched = true;
        self.dirty = true;
    }

    #[inline]
    #[allow(dead_code)]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Whole display must be cleared before drawing.
    #[inline]
    pub const fn needs_clear(&self) -> bool { self.first_frame || self.page_switched }

    /// Current page must be drawn this frame.
    #[inline]
    pub const fn needs_redraw(&self) -> bool { self.first_frame || self.page_switched || self.dirty }

    /// Reset per-frame flags. Call once at the end of every loop iteration.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
        self.page_switched = false;
        self.dirty = false;
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================
