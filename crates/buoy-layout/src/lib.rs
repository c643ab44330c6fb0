// Submenu positioning and visibility engine.
// Decides which submenu is visible, where it sits on screen, and how it
// transitions between hidden and visible as the pointer, scroll position,
// and viewport change.

mod clamp;
mod fade;
mod scale;

use std::time::Duration;

use buoy_core::{MenuEvent, MenuModel, SectionId, ViewportGeometry};

use fade::Fade;

pub use clamp::{bar_offset, clamp, submenu_top};
pub use scale::{text_scale, TextScale};

/// Duration of the opacity tween for both show and hide.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

// ──────────────────────────────────────────────
// Submenu state
// ──────────────────────────────────────────────

/// Lifecycle of one submenu. A new trigger always preempts: there is no
/// queue, and a fade in flight is revoked before its successor starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Showing,
    Visible,
    Hiding,
}

/// Ephemeral per-submenu state. Reconstructed from viewport measurements on
/// every show; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmenuState {
    pub phase: Phase,
    pub opacity: f32,
    pub top: f32,
}

impl SubmenuState {
    fn hidden() -> Self {
        Self {
            phase: Phase::Hidden,
            opacity: 0.0,
            top: 0.0,
        }
    }

    /// True while the panel participates in layout and intercepts pointer
    /// events. A fully hidden panel is removed from flow.
    pub fn displayed(&self) -> bool {
        self.phase != Phase::Hidden
    }
}

// ──────────────────────────────────────────────
// MenuEngine
// ──────────────────────────────────────────────

/// The positioning/visibility engine. One state slot and at most one
/// in-flight fade per section; the bar's own scroll-compensated offset is
/// shared by every submenu's clamp.
pub struct MenuEngine {
    states: Vec<SubmenuState>,
    fades: Vec<Option<Fade>>,
    bar_height: f32,
    bar_offset: f32,
    last_width: Option<f32>,
    scale: Option<TextScale>,
}

impl MenuEngine {
    pub fn new(model: &MenuModel, bar_height: f32) -> Self {
        let n = model.sections.len();
        Self {
            states: vec![SubmenuState::hidden(); n],
            fades: vec![None; n],
            bar_height,
            bar_offset: 0.0,
            last_width: None,
            scale: None,
        }
    }

    pub fn state(&self, section: SectionId) -> Option<&SubmenuState> {
        self.states.get(section)
    }

    pub fn states(&self) -> &[SubmenuState] {
        &self.states
    }

    /// The menu bar's current vertical offset (recomputed on scroll).
    pub fn bar_offset(&self) -> f32 {
        self.bar_offset
    }

    /// Text scale from the most recent resize, if any.
    pub fn scale(&self) -> Option<TextScale> {
        self.scale
    }

    /// Dispatch a menu-level event. Granular methods below are also public
    /// for hosts that wire events directly.
    pub fn handle(&mut self, event: &MenuEvent, geom: &dyn ViewportGeometry) {
        match event {
            MenuEvent::Enter(section) => self.pointer_enter(*section, geom),
            MenuEvent::Leave(section) => self.pointer_leave(*section),
            MenuEvent::Navigate { section, .. } => self.click(*section),
            MenuEvent::Scroll => self.scroll(geom),
            MenuEvent::Resize { width } => self.resize(*width),
        }
    }

    /// Pointer entered a section's tab or its open submenu. Cancels any
    /// in-flight fade on that submenu, recomputes its clamped position from
    /// current geometry, and fades in from the current opacity.
    pub fn pointer_enter(&mut self, section: SectionId, geom: &dyn ViewportGeometry) {
        self.bar_offset = clamp::bar_offset(geom.scroll_y(), geom.viewport_height(), self.bar_height);
        let bar_off = self.bar_offset;
        let state = match self.states.get_mut(section) {
            Some(s) => s,
            None => return,
        };
        state.top = clamp::submenu_top(
            geom.tab_top(section),
            geom.submenu_height(section),
            geom.viewport_height(),
            bar_off,
        );
        state.phase = Phase::Showing;
        self.fades[section] = Some(Fade::new(state.opacity, 1.0, FADE_DURATION));
    }

    /// Pointer left both the tab and the submenu region. Fades out from the
    /// current opacity; a no-op when already fully hidden.
    pub fn pointer_leave(&mut self, section: SectionId) {
        self.start_hide(section);
    }

    /// A navigation click inside the submenu. Hides it so the panel does not
    /// linger over the page while the host navigates.
    pub fn click(&mut self, section: SectionId) {
        self.start_hide(section);
    }

    fn start_hide(&mut self, section: SectionId) {
        let state = match self.states.get_mut(section) {
            Some(s) => s,
            None => return,
        };
        if state.phase == Phase::Hidden {
            return;
        }
        state.phase = Phase::Hiding;
        self.fades[section] = Some(Fade::new(state.opacity, 0.0, FADE_DURATION));
    }

    /// Advance all in-flight fades. Completion moves SHOWING to VISIBLE and
    /// HIDING to HIDDEN (at which point the panel leaves layout entirely).
    pub fn tick(&mut self, dt: Duration) {
        for (state, slot) in self.states.iter_mut().zip(self.fades.iter_mut()) {
            let fade = match slot.as_mut() {
                Some(f) => f,
                None => continue,
            };
            fade.advance(dt);
            state.opacity = fade.value();
            if fade.finished() {
                state.phase = match state.phase {
                    Phase::Showing => Phase::Visible,
                    Phase::Hiding => Phase::Hidden,
                    other => other,
                };
                *slot = None;
            }
        }
    }

    /// The page scrolled: recompute the bar offset and re-clamp every
    /// submenu that is currently on screen. Geometry may have changed since
    /// the panels were shown.
    pub fn scroll(&mut self, geom: &dyn ViewportGeometry) {
        self.bar_offset = clamp::bar_offset(geom.scroll_y(), geom.viewport_height(), self.bar_height);
        let bar_off = self.bar_offset;
        for (section, state) in self.states.iter_mut().enumerate() {
            if matches!(state.phase, Phase::Showing | Phase::Visible) {
                state.top = clamp::submenu_top(
                    geom.tab_top(section),
                    geom.submenu_height(section),
                    geom.viewport_height(),
                    bar_off,
                );
            }
        }
    }

    /// The viewport was resized: recompute the responsive text scale.
    /// Skipped when the width did not actually change.
    pub fn resize(&mut self, width: f32) {
        if self.last_width == Some(width) {
            return;
        }
        self.last_width = Some(width);
        self.scale = Some(scale::text_scale(width));
    }
}
