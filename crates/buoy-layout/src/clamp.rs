// Viewport clamp arithmetic. Pure functions, no document access — all
// measurements come in as plain scalars so the math is testable with
// synthetic geometry.

/// `min(hi, max(lo, v))`. With degenerate inputs (lo > hi, e.g. a zero-height
/// viewport) the result degrades toward `hi` rather than panicking; callers
/// pass `hi = 0` so a misread geometry yields an offset of 0.
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.max(lo).min(hi)
}

/// Vertical offset of the menu bar so it never scrolls fully off-screen:
/// the bar tracks the scroll position upward but stops once its bottom edge
/// would leave the viewport.
pub fn bar_offset(scroll: f32, viewport_height: f32, bar_height: f32) -> f32 {
    clamp(-scroll, viewport_height - bar_height, 0.0)
}

/// Top offset for a submenu panel: 5px below its trigger tab, pulled up so
/// the panel never overflows the viewport bottom (accounting for the bar's
/// own scroll-compensated offset), and floored at the viewport top.
pub fn submenu_top(tab_top: f32, submenu_height: f32, viewport_height: f32, bar_offset: f32) -> f32 {
    const TRIGGER_GAP: f32 = 5.0;
    (tab_top + TRIGGER_GAP)
        .min(viewport_height - submenu_height - bar_offset)
        .max(0.0)
}
