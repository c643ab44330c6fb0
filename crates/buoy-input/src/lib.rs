// Hover router: turns the host's raw pointer stream into menu-level events
// with hit-testing against the menu's element rects. A single pointer can
// hover one section at a time, so a move that changes target always emits
// the leave before the enter — the engine's exclusivity invariant falls out
// of the routing, not out of locking.

use buoy_core::{InputEvent, MenuEvent, Rect, SectionId, Vec2};

// ──────────────────────────────────────────────
// Hit map
// ──────────────────────────────────────────────

/// Clickable entry row inside an open submenu.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRect {
    pub section: SectionId,
    pub rect: Rect,
    pub href: String,
    /// Inactive entries hit-test but never navigate.
    pub active: bool,
}

/// Current on-screen rects of the menu's interactive elements, measured by
/// the host. Submenu and link rects are only listed for panels the engine
/// currently displays; hidden panels must not intercept the pointer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HitMap<'a> {
    pub tabs: &'a [(SectionId, Rect)],
    pub submenus: &'a [(SectionId, Rect)],
    pub links: &'a [LinkRect],
}

impl<'a> HitMap<'a> {
    /// The section under the pointer, submenus taking precedence over tabs
    /// (an open panel overlays its neighbors' tabs).
    fn section_at(&self, position: Vec2) -> Option<SectionId> {
        self.submenus
            .iter()
            .chain(self.tabs.iter())
            .find(|(_, rect)| rect.contains(position))
            .map(|(section, _)| *section)
    }

    fn link_at(&self, position: Vec2) -> Option<&LinkRect> {
        self.links.iter().find(|link| link.rect.contains(position))
    }
}

// ──────────────────────────────────────────────
// Router
// ──────────────────────────────────────────────

/// Tracks which section the pointer is over and emits enter/leave
/// transitions on change.
#[derive(Debug, Default)]
pub struct HoverRouter {
    hovered: Option<SectionId>,
}

impl HoverRouter {
    pub fn new() -> Self {
        Self { hovered: None }
    }

    /// The section currently under the pointer, if any.
    pub fn hovered(&self) -> Option<SectionId> {
        self.hovered
    }

    /// Process one input event against the current hit map and return the
    /// menu events to feed the engine, in order.
    pub fn process(&mut self, event: InputEvent, hits: HitMap<'_>) -> Vec<MenuEvent> {
        match event {
            InputEvent::MouseMove { position } => self.process_move(position, hits),
            InputEvent::MouseClick { position } => self.process_click(position, hits),
            InputEvent::MouseScroll { .. } => vec![MenuEvent::Scroll],
            InputEvent::Resize { size } => vec![MenuEvent::Resize { width: size.width }],
        }
    }

    fn process_move(&mut self, position: Vec2, hits: HitMap<'_>) -> Vec<MenuEvent> {
        let target = hits.section_at(position);
        if target == self.hovered {
            // Moving between a tab and its own open submenu stays within the
            // section; re-triggering the fade would only cause flicker.
            return Vec::new();
        }
        let mut events = Vec::new();
        if let Some(old) = self.hovered.take() {
            events.push(MenuEvent::Leave(old));
        }
        if let Some(new) = target {
            events.push(MenuEvent::Enter(new));
        }
        self.hovered = target;
        events
    }

    fn process_click(&mut self, position: Vec2, hits: HitMap<'_>) -> Vec<MenuEvent> {
        match hits.link_at(position) {
            Some(link) if link.active => vec![MenuEvent::Navigate {
                section: link.section,
                href: link.href.clone(),
            }],
            // Inactive rows swallow the click.
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use buoy_core::{InputEvent, MenuEvent, Rect, Size, Vec2};

    use super::*;

    const TABS: &[(usize, Rect)] = &[
        (0, Rect { x: 0.0, y: 0.0, width: 50.0, height: 50.0 }),
        (1, Rect { x: 0.0, y: 60.0, width: 50.0, height: 50.0 }),
    ];

    fn mv(x: f32, y: f32) -> InputEvent {
        InputEvent::MouseMove { position: Vec2::new(x, y) }
    }

    #[test]
    fn test_move_onto_tab_enters() {
        let mut router = HoverRouter::new();
        let events = router.process(mv(10.0, 10.0), HitMap { tabs: TABS, ..Default::default() });
        assert_eq!(events, vec![MenuEvent::Enter(0)]);
        assert_eq!(router.hovered(), Some(0));
    }

    #[test]
    fn test_move_within_section_is_silent() {
        let mut router = HoverRouter::new();
        router.process(mv(10.0, 10.0), HitMap { tabs: TABS, ..Default::default() });
        let events = router.process(mv(20.0, 20.0), HitMap { tabs: TABS, ..Default::default() });
        assert!(events.is_empty());
    }

    #[test]
    fn test_move_between_sections_leaves_then_enters() {
        let mut router = HoverRouter::new();
        router.process(mv(10.0, 10.0), HitMap { tabs: TABS, ..Default::default() });
        let events = router.process(mv(10.0, 70.0), HitMap { tabs: TABS, ..Default::default() });
        assert_eq!(events, vec![MenuEvent::Leave(0), MenuEvent::Enter(1)]);
    }

    #[test]
    fn test_move_off_menu_leaves() {
        let mut router = HoverRouter::new();
        router.process(mv(10.0, 10.0), HitMap { tabs: TABS, ..Default::default() });
        let events = router.process(mv(500.0, 500.0), HitMap { tabs: TABS, ..Default::default() });
        assert_eq!(events, vec![MenuEvent::Leave(0)]);
        assert_eq!(router.hovered(), None);
    }

    #[test]
    fn test_open_submenu_keeps_section_hovered() {
        // Pointer slides from the tab into the open panel: same section, no
        // leave/enter churn.
        let submenus = [(0usize, Rect::new(50.0, 0.0, 200.0, 300.0))];
        let mut router = HoverRouter::new();
        router.process(mv(10.0, 10.0), HitMap { tabs: TABS, ..Default::default() });
        let events = router.process(
            mv(100.0, 150.0),
            HitMap { tabs: TABS, submenus: &submenus, ..Default::default() },
        );
        assert!(events.is_empty());
        assert_eq!(router.hovered(), Some(0));
    }

    #[test]
    fn test_click_on_active_link_navigates() {
        let links = [LinkRect {
            section: 0,
            rect: Rect::new(50.0, 0.0, 200.0, 20.0),
            href: "Filter.html".into(),
            active: true,
        }];
        let mut router = HoverRouter::new();
        let events = router.process(
            InputEvent::MouseClick { position: Vec2::new(60.0, 10.0) },
            HitMap { tabs: TABS, links: &links, ..Default::default() },
        );
        assert_eq!(
            events,
            vec![MenuEvent::Navigate { section: 0, href: "Filter.html".into() }]
        );
    }

    #[test]
    fn test_click_on_inactive_link_is_swallowed() {
        let links = [LinkRect {
            section: 0,
            rect: Rect::new(50.0, 0.0, 200.0, 20.0),
            href: "Organ.html".into(),
            active: false,
        }];
        let mut router = HoverRouter::new();
        let events = router.process(
            InputEvent::MouseClick { position: Vec2::new(60.0, 10.0) },
            HitMap { tabs: TABS, links: &links, ..Default::default() },
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_end_to_end_single_pointer_exclusivity() {
        use std::time::Duration;

        use buoy_core::{MenuEntry, MenuModel, MenuSection, SectionId, ViewportGeometry};
        use buoy_layout::{MenuEngine, Phase};

        struct FixedGeometry;
        impl ViewportGeometry for FixedGeometry {
            fn scroll_y(&self) -> f32 {
                0.0
            }
            fn viewport_height(&self) -> f32 {
                800.0
            }
            fn submenu_height(&self, _section: SectionId) -> f32 {
                200.0
            }
            fn tab_top(&self, section: SectionId) -> f32 {
                section as f32 * 60.0
            }
        }

        let model = MenuModel::new(vec![
            MenuSection::new("Filters").entry(MenuEntry::new("Filter", "Filter.html")),
            MenuSection::new("Tools").entry(MenuEntry::new("Analyzer", "Analyzer.html")),
        ]);
        let mut engine = MenuEngine::new(&model, 120.0);
        let mut router = HoverRouter::new();
        let geom = FixedGeometry;

        // Sweep the pointer across both tabs, ticking between moves.
        let sweep = [mv(10.0, 10.0), mv(10.0, 40.0), mv(10.0, 70.0), mv(10.0, 90.0)];
        for event in sweep {
            for menu_event in router.process(event, HitMap { tabs: TABS, ..Default::default() }) {
                engine.handle(&menu_event, &geom);
            }
            engine.tick(Duration::from_millis(50));
            let on_screen = engine
                .states()
                .iter()
                .filter(|s| matches!(s.phase, Phase::Showing | Phase::Visible))
                .count();
            assert!(on_screen <= 1);
        }
    }

    #[test]
    fn test_scroll_and_resize_forwarded() {
        let mut router = HoverRouter::new();
        assert_eq!(
            router.process(InputEvent::MouseScroll { delta: -3.0 }, HitMap::default()),
            vec![MenuEvent::Scroll]
        );
        assert_eq!(
            router.process(
                InputEvent::Resize { size: Size::new(1200.0, 800.0) },
                HitMap::default()
            ),
            vec![MenuEvent::Resize { width: 1200.0 }]
        );
    }
}
