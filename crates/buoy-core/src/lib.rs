use serde::{Deserialize, Serialize};

// ──────────────────────────────────────────────
// Geometry
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ──────────────────────────────────────────────
// Identity
// ──────────────────────────────────────────────

/// Index of a section in the menu model. Sections keep their insertion
/// order, which is also the left-to-right tab order.
pub type SectionId = usize;

// ──────────────────────────────────────────────
// Menu model
// ──────────────────────────────────────────────

/// One item in a section flyout: link label, target page, optional
/// thumbnail used by the full index listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// An entry whose page does not exist yet. Marked by convention with a
    /// leading parenthesis in the label; renders as a dead, non-navigating
    /// anchor.
    pub fn is_inactive(&self) -> bool {
        self.label.starts_with('(')
    }
}

/// A titled group of entries with an optional tab icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub entries: Vec<MenuEntry>,
}

impl MenuSection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            entries: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn entry(mut self, entry: MenuEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// HTML-safe identifier derived from the title ("Calf Rack" → "Calf_Rack").
    pub fn slug(&self) -> String {
        self.title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect()
    }
}

/// The whole navigation tree. Immutable after load; only the engine's
/// per-submenu state mutates at runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuModel {
    pub sections: Vec<MenuSection>,
}

impl MenuModel {
    pub fn new(sections: Vec<MenuSection>) -> Self {
        Self { sections }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

// ──────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────

/// Raw pointer/window events as delivered by the host page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    MouseMove { position: Vec2 },
    MouseClick { position: Vec2 },
    MouseScroll { delta: f32 },
    Resize { size: Size },
}

/// Menu-level events produced by the hover router and consumed by the
/// positioning engine.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEvent {
    /// Pointer entered a section's tab or its open submenu.
    Enter(SectionId),
    /// Pointer left a section's tab and submenu.
    Leave(SectionId),
    /// An active entry link was clicked. Hides the owning submenu; actual
    /// page navigation is the host's concern.
    Navigate { section: SectionId, href: String },
    /// The page scrolled; bar and open submenus need repositioning.
    Scroll,
    /// The viewport was resized to the given width.
    Resize { width: f32 },
}

// ──────────────────────────────────────────────
// Trait: ViewportGeometry
// ──────────────────────────────────────────────

/// Viewport measurements the positioning engine needs. Abstracting these
/// behind a trait keeps the clamp arithmetic testable with synthetic
/// geometry instead of a live document.
pub trait ViewportGeometry {
    /// Current vertical scroll offset of the page.
    fn scroll_y(&self) -> f32;
    /// Height of the visible viewport.
    fn viewport_height(&self) -> f32;
    /// Rendered height of a section's submenu panel.
    fn submenu_height(&self, section: SectionId) -> f32;
    /// Top offset of a section's trigger tab.
    fn tab_top(&self, section: SectionId) -> f32;
}
