// Menu rendering: MenuModel in, markup tree out.
// Produces the menu bar with one tab and one (initially hidden) submenu per
// section, and the flattened thumbnail index for pages that carry the index
// placeholder. Pure functions of the model; positioning and visibility are
// the layout engine's job.

mod node;

use buoy_core::{MenuModel, MenuSection};

pub use node::{Element, Node};

/// Flyout arrow image shown in every submenu header row.
const ARROW_SRC: &str = "images/marrow.png";

// ──────────────────────────────────────────────
// Menu bar + submenus
// ──────────────────────────────────────────────

/// Render the menu bar: per section an interactive tab (icon image when the
/// section declares one), a title span, and a submenu panel hidden until the
/// engine shows it.
pub fn render_menu(model: &MenuModel) -> Node {
    let mut menu = Element::new("div").class("menu");
    for section in &model.sections {
        menu = menu
            .child(render_submenu(section))
            .child(render_tab(section))
            .child(Element::new("span").text(section.title.clone()));
    }
    menu.into()
}

fn render_tab(section: &MenuSection) -> Element {
    match &section.icon {
        Some(icon) => Element::new("img")
            .class("micon")
            .attr("id", section.slug())
            .attr("src", icon.clone())
            .attr("alt", section.title.clone()),
        None => Element::new("span")
            .class("micon")
            .attr("id", section.slug())
            .text(section.title.clone()),
    }
}

fn render_submenu(section: &MenuSection) -> Element {
    let mut submenu = Element::new("ul")
        .class("submenu")
        .attr("id", format!("menu_{}", section.slug()))
        .attr("style", "display:none;opacity:0")
        .child(
            Element::new("li")
                .child(Element::new("img").class("marrow").attr("src", ARROW_SRC))
                .child(Element::new("h3").text(section.title.clone())),
        );
    for entry in &section.entries {
        let anchor = if entry.is_inactive() {
            // Dead page: keep the label visible but never emit a navigable
            // href, wherever the entry appears.
            Element::new("a")
                .class("inactive")
                .attr("title", entry.label.clone())
                .text(entry.label.clone())
        } else {
            Element::new("a")
                .attr("href", entry.href.clone())
                .attr("title", entry.label.clone())
                .text(entry.label.clone())
        };
        submenu = submenu.child(Element::new("li").child(anchor));
    }
    submenu
}

// ──────────────────────────────────────────────
// Full index
// ──────────────────────────────────────────────

/// Render the flattened index listing: per section a heading and a list row
/// for every entry that declares a thumbnail. Inclusion is keyed on icon
/// presence only; inactive entries still get a row and a thumbnail, just no
/// href.
pub fn render_index(model: &MenuModel) -> Vec<Node> {
    let mut nodes = Vec::new();
    for section in &model.sections {
        let mut heading = Element::new("h3");
        if let Some(icon) = &section.icon {
            heading = heading.child(Element::new("img").class("iicon").attr("src", icon.clone()));
        }
        nodes.push(heading.text(section.title.clone()).into());

        let mut list = Element::new("ul");
        for entry in &section.entries {
            let icon = match &entry.icon {
                Some(icon) => icon,
                None => continue,
            };
            let mut anchor = Element::new("a");
            if !entry.is_inactive() {
                anchor = anchor.attr("href", entry.href.clone());
            }
            anchor = anchor
                .child(
                    Element::new("img")
                        .attr("src", icon.clone())
                        .attr("alt", entry.label.clone()),
                )
                .child(Element::new("span").text(entry.label.clone()));
            list = list.child(Element::new("li").child(anchor));
        }
        nodes.push(list.into());
    }
    nodes
}

/// Serialize a rendered fragment to HTML text.
pub fn to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write_html(&mut out);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use buoy_core::{MenuEntry, MenuModel, MenuSection};

    use super::*;

    fn filters_model() -> MenuModel {
        MenuModel::new(vec![MenuSection::new("Filters")
            .with_icon("icons/filters.png")
            .entry(MenuEntry::new("Filter", "Filter.html").with_icon("icon.png"))
            .entry(MenuEntry::new("(Filterclavier)", "Filterclavier.html").with_icon("icon2.png"))])
    }

    #[test]
    fn test_menu_has_one_tab_and_one_submenu_per_section() {
        let html = render_menu(&filters_model()).to_html();
        assert_eq!(html.matches("class=\"micon\"").count(), 1);
        assert_eq!(html.matches("class=\"submenu\"").count(), 1);
        assert!(html.contains("id=\"menu_Filters\""));
    }

    #[test]
    fn test_submenu_starts_hidden() {
        let html = render_menu(&filters_model()).to_html();
        assert!(html.contains("style=\"display:none;opacity:0\""));
    }

    #[test]
    fn test_submenu_header_then_entry_rows() {
        let html = render_menu(&filters_model()).to_html();
        // Header row plus two entry rows.
        assert_eq!(html.matches("<li>").count(), 3);
        assert!(html.contains("<h3>Filters</h3>"));
        assert!(html.contains("class=\"marrow\""));
    }

    #[test]
    fn test_active_entry_links() {
        let html = render_menu(&filters_model()).to_html();
        assert!(html.contains("<a href=\"Filter.html\" title=\"Filter\">Filter</a>"));
    }

    #[test]
    fn test_inactive_entry_never_navigates() {
        let menu = render_menu(&filters_model()).to_html();
        let index = to_html(&render_index(&filters_model()));
        assert!(menu.contains("class=\"inactive\""));
        assert!(!menu.contains("href=\"Filterclavier.html\""));
        assert!(!index.contains("href=\"Filterclavier.html\""));
    }

    #[test]
    fn test_index_rows_keyed_on_icon_presence() {
        let index = to_html(&render_index(&filters_model()));
        // Both entries declare a thumbnail, so both get a row — the inactive
        // one included, just without an href.
        assert_eq!(index.matches("<li>").count(), 2);
        assert!(index.contains("src=\"icon.png\""));
        assert!(index.contains("src=\"icon2.png\""));
    }

    #[test]
    fn test_index_skips_entries_without_icon() {
        let model = MenuModel::new(vec![MenuSection::new("Tools")
            .entry(MenuEntry::new("Analyzer", "Analyzer.html"))]);
        let index = to_html(&render_index(&model));
        assert!(!index.contains("<li>"));
    }

    #[test]
    fn test_tab_without_icon_falls_back_to_span() {
        let model = MenuModel::new(vec![MenuSection::new("Tools")]);
        let html = render_menu(&model).to_html();
        assert!(html.contains("<span class=\"micon\" id=\"Tools\">Tools</span>"));
    }

    #[test]
    fn test_empty_section_renders_header_only() {
        let model = MenuModel::new(vec![MenuSection::new("Delay").with_icon("icons/delay.png")]);
        let html = render_menu(&model).to_html();
        assert_eq!(html.matches("<li>").count(), 1);
    }

    #[test]
    fn test_labels_are_escaped() {
        let model = MenuModel::new(vec![MenuSection::new("Tools")
            .entry(MenuEntry::new("Cut & Boost <EQ>", "eq.html"))]);
        let html = render_menu(&model).to_html();
        assert!(html.contains("Cut &amp; Boost &lt;EQ&gt;"));
        assert!(html.contains("title=\"Cut &amp; Boost &lt;EQ&gt;\""));
    }
}
