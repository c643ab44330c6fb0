// Page injection: write the rendered menu (and index listing, where the
// page carries the placeholder) into a directory of static manual pages.

use std::path::Path;

use anyhow::{Context, Result};
use buoy_core::MenuModel;
use buoy_render::{render_index, render_menu, to_html};

/// Recognized index placeholder. A page without one simply gets no index
/// listing; that is a valid variant, not an error.
const INDEX_MARKER: &str = "id=\"index\"";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Pages that received the menu bar.
    pub built: usize,
    /// Pages whose index placeholder was filled.
    pub indexed: usize,
    /// Pages left untouched (no body tag, or menu already present).
    pub skipped: usize,
}

/// Inject navigation into every `.html` page in `dir`.
pub fn build_pages(dir: &Path, model: &MenuModel) -> Result<BuildSummary> {
    let mut summary = BuildSummary::default();
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("reading pages directory {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("html") {
            continue;
        }
        let html = match std::fs::read_to_string(&path) {
            Ok(html) => html,
            Err(e) => {
                log::warn!("skipping unreadable page {}: {}", path.display(), e);
                summary.skipped += 1;
                continue;
            }
        };
        match inject_page(&html, model) {
            Some(updated) => {
                let indexed = html.contains(INDEX_MARKER);
                std::fs::write(&path, &updated)
                    .with_context(|| format!("writing {}", path.display()))?;
                summary.built += 1;
                if indexed {
                    summary.indexed += 1;
                }
                log::info!("built nav into {}", path.display());
            }
            None => {
                log::debug!("skipped {}", path.display());
                summary.skipped += 1;
            }
        }
    }
    Ok(summary)
}

/// Insert the menu bar right after the opening body tag, and the index
/// listing after the index placeholder when the page has one. Returns None
/// when the page has no body tag or already contains a menu.
pub fn inject_page(html: &str, model: &MenuModel) -> Option<String> {
    if html.contains("class=\"menu\"") {
        return None;
    }
    let body_open = html.find("<body")?;
    let body_close = body_open + html[body_open..].find('>')? + 1;

    let mut out = String::with_capacity(html.len() * 2);
    out.push_str(&html[..body_close]);
    out.push('\n');
    out.push_str(&render_menu(model).to_html());
    out.push_str(&html[body_close..]);

    Some(inject_index(&out, model))
}

fn inject_index(html: &str, model: &MenuModel) -> String {
    let at = match html.find(INDEX_MARKER).and_then(|pos| {
        html[pos..].find('>').map(|close| pos + close + 1)
    }) {
        Some(at) => at,
        None => return html.to_string(),
    };
    let mut out = String::with_capacity(html.len() * 2);
    out.push_str(&html[..at]);
    out.push('\n');
    out.push_str(&to_html(&render_index(model)));
    out.push_str(&html[at..]);
    out
}
