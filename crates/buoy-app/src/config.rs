// Menu configuration: JSON on disk, the stock manual menu as fallback.

use std::path::Path;

use anyhow::{Context, Result};
use buoy_core::{MenuEntry, MenuModel, MenuSection};

/// Load a menu config from an explicit path. Unlike optional lookup paths,
/// a path the user named must exist and parse.
pub fn load_model(path: &Path) -> Result<MenuModel> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading menu config {}", path.display()))?;
    let model: MenuModel =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(model)
}

fn section(title: &str, icon: &str, entries: &[(&str, &str)]) -> MenuSection {
    let mut s = MenuSection::new(title).with_icon(format!("icons/{icon}"));
    for (label, page) in entries {
        let plain = label.trim_matches(|c| c == '(' || c == ')');
        s = s.entry(
            MenuEntry::new(*label, format!("{page}.html"))
                .with_icon(format!("images/Calf - {plain}.png")),
        );
    }
    s
}

/// The stock Calf manual menu, used when no config file is given.
pub fn stock_manual() -> MenuModel {
    MenuModel::new(vec![
        MenuSection::new("Index")
            .with_icon("icons/index.png")
            .entry(MenuEntry::new("Index", "index.html").with_icon("images/Index.png"))
            .entry(MenuEntry::new("About", "About.html").with_icon("images/About.png"))
            .entry(MenuEntry::new("Controls", "Controls.html").with_icon("images/Calf - Controls.png"))
            .entry(MenuEntry::new("Calf Rack", "Calf.html").with_icon("images/Calf.png")),
        section(
            "Synthesizer",
            "synthesizer.png",
            &[("(Organ)", "Organ"), ("(Monosynth)", "Monosynth")],
        ),
        section(
            "Modulation",
            "modulation.png",
            &[
                ("(Multi Chorus)", "Multi Chorus"),
                ("(Phaser)", "Phaser"),
                ("(Flanger)", "Flanger"),
                ("(Rotary Speaker)", "Rotary Speaker"),
                ("Pulsator", "Pulsator"),
            ],
        ),
        section(
            "Delay",
            "delay.png",
            &[
                ("(Reverb)", "Reverb"),
                ("(Vintage Delay)", "Vintage Delay"),
                ("Compensation Delay Line", "Compensation Delay Line"),
            ],
        ),
        section(
            "Dynamics",
            "dynamics.png",
            &[
                ("Compressor", "Compressor"),
                ("Sidechain Compressor", "Sidechain Compressor"),
                ("Multiband Compressor", "Multiband Compressor"),
                ("Mono Compressor", "Mono Compressor"),
                ("Deesser", "Deesser"),
                ("Gate", "Gate"),
                ("Sidechain Gate", "Sidechain Gate"),
                ("Multiband Gate", "Multiband Gate"),
                ("Limiter", "Limiter"),
                ("Multiband Limiter", "Multiband Limiter"),
                ("Transient Designer", "Transient Designer"),
            ],
        ),
        section(
            "Filters",
            "filters.png",
            &[
                ("Filter", "Filter"),
                ("(Filterclavier)", "Filterclavier"),
                ("Equalizer 5 Band", "Equalizer 5 Band"),
                ("Equalizer 8 Band", "Equalizer 8 Band"),
                ("Equalizer 12 Band", "Equalizer 12 Band"),
                ("(X-Over 2 Band)", "X-Over 2 Band"),
                ("(X-Over 3 Band)", "X-Over 3 Band"),
                ("(X-Over 4 Band)", "X-Over 4 Band"),
            ],
        ),
        section(
            "Distortion",
            "distortion.png",
            &[
                ("(Saturator)", "Saturator"),
                ("Exciter", "Exciter"),
                ("Bass Enhancer", "Bass Enhancer"),
                ("Tape Simulator", "Tape Simulator"),
            ],
        ),
        section(
            "Tools",
            "tools.png",
            &[
                ("Mono Input", "Mono Input"),
                ("Stereo Tools", "Stereo Tools"),
                ("Analyzer", "Analyzer"),
            ],
        ),
    ])
}
