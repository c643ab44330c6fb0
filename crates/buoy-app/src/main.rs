// buoy — builds the navigation menu into a static manual's pages and
// exposes the positioning math for stylesheet debugging.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod config;
mod pages;

#[derive(Parser, Debug)]
#[command(name = "buoy", version, about = "Navigation menu builder for static manual pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Inject the menu bar (and index listing where present) into pages
    Build(BuildArgs),
    /// Validate a menu config and summarize its contents
    Check(CheckArgs),
    /// Evaluate the clamp and text-scale math for a given geometry
    Layout(LayoutArgs),
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Directory containing the manual's .html pages
    #[arg(long, default_value = ".")]
    pages: PathBuf,

    /// Menu config JSON; the stock manual menu is used when omitted
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Menu config JSON to validate
    config: PathBuf,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Vertical scroll offset of the page
    #[arg(long, default_value_t = 0.0)]
    scroll: f32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 800.0)]
    viewport: f32,

    /// Rendered height of the menu bar
    #[arg(long, default_value_t = 50.0)]
    bar_height: f32,

    /// Top offset of the trigger tab
    #[arg(long, default_value_t = 0.0)]
    tab_top: f32,

    /// Rendered height of the submenu panel
    #[arg(long, default_value_t = 0.0)]
    submenu_height: f32,

    /// Wrapper width; prints the responsive text scale when given
    #[arg(long)]
    width: Option<f32>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Build(args) => build(args),
        Commands::Check(args) => check(args),
        Commands::Layout(args) => layout(args),
    }
}

fn build(args: BuildArgs) -> Result<()> {
    let model = match args.config {
        Some(path) => config::load_model(&path)?,
        None => config::stock_manual(),
    };
    let summary = pages::build_pages(&args.pages, &model)?;
    println!(
        "built {} page(s), filled {} index listing(s), skipped {}",
        summary.built, summary.indexed, summary.skipped
    );
    Ok(())
}

fn check(args: CheckArgs) -> Result<()> {
    let model = config::load_model(&args.config)?;
    let entries: usize = model.sections.iter().map(|s| s.entries.len()).sum();
    println!("{} section(s), {} entries", model.sections.len(), entries);
    for section in &model.sections {
        let inactive: Vec<&str> = section
            .entries
            .iter()
            .filter(|e| e.is_inactive())
            .map(|e| e.label.as_str())
            .collect();
        if inactive.is_empty() {
            println!("  {}: {} entries", section.title, section.entries.len());
        } else {
            println!(
                "  {}: {} entries, inactive: {}",
                section.title,
                section.entries.len(),
                inactive.join(", ")
            );
        }
    }
    Ok(())
}

fn layout(args: LayoutArgs) -> Result<()> {
    let bar = buoy_layout::bar_offset(args.scroll, args.viewport, args.bar_height);
    let top = buoy_layout::submenu_top(args.tab_top, args.submenu_height, args.viewport, bar);
    println!("bar_offset:  {bar}");
    println!("submenu_top: {top}");
    if let Some(width) = args.width {
        let scale = buoy_layout::text_scale(width);
        println!(
            "text scale:  {:.4}em / {:.4}em line height",
            scale.font_size_em, scale.line_height_em
        );
    }
    Ok(())
}
