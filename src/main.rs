use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use expenses_mockup::{MockupConfig, DEFAULT_OUTPUT_PATH};

/// Render the expenses app UI mockup to a PNG file
#[derive(Debug, Parser)]
#[command(name = "expenses-mockup", version, about)]
struct Args {
    /// Where to write the PNG
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// TrueType font for regular text
    #[arg(long)]
    regular_font: Option<PathBuf>,

    /// TrueType font for bold text
    #[arg(long)]
    bold_font: Option<PathBuf>,

    /// Also write the display list as JSON to this path
    #[arg(long)]
    dump_layout: Option<PathBuf>,
}

/// Log records go to stderr so stdout only carries the completion line.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let defaults = MockupConfig::default();
    let config = MockupConfig {
        output_path: args.output,
        regular_font: args.regular_font.unwrap_or(defaults.regular_font),
        bold_font: args.bold_font.unwrap_or(defaults.bold_font),
        ..defaults
    };

    let rendered = expenses_mockup::render_mockup(&config).context("failed to render mockup")?;

    let summary = rendered
        .write(&config.output_path)
        .with_context(|| format!("failed to write {}", config.output_path.display()))?;

    // Only dump the layout of an image that actually made it to disk
    if let Some(path) = &args.dump_layout {
        let json = rendered.scene.to_json_pretty()?;
        std::fs::write(path, json).with_context(|| format!("failed to write layout dump to {}", path.display()))?;
        log::info!("layout written to {}", path.display());
    }

    println!("{}", summary.completion_message());
    Ok(())
}
