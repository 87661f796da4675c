use anyhow::{Context, Result};
use clap::Parser;
use reasoning_timeline::config::{Config, RuntimeConfig};
use reasoning_timeline::{TimelineView, parse_steps, render_text, tally};
use serde_json::json;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render model-generated trading rationale as a classified timeline
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file ("-" or omitted reads stdin)
    input: Option<PathBuf>,

    /// Print steps and tally as JSON instead of a timeline
    #[arg(long)]
    json: bool,

    /// Show every step in full
    #[arg(long)]
    expand_all: bool,

    /// Steps shown before collapsing (overrides config)
    #[arg(long)]
    initial_visible: Option<usize>,

    /// Truncate step bodies beyond this many characters (overrides config)
    #[arg(long)]
    truncate: Option<usize>,

    /// Do not mark up indicators and numeric signals
    #[arg(long)]
    no_highlight: bool,

    /// Config file path (overrides REASONING_TIMELINE_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    reasoning_timeline::load_env();
    let args = Args::parse();

    let runtime = RuntimeConfig::load_from_env();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&runtime.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load_from(args.config.as_deref())?;
    if let Some(n) = args.initial_visible {
        config.presenter.initial_visible_steps = n;
    }
    if let Some(n) = args.truncate {
        config.presenter.truncate_chars = n;
    }
    if args.no_highlight {
        config.presenter.highlight = false;
    }
    config.presenter.validate()?;

    let text = read_input(args.input.as_ref())?;
    let steps = parse_steps(&text);
    let counts = tally(&steps);
    info!(
        steps = counts.total,
        bullish = counts.bullish,
        bearish = counts.bearish,
        warning = counts.warning,
        conclusion = counts.conclusion,
        "classified reasoning"
    );

    if args.json {
        let out = json!({ "steps": steps, "tally": counts });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let mut view = TimelineView::new(steps, &config.presenter);
    if args.expand_all {
        view.expand_all();
    }
    print!("{}", render_text(&view, config.presenter.highlight));

    Ok(())
}
