use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use qpon_pattern::rendering::{self, TextStyle};
use qpon_pattern::PatternConfig;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Block characters, one line per row
    Text,
    /// JSON module geometry (one rect per filled module)
    Rects,
    /// JSON boolean grid
    Grid,
    /// SHA-256 of the rasterized image
    Digest,
}

/// Render a coupon code as a scan-style module grid
#[derive(Debug, Parser)]
#[command(name = "qpon-pattern", version, about)]
struct Cli {
    /// Coupon / redemption code
    code: String,

    /// Target size in pixels
    #[arg(short, long)]
    size: Option<u32>,

    /// Modules per side (odd, >= 21)
    #[arg(short, long)]
    modules: Option<usize>,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// JSON config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Blank modules around text output
    #[arg(long)]
    quiet_zone: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "qpon_pattern=debug"
    } else {
        "qpon_pattern=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<PatternConfig> {
    let mut cfg = match &cli.config {
        Some(path) => PatternConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PatternConfig::default(),
    };
    if let Some(size) = cli.size {
        cfg.size = size;
    }
    if let Some(modules) = cli.modules {
        cfg.module_count = modules;
    }
    if let Some(q) = cli.quiet_zone {
        cfg.quiet_zone = q;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = load_config(&cli)?;
    let grid = cfg.synthesizer()?.synthesize(&cli.code);
    log::debug!(
        "code {:?}: {} of {} modules filled",
        cli.code,
        grid.dark_count(),
        grid.module_count() * grid.module_count()
    );

    match cli.format {
        Format::Text => {
            let style = TextStyle {
                quiet_zone: cfg.quiet_zone,
                ..Default::default()
            };
            print!("{}", rendering::render_text(&grid, &style));
        }
        Format::Rects => {
            let layout = rendering::layout_modules(&grid, cfg.size);
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
        Format::Grid => println!("{}", serde_json::to_string(&grid)?),
        Format::Digest => {
            let shot = rendering::render_pattern(&cli.code, &cfg)?;
            println!("{}", shot.digest());
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    if let Err(e) = run(cli) {
        eprintln!("qpon-pattern: {:#}", e);
        std::process::exit(1);
    }
}
