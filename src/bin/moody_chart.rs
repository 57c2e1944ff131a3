use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use moody_chart::chart::{ColorMode, Locale, MoodyComposer, MoodyConfig};
use moody_chart::output::{plot_moody_chart, RenderConfig};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Draw the Moody chart (Colebrook-White friction factor)", long_about = None)]
struct Cli {
    /// Output file name without extension
    #[arg(short, long, default_value = "moody_chart", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Output format, repeat for several files
    #[arg(short, long = "format", value_enum, action = ArgAction::Append)]
    formats: Vec<OutputFormat>,

    /// JSON configuration file
    #[arg(long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Label language (en|es)
    #[arg(long)]
    lang: Option<String>,

    /// Line colors (mono|color|octave)
    #[arg(long)]
    color: Option<String>,

    /// Figure width in inches
    #[arg(long)]
    width_in: Option<f64>,

    /// Figure height in inches
    #[arg(long)]
    height_in: Option<f64>,

    /// Lower Reynolds limit of the plot
    #[arg(long)]
    re_min: Option<f64>,

    /// Upper Reynolds limit of the plot
    #[arg(long)]
    re_max: Option<f64>,

    /// Lower friction factor limit of the plot
    #[arg(long)]
    f_min: Option<f64>,

    /// Upper friction factor limit of the plot
    #[arg(long)]
    f_max: Option<f64>,

    /// Number of log-spaced Reynolds samples
    #[arg(long)]
    samples: Option<usize>,

    /// Bitmap resolution in pixels per inch
    #[arg(long, default_value_t = 100.0)]
    dpi: f64,

    /// Debug output (roughness label positions, solver summaries)
    #[arg(long, action = ArgAction::SetTrue)]
    debug: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(&config)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    run(&cli, config)
}

/// `debug` from the flag or the configuration file turns on debug output
fn default_log_level(config: &MoodyConfig) -> &'static str {
    if config.debug { "debug" } else { "info" }
}

fn run(cli: &Cli, config: MoodyConfig) -> Result<()> {
    let render = RenderConfig::default().with_dpi(cli.dpi);
    render
        .validate()
        .map_err(anyhow::Error::msg)
        .context("invalid render options")?;

    let composer = MoodyComposer::new(config);
    debug!(solver = composer.solver_name(), "composing chart");
    let chart = composer.compose().context("failed to compose the Moody chart")?;

    info!("{}", chart.summary());
    let skipped = chart.skipped_roughness();
    if !skipped.is_empty() {
        warn!(?skipped, "relative roughness values without a curve");
    }

    let formats = if cli.formats.is_empty() {
        vec![OutputFormat::Svg]
    } else {
        cli.formats.clone()
    };
    for format in formats {
        let path = cli.output.with_extension(format.extension());
        let Some(path_str) = path.to_str() else {
            bail!("output path {} is not valid UTF-8", path.display());
        };
        plot_moody_chart(&chart, path_str, Some(&render))
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote chart");
    }

    Ok(())
}

/// Defaults, then the JSON file, then command-line overrides
fn load_config(cli: &Cli) -> Result<MoodyConfig> {
    let mut config = match &cli.config {
        Some(path) => MoodyConfig::from_json_file(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => MoodyConfig::default(),
    };

    if let Some(lang) = &cli.lang {
        config.lang = Locale::from(lang.as_str());
    }
    if let Some(color) = &cli.color {
        config.color = ColorMode::from(color.as_str());
    }
    if let Some(width) = cli.width_in {
        config.figure_width_in = width;
    }
    if let Some(height) = cli.height_in {
        config.figure_height_in = height;
    }
    if let Some(re_min) = cli.re_min {
        config.re_plot_min = re_min;
    }
    if let Some(re_max) = cli.re_max {
        config.re_plot_max = re_max;
    }
    if let Some(f_min) = cli.f_min {
        config.f_plot_min = f_min;
    }
    if let Some(f_max) = cli.f_max {
        config.f_plot_max = f_max;
    }
    if let Some(samples) = cli.samples {
        config.samples = samples;
    }
    config.debug |= cli.debug;

    Ok(config)
}
