#![deny(unsafe_code)]
//! CLI binary for tintscale.
//!
//! Subcommands:
//! - `scale <hex>` — generate a design-token scale and export it
//! - `shades <hex>` — generate shades annotated with WCAG contrast
//! - `contrast <hex> <hex>` — contrast ratio and WCAG ratings of a pair
//! - `convert <hex>` — show a color as RGB and HSL
//! - `list` — print available strategies and export formats

mod error;

use clap::{ArgAction, Parser, Subcommand};
use error::CliError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tintscale_core::{
    contrast_ratio, export, ColorScale, ExportFormat, Rgb, ScaleStrategy, StrategyKind,
    TokenCalibration, WcagRating,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tintscale", about = "Design-token color scale generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a color scale from a base color and export it as tokens.
    Scale {
        /// Base color as "#rrggbb".
        base: String,

        /// Number of steps (defaults to every step the strategy supports).
        #[arg(short, long)]
        steps: Option<usize>,

        /// Strategy name (token, annotated).
        #[arg(long, default_value = "token")]
        strategy: String,

        /// Export format (json, css, tailwind, text).
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Token family name, e.g. "primary" or "storm dust".
        #[arg(short, long, default_value = "primary")]
        name: String,

        /// JSON file with custom token calibration tables.
        #[arg(long)]
        calibration: Option<PathBuf>,
    },
    /// Generate shades with HSL and contrast against white and black.
    Shades {
        /// Base color as "#rrggbb".
        base: String,

        /// Strategy name (token, annotated).
        #[arg(long, default_value = "annotated")]
        strategy: String,

        /// JSON file with custom token calibration tables.
        #[arg(long)]
        calibration: Option<PathBuf>,
    },
    /// Contrast ratio between two colors.
    Contrast {
        /// First color as "#rrggbb".
        first: String,
        /// Second color as "#rrggbb".
        second: String,
    },
    /// Show a color as RGB and HSL.
    Convert {
        /// Color as "#rrggbb".
        color: String,
    },
    /// List available strategies and export formats.
    List,
}

/// `--json` output of `scale`. A derived struct keeps the scale's step order,
/// which `serde_json::Value` would sort away.
#[derive(Serialize)]
struct ScaleReport<'a> {
    base: Rgb,
    strategy: &'a str,
    name: &'a str,
    scale: &'a ColorScale,
    output: String,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads and validates a calibration file.
fn load_calibration(path: &Path) -> Result<TokenCalibration, CliError> {
    let json = fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    Ok(TokenCalibration::from_json(&json)?)
}

/// Resolves the strategy name and applies step count and calibration overrides.
fn build_strategy(
    name: &str,
    steps: Option<usize>,
    calibration: Option<&Path>,
) -> Result<StrategyKind, CliError> {
    let mut strategy = StrategyKind::from_name(name)?;
    if let Some(path) = calibration {
        let calibration = load_calibration(path)?;
        strategy = match strategy {
            StrategyKind::Token(token) => {
                StrategyKind::Token(token.with_calibration(calibration)?)
            }
            StrategyKind::Annotated(_) => {
                return Err(CliError::Input(
                    "--calibration only applies to the token strategy".into(),
                ))
            }
        };
    }
    if let Some(steps) = steps {
        strategy = strategy.with_steps(steps)?;
    }
    Ok(strategy)
}

fn rating_line(rating: WcagRating) -> String {
    let verdict = |pass: bool| if pass { "pass" } else { "fail" };
    format!(
        "AA {}  AA-large {}  AAA {}  AAA-large {}",
        verdict(rating.aa),
        verdict(rating.aa_large),
        verdict(rating.aaa),
        verdict(rating.aaa_large)
    )
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let strategies = StrategyKind::list_names();
            let formats = ExportFormat::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "strategies": strategies,
                    "formats": formats,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Strategies:");
                for name in strategies {
                    println!("  {name}");
                }
                println!("Formats:");
                println!("  {}", formats.join(", "));
            }
        }
        Command::Scale {
            base,
            steps,
            strategy,
            format,
            name,
            calibration,
        } => {
            let color = Rgb::from_hex(&base)?;
            let format = ExportFormat::from_name(&format)?;
            let strategy = build_strategy(&strategy, steps, calibration.as_deref())?;
            info!(
                base = %color,
                strategy = strategy.name(),
                steps = strategy.steps(),
                "generating scale"
            );

            let scale = strategy.scale(color);
            if cli.json {
                let report = ScaleReport {
                    base: color,
                    strategy: strategy.name(),
                    name: &name,
                    scale: &scale,
                    output: export(&name, &scale, format)?,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", export(&name, &scale, format)?);
            }
        }
        Command::Shades {
            base,
            strategy,
            calibration,
        } => {
            let color = Rgb::from_hex(&base)?;
            let strategy = build_strategy(&strategy, None, calibration.as_deref())?;
            info!(base = %color, strategy = strategy.name(), "generating annotated shades");

            let shades = strategy.annotated_shades(color);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&shades)?);
            } else {
                for shade in &shades {
                    let text = shade
                        .preferred_text()
                        .map(|c| c.to_hex())
                        .unwrap_or_default();
                    println!(
                        "{:>4}  {}  hsl({:.2}, {:.2}%, {:.2}%)  on-white {:>5.2}  on-black {:>5.2}  text {}",
                        shade.name,
                        shade.hexcode,
                        shade.hsl.hue,
                        shade.hsl.saturation,
                        shade.hsl.lightness,
                        shade.cw.unwrap_or_default(),
                        shade.cb.unwrap_or_default(),
                        text
                    );
                }
            }
        }
        Command::Contrast { first, second } => {
            let ratio = contrast_ratio(&first, &second)?;
            let rating = WcagRating::from_ratio(ratio);
            if cli.json {
                let info = serde_json::json!({
                    "first": first,
                    "second": second,
                    "ratio": ratio,
                    "wcag": rating,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{ratio:.2}:1  {}", rating_line(rating));
            }
        }
        Command::Convert { color } => {
            let rgb = Rgb::from_hex(&color)?;
            let hsl = rgb.to_hsl();
            if cli.json {
                let info = serde_json::json!({
                    "hex": rgb,
                    "rgb": [rgb.r, rgb.g, rgb.b],
                    "hsl": hsl,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("hex  {rgb}");
                println!("rgb  {}, {}, {}", rgb.r, rgb.g, rgb.b);
                println!(
                    "hsl  {:.2}, {:.2}%, {:.2}%",
                    hsl.hue, hsl.saturation, hsl.lightness
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
