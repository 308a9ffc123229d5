use anyhow::Context;
use clap::Parser;
use rust_qr_encoder::encoder::config::{self, EncoderConfig};
use rust_qr_encoder::tools::{RenderStyle, render_text, save_png};
use rust_qr_encoder::{ECLevel, MaskPattern, Mode, QrEncoder};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "Encode text into a version 1 QR symbol")]
struct Cli {
    /// Text to encode (may start with '-', which is alphanumeric)
    #[arg(allow_hyphen_values = true)]
    text: String,
    /// Data mode (alphanumeric or byte)
    #[arg(long)]
    mode: Option<Mode>,
    /// Error correction level (L, M, Q or H)
    #[arg(long)]
    level: Option<ECLevel>,
    /// Mask pattern 0-7
    #[arg(long)]
    mask: Option<u8>,
    /// Also write the symbol to this PNG file
    #[arg(long)]
    png: Option<PathBuf>,
    /// Draw dark modules as blocks (for light terminals)
    #[arg(long)]
    invert: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            // --help and --version
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    init_tracing();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let fallback = if config::debug_enabled() { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let defaults = EncoderConfig::from_env();
    let mask = match cli.mask {
        Some(id) => MaskPattern::from_id(id)?,
        None => defaults.mask,
    };
    let config = EncoderConfig::new(
        cli.mode.unwrap_or(defaults.mode),
        cli.level.unwrap_or(defaults.ec_level),
        mask,
    );

    println!("Input: {}", cli.text);
    let qr = QrEncoder::new(config).encode(&cli.text)?;

    let style = if cli.invert {
        RenderStyle::inverted()
    } else {
        RenderStyle::default()
    };
    print!("{}", render_text(qr.modules(), style));

    if let Some(path) = &cli.png {
        save_png(qr.modules(), path, config::png_scale())
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}
