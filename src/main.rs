use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ascii_qr::helper::MAX_BORDER;
use ascii_qr::{generate_qr_ascii, Options};

/// Generate ASCII QR code.
#[derive(Parser, Debug)]
#[command(name = "ascii-qr", disable_version_flag = true)]
struct Cli {
    /// Data to encode in the QR code
    data: String,

    /// Stretch horizontally for terminals with rectangular fonts
    #[arg(long)]
    stretch: bool,

    /// Specify QR code version (1 to 40). If omitted, version is auto-detected.
    #[arg(long, value_parser = clap::value_parser!(i16).range(1..=40))]
    version: Option<i16>,

    /// Light border around the code, in modules (0 to 64)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=MAX_BORDER as i64))]
    border: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");

    let options = Options {
        version: cli.version,
        stretch: cli.stretch,
        border: cli.border,
    };
    let art = generate_qr_ascii(&cli.data, &options).context("failed to generate QR code")?;
    println!("{}", art);

    Ok(())
}
