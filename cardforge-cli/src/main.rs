use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context as _;
use cardforge::{
    BACK_SVG, CardConfig, FRONT_SVG, QR_BACK_SVG, QR_FRONT_SVG, QrEncoder as _, QrPayload,
    QrRequest, QrStyle, QrencodeCli, Rng64, Seed, Surface, Svg, assemble_back, assemble_front,
    ensure_parent_dir, is_qrencode_on_path,
};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cardforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render front and back card SVGs from a config file.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Card configuration JSON.
    #[arg(long = "config")]
    config_path: PathBuf,

    /// Output directory for the SVG and QR artifacts.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Override the config seed (accepts any text; integers work too).
    #[arg(long)]
    seed: Option<String>,

    /// Skip invoking the external QR encoder.
    #[arg(long, default_value_t = false)]
    skip_qr: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = CardConfig::from_path(&args.config_path)?;

    let seed = args
        .seed
        .map(Seed::Text)
        .or_else(|| config.seed.clone())
        .unwrap_or_else(Seed::generate);
    tracing::info!(%seed, "rendering card");

    let mut rng = Rng64::from_seed(&seed);
    let front = assemble_front(&config, &mut rng)?;
    let back = assemble_back(&config, &seed, &mut rng)?;

    if !args.skip_qr {
        encode_qr_artifacts(&config, &args.out_dir)?;
    }

    write_svg(&front, &args.out_dir.join(FRONT_SVG))?;
    write_svg(&back, &args.out_dir.join(BACK_SVG))?;
    Ok(())
}

fn encode_qr_artifacts(config: &CardConfig, out_dir: &std::path::Path) -> anyhow::Result<()> {
    if !is_qrencode_on_path() {
        tracing::warn!("qrencode not found on PATH; skipping QR artifacts");
        return Ok(());
    }

    let style = QrStyle {
        dark: config.fill_color.clone(),
        light: config.back_color.clone(),
    };
    let encoder = QrencodeCli;
    encoder.encode(
        &QrRequest {
            payload: QrPayload::MeCard {
                name: config.name.clone(),
                phone: config.phone.clone(),
                email: config.email.clone(),
                url: config.url.clone(),
            },
            style: style.clone(),
        },
        &out_dir.join(QR_FRONT_SVG),
    )?;
    encoder.encode(
        &QrRequest {
            payload: QrPayload::Url(config.url.clone()),
            style,
        },
        &out_dir.join(QR_BACK_SVG),
    )?;
    Ok(())
}

fn write_svg(surface: &Surface, path: &std::path::Path) -> anyhow::Result<()> {
    ensure_parent_dir(path)?;
    let file =
        File::create(path).with_context(|| format!("failed to create '{}'", path.display()))?;
    Svg::write(surface, BufWriter::new(file))
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    tracing::info!(path = %path.display(), shapes = surface.len(), "wrote card face");
    Ok(())
}
