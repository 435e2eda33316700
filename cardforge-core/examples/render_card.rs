//! Render a demo card pair into `target/` without going through the CLI.
//!
//! Run with `cargo run -p cardforge-core --example render_card`.

use std::fs::File;
use std::io::BufWriter;

use cardforge::{
    BACK_SVG, CardConfig, FRONT_SVG, Rng64, Seed, Surface, Svg, assemble_back, assemble_front,
};

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config: CardConfig = serde_json::from_str(
        r#"{
            "name": "Ada Lovelace",
            "job_title": "Principal Analyst",
            "org": "Analytical Engines Ltd",
            "phone": "+44 20 0000 0000",
            "email": "ada@example.org",
            "url": "https://example.org",
            "qr_code_x": 200,
            "qr_code_y": 110,
            "qr_code_size": 45
        }"#,
    )?;

    let seed = Seed::Text("render-card-example".to_string());
    let mut rng = Rng64::from_seed(&seed);

    let front = assemble_front(&config, &mut rng)?;
    let back = assemble_back(&config, &seed, &mut rng)?;

    write_svg(&front, FRONT_SVG)?;
    write_svg(&back, BACK_SVG)?;
    Ok(())
}

fn write_svg(surface: &Surface, name: &str) -> anyhow::Result<()> {
    std::fs::create_dir_all("target")?;
    let out_path = std::path::Path::new("target").join(name);
    let file = File::create(&out_path)?;
    Svg::write(surface, BufWriter::new(file))?;
    eprintln!("wrote {}", out_path.display());
    Ok(())
}
