//! Knob filmstrip generator
//!
//! Renders the example knob strip to `example_knob_filmstrip.png` in the
//! working directory and prints how to load it in the DAW.

use anyhow::{Context, Result};
use std::path::Path;

use knob_filmstrip::FilmstripConfig;
use knob_filmstrip::config::OUTPUT_FILE;
use knob_filmstrip::render::{assemble, save_png};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = FilmstripConfig::default();
    let strip = assemble(&config);

    let path = Path::new(OUTPUT_FILE);
    save_png(&strip, path)
        .with_context(|| format!("Failed to write filmstrip to {}", path.display()))?;

    print_usage(&config);
    Ok(())
}

fn print_usage(config: &FilmstripConfig) {
    println!("✅ Filmstrip created: {}", OUTPUT_FILE);
    println!(
        "   Dimensions: {}x{} ({} frames)",
        config.frame_size,
        config.strip_height(),
        config.frame_count
    );
    println!("\nTo use it:");
    println!("1. Open Custom DAW");
    println!("2. Drag a Knob onto the canvas");
    println!("3. Select it");
    println!("4. In the Property Inspector, set 'Knob Style' to 'Filmstrip'");
    println!("5. Click 'Load PNG...' and pick '{}'", OUTPUT_FILE);
}
