//! band_sketch — interactive entry point.

use band_sketch::{run, AppConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "band_sketch=info,orient_stream=info".into()),
        )
        .init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║        Band Sketch — draw in the air with an armband         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
    println!("  Mode: keyboard/mouse simulation");
    println!();
    println!("  Aim with the mouse, hold F to draw, C to clear, tap D to");
    println!("  recalibrate.  Scroll to roll the wrist (brush width).");
    println!();

    if let Err(e) = run(AppConfig::default()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
