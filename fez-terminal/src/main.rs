/// FEZ Terminal - Wireframe clock face
///
/// Shows the current time as extruded wireframe numerals on a 144x168
/// monochrome display, with the camera moving to its next waypoint every
/// minute.
/// Controls:
///   - R: Force a redraw
///   - Q/ESC: Quit
///
/// Logs go to stderr; redirect it (`2>fez.log`) when raising `RUST_LOG`.

use anyhow::{Context, Result};
use clap::Parser;
use fez_terminal::{Args, TerminalApp};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::info!("starting with {:?}", args);

    let clock = args
        .clock_source(Instant::now())
        .context("Failed to read the system clock")?;
    let mut app = TerminalApp::new(args.face_config(), clock, args.frame_time())
        .context("Failed to build the clock face")?;

    app.run().context("Terminal session failed")?;
    Ok(())
}
