/// Example: Print one settled frame of the clock face
///
/// Usage: cargo run --example snapshot -- 12:34 [--twenty-four-hour]

use std::env;
use std::io;
use fez_core::{FaceConfig, SceneState, TimeOfDay};
use fez_terminal::{BrailleCanvas, Timeline};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <HH:MM> [--twenty-four-hour]", args[0]);
        return Ok(());
    }

    let time: TimeOfDay = args[1]
        .parse()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{}", e)))?;
    let config = FaceConfig {
        twenty_four_hour: args.iter().any(|a| a == "--twenty-four-hour"),
        ..FaceConfig::default()
    };

    let mut scene = SceneState::new(config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("{}", e)))?;

    // Skip the camera move and show the face from its destination
    let mut timeline = Timeline::new();
    scene.on_minute_tick(time, &mut timeline);
    scene.on_animation_stopped(true);

    let mut canvas = BrailleCanvas::display();
    canvas.render_scene(&scene);
    for row in canvas.rows() {
        println!("{}", row);
    }

    let eye = scene.camera().eye();
    println!("{} seen from ({}, {}, {})", time, eye.x, eye.y, eye.z);
    Ok(())
}
