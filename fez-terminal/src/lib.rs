/// Terminal host for the wireframe clock face
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use fez_core::{FaceConfig, FaceError, SceneState};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod config;
pub mod renderer;
pub mod timeline;

pub use config::{Args, ClockSource};
pub use renderer::BrailleCanvas;
pub use timeline::Timeline;

/// Main application struct for the terminal clock face
pub struct TerminalApp {
    scene: SceneState,
    timeline: Timeline,
    clock: ClockSource,
    canvas: BrailleCanvas,
    frame_time: Duration,
    running: bool,
}

impl TerminalApp {
    pub fn new(config: FaceConfig, clock: ClockSource, frame_time: Duration) -> Result<Self, FaceError> {
        Ok(Self {
            scene: SceneState::new(config)?,
            timeline: Timeline::new(),
            clock,
            canvas: BrailleCanvas::display(),
            frame_time,
            running: true,
        })
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Update
            self.update(frame_start).map_err(io::Error::other)?;

            // Render only when a slot asked for it
            if self.scene.is_dirty() {
                self.render()?;
            }

            // Frame timing
            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_time {
                std::thread::sleep(self.frame_time - elapsed);
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('r') => {
                    self.scene.mark_all_dirty();
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Feed the clock and the running camera move into the scene
    pub fn update(&mut self, now: Instant) -> Result<(), FaceError> {
        let time = self.clock.current(now)?;
        let outcome = self.scene.on_minute_tick(time, &mut self.timeline);
        if outcome.minute_changed {
            log::info!("minute tick {}", time);
        }

        if let Some(progress) = self.timeline.poll(now) {
            self.scene.on_animation_step(progress.ratio);
            if progress.finished {
                self.scene.on_animation_stopped(true);
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        self.scene.take_dirty();
        self.canvas.render_scene(&self.scene);

        let mut stdout = stdout();
        self.canvas.draw(&mut stdout)?;

        // Draw UI overlay below the display
        let status_row = self.canvas.height().div_ceil(4) as u16;
        let eye = self.scene.camera().eye();
        queue!(
            stdout,
            cursor::MoveTo(0, status_row),
            SetForegroundColor(Color::DarkGrey),
            Print(format!(
                "FEZ | eye ({:+.2}, {:+.2}, {:+.2}) | Q=Quit R=Redraw",
                eye.x, eye.y, eye.z
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fez_core::camera::{CameraState, WAYPOINTS};
    use fez_core::TimeOfDay;

    fn app_at(hour: u32, minute: u32) -> TerminalApp {
        let time = TimeOfDay::new(hour, minute).unwrap();
        TerminalApp::new(
            FaceConfig::default(),
            ClockSource::Fixed(time),
            Duration::from_millis(33),
        )
        .unwrap()
    }

    #[test]
    fn test_first_update_starts_camera_move() {
        let mut app = app_at(0, 5);
        app.update(Instant::now()).unwrap();
        assert!(matches!(
            app.scene().camera().state(),
            CameraState::Transitioning { to: 1, .. }
        ));
        assert!(app.scene().is_dirty());
    }

    #[test]
    fn test_camera_settles_after_transition() {
        let mut app = app_at(0, 5);
        let now = Instant::now();
        app.update(now).unwrap();
        app.update(now + Duration::from_secs(2)).unwrap();
        assert_eq!(app.scene().camera().state(), CameraState::Idle);
        assert_eq!(app.scene().camera().eye(), WAYPOINTS[1]);
    }

    #[test]
    fn test_camera_move_timed_from_update_clock() {
        let mut app = app_at(0, 5);
        let now = Instant::now() + Duration::from_secs(60);
        app.update(now).unwrap();

        app.update(now + Duration::from_millis(499)).unwrap();
        assert_eq!(app.scene().camera().eye(), WAYPOINTS[0]);

        app.update(now + Duration::from_millis(750)).unwrap();
        let eye = app.scene().camera().eye();
        assert!((eye.x - 1.0).abs() < 1e-3);
        assert!(eye.y.abs() < 1e-3);
    }
}
