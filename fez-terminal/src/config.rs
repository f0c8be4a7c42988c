/// Command-line configuration and the minute clock feeding the face
use chrono::Timelike;
use clap::Parser;
use fez_core::{FaceConfig, FaceError, TimeOfDay, TransitionTiming};
use std::time::{Duration, Instant};

/// `fez-terminal` - a wireframe clock face with an orbiting camera.
///
/// The face is the 144x168 display of a small monochrome watch, drawn in
/// the terminal with Braille characters.
#[derive(Parser, Debug, Clone)]
#[command(name = "fez-terminal", version, about, long_about = None)]
pub struct Args {
    /// Show hours as 00-23 instead of 1-12.
    #[arg(long = "twenty-four-hour", env = "FEZ_24H")]
    pub twenty_four_hour: bool,

    /// Start from a fixed time of day (HH:MM) instead of the system clock.
    ///
    /// Without `--demo` the face then stays at this time.
    #[arg(long)]
    pub time: Option<TimeOfDay>,

    /// Simulate a clock that advances one minute every `--demo-secs` seconds.
    #[arg(long)]
    pub demo: bool,

    /// Real seconds per simulated minute in demo mode.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u64).range(1..))]
    pub demo_secs: u64,

    /// Target frame rate of the terminal loop.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=120))]
    pub fps: u32,
}

impl Args {
    pub fn face_config(&self) -> FaceConfig {
        FaceConfig {
            twenty_four_hour: self.twenty_four_hour,
            timing: TransitionTiming::default(),
        }
    }

    pub fn clock_source(&self, now: Instant) -> Result<ClockSource, FaceError> {
        let start = match self.time {
            Some(time) => time,
            None => wall_clock()?,
        };
        Ok(match (self.demo, self.time) {
            (true, _) => ClockSource::Demo {
                time: start,
                every: Duration::from_secs(self.demo_secs),
                last: now,
            },
            (false, Some(time)) => ClockSource::Fixed(time),
            (false, None) => ClockSource::Wall,
        })
    }

    pub fn frame_time(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps))
    }
}

/// Where minute ticks come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockSource {
    /// Local system time
    Wall,
    /// Always the same time
    Fixed(TimeOfDay),
    /// Advances one minute every `every`
    Demo {
        time: TimeOfDay,
        every: Duration,
        last: Instant,
    },
}

impl ClockSource {
    /// Current time of day as of `now`
    pub fn current(&mut self, now: Instant) -> Result<TimeOfDay, FaceError> {
        match self {
            ClockSource::Wall => wall_clock(),
            ClockSource::Fixed(time) => Ok(*time),
            ClockSource::Demo { time, every, last } => {
                while now.saturating_duration_since(*last) >= *every {
                    *time = time.next_minute();
                    *last += *every;
                }
                Ok(*time)
            }
        }
    }
}

fn wall_clock() -> Result<TimeOfDay, FaceError> {
    let now = chrono::Local::now();
    TimeOfDay::new(now.hour(), now.minute())
}
