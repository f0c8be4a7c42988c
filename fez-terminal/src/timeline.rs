/// Instant-driven animation scheduler for camera moves
use fez_core::{AnimationScheduler, TransitionTiming};
use std::time::Instant;

/// Progress of the running animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub ratio: f32,
    pub finished: bool,
}

/// A scheduled animation; the clock starts at the first poll
#[derive(Debug, Clone, Copy)]
struct Scheduled {
    timing: TransitionTiming,
    start: Option<Instant>,
}

/// At most one scheduled animation, timed on the caller's clock.
///
/// The start delay counts from the `now` of the first [`Timeline::poll`]
/// after scheduling, so a host polling with the same `now` it ticked the
/// scene with stays deterministic.
#[derive(Debug, Default)]
pub struct Timeline {
    active: Option<Scheduled>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// When the current animation started counting, once polled
    pub fn started_at(&self) -> Option<Instant> {
        self.active.and_then(|scheduled| scheduled.start)
    }

    /// Progress at `now`, or `None` while idle or still inside the start delay.
    ///
    /// The final report has `ratio == 1.0` and `finished` set, after which
    /// the timeline is idle again.
    pub fn poll(&mut self, now: Instant) -> Option<Progress> {
        let scheduled = self.active.as_mut()?;
        let start = *scheduled.start.get_or_insert(now);
        let timing = scheduled.timing;

        let elapsed = now.saturating_duration_since(start);
        let running = elapsed.checked_sub(timing.delay)?;

        if running >= timing.duration {
            self.active = None;
            return Some(Progress {
                ratio: 1.0,
                finished: true,
            });
        }
        Some(Progress {
            ratio: running.as_secs_f32() / timing.duration.as_secs_f32(),
            finished: false,
        })
    }
}

impl AnimationScheduler for Timeline {
    fn is_scheduled(&self) -> bool {
        self.active.is_some()
    }

    fn unschedule(&mut self) {
        self.active = None;
    }

    fn schedule(&mut self, timing: TransitionTiming) {
        log::trace!("animation scheduled: {:?}", timing);
        self.active = Some(Scheduled {
            timing,
            start: None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn scheduled() -> (Timeline, Instant) {
        let mut timeline = Timeline::new();
        timeline.schedule(TransitionTiming::default());
        let start = Instant::now();
        assert_eq!(timeline.poll(start), None);
        (timeline, start)
    }

    #[test]
    fn test_idle_timeline_reports_nothing() {
        let mut timeline = Timeline::new();
        assert!(!timeline.is_scheduled());
        assert_eq!(timeline.poll(Instant::now()), None);
    }

    #[test]
    fn test_waits_for_start_delay() {
        let (mut timeline, start) = scheduled();
        assert_eq!(timeline.poll(start + ms(499)), None);
        assert!(timeline.is_scheduled());
    }

    #[test]
    fn test_reports_ratio_then_finishes() {
        let (mut timeline, start) = scheduled();

        let halfway = timeline.poll(start + ms(750)).unwrap();
        assert!((halfway.ratio - 0.5).abs() < 1e-3);
        assert!(!halfway.finished);

        let end = timeline.poll(start + ms(1000)).unwrap();
        assert_eq!(
            end,
            Progress {
                ratio: 1.0,
                finished: true
            }
        );
        assert!(!timeline.is_scheduled());
        assert_eq!(timeline.poll(start + ms(1100)), None);
    }

    #[test]
    fn test_unschedule_drops_silently() {
        let (mut timeline, start) = scheduled();
        timeline.unschedule();
        assert_eq!(timeline.poll(start + ms(2000)), None);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut timeline = Timeline::new();
        timeline.schedule(TransitionTiming {
            delay: Duration::ZERO,
            duration: Duration::ZERO,
        });
        assert!(timeline.poll(Instant::now()).unwrap().finished);
    }

    #[test]
    fn test_first_poll_starts_the_clock() {
        let mut timeline = Timeline::new();
        timeline.schedule(TransitionTiming::default());
        assert_eq!(timeline.started_at(), None);

        let start = Instant::now() + Duration::from_secs(60);
        assert_eq!(timeline.poll(start), None);
        assert_eq!(timeline.started_at(), Some(start));

        assert_eq!(timeline.poll(start + ms(499)), None);
        let halfway = timeline.poll(start + ms(750)).unwrap();
        assert!((halfway.ratio - 0.5).abs() < 1e-3);
    }
}
