/// The clock face: four glyph slots watched by the animated camera
use crate::camera::{AnimationScheduler, CameraRig, TransitionTiming};
use crate::clock::{FaceDigits, TimeOfDay};
use crate::error::FaceError;
use crate::geometry::Vec3;
use crate::glyph::{validate_digits, Glyph};
use crate::wireframe::{render_slot, Frame, GlyphSlot, LineSink};

/// Number of digit slots on the face
pub const SLOT_COUNT: usize = 4;

/// World placement of hour tens, hour ones, minute tens and minute ones
pub const SLOT_POSITIONS: [Vec3; SLOT_COUNT] = [
    Vec3::new(-40.0, 45.0, 0.0),
    Vec3::new(40.0, 45.0, 0.0),
    Vec3::new(-40.0, -45.0, 0.0),
    Vec3::new(40.0, -45.0, 0.0),
];

/// Face settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaceConfig {
    pub twenty_four_hour: bool,
    pub timing: TransitionTiming,
}

/// What a minute tick changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub hour_changed: bool,
    pub minute_changed: bool,
}

/// All state shared between the tick handler, the camera and the renderer.
///
/// Slot assignments are only written by [`SceneState::on_minute_tick`]; the
/// view matrix is only written by the [`CameraRig`]. Rendering borrows both
/// immutably.
#[derive(Debug)]
pub struct SceneState {
    config: FaceConfig,
    glyphs: &'static [Glyph; 10],
    slots: [GlyphSlot; SLOT_COUNT],
    camera: CameraRig,
    dirty: [bool; SLOT_COUNT],
    last_hour: Option<u8>,
    last_minute: Option<u8>,
}

impl SceneState {
    /// Build the face, failing fast if the numeral tables are unusable.
    pub fn new(config: FaceConfig) -> Result<Self, FaceError> {
        let glyphs = validate_digits()?;
        log::info!(
            "clock face ready ({}-hour, camera delay {:?}, duration {:?})",
            if config.twenty_four_hour { 24 } else { 12 },
            config.timing.delay,
            config.timing.duration
        );
        Ok(Self {
            config,
            glyphs,
            slots: SLOT_POSITIONS.map(GlyphSlot::new),
            camera: CameraRig::new(),
            dirty: [true; SLOT_COUNT],
            last_hour: None,
            last_minute: None,
        })
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn slots(&self) -> &[GlyphSlot; SLOT_COUNT] {
        &self.slots
    }

    /// Handle a clock tick; only changed hours or minutes touch the face.
    ///
    /// A new minute also sends the camera on to its next waypoint.
    pub fn on_minute_tick(
        &mut self,
        time: TimeOfDay,
        scheduler: &mut impl AnimationScheduler,
    ) -> TickOutcome {
        let digits = FaceDigits::new(time, self.config.twenty_four_hour);
        let mut outcome = TickOutcome::default();

        if self.last_hour != Some(time.hour()) {
            self.last_hour = Some(time.hour());
            self.assign(0, digits.hour_tens);
            self.assign(1, Some(digits.hour_ones));
            outcome.hour_changed = true;
        }

        if self.last_minute != Some(time.minute()) {
            self.last_minute = Some(time.minute());
            self.assign(2, Some(digits.minute_tens));
            self.assign(3, Some(digits.minute_ones));
            outcome.minute_changed = true;

            self.camera.start(scheduler, self.config.timing);
        }

        if outcome.hour_changed || outcome.minute_changed {
            log::debug!("showing {} as {:?}", time, digits);
        }
        outcome
    }

    /// Advance the camera move to `ratio` in `[0, 1]`
    pub fn on_animation_step(&mut self, ratio: f32) {
        if self.camera.on_step(ratio) {
            self.mark_all_dirty();
        }
    }

    /// The camera move stopped; `finished` is false when it was cut short
    pub fn on_animation_stopped(&mut self, finished: bool) {
        if self.camera.on_stop(finished) {
            self.mark_all_dirty();
        }
    }

    /// Draw slot `index` with the current view into `sink`
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`SLOT_COUNT`].
    pub fn render_slot(&self, index: usize, sink: &mut impl LineSink) -> Option<Frame> {
        render_slot(&self.slots[index], self.camera.view(), sink)
    }

    /// Slots needing a redraw since the last call, clearing the flags
    pub fn take_dirty(&mut self) -> [bool; SLOT_COUNT] {
        std::mem::replace(&mut self.dirty, [false; SLOT_COUNT])
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.iter().any(|&d| d)
    }

    pub fn mark_dirty(&mut self, index: usize) {
        self.dirty[index] = true;
    }

    pub fn mark_all_dirty(&mut self) {
        self.dirty = [true; SLOT_COUNT];
    }

    fn assign(&mut self, index: usize, digit: Option<u8>) {
        let glyphs = self.glyphs;
        self.slots[index].glyph = digit.map(|d| &glyphs[usize::from(d)]);
        self.mark_dirty(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::tests::RecordingScheduler;
    use crate::camera::{CameraState, WAYPOINTS};
    use crate::glyph::DIGITS;
    use crate::projection::ScreenPoint;

    fn time(hour: u32, minute: u32) -> TimeOfDay {
        TimeOfDay::new(hour, minute).unwrap()
    }

    fn shown(scene: &SceneState, index: usize) -> Option<usize> {
        let glyph = scene.slots()[index].glyph?;
        DIGITS.iter().position(|g| std::ptr::eq(g, glyph))
    }

    #[test]
    fn test_midnight_in_twelve_hour_mode() {
        let mut scene = SceneState::new(FaceConfig::default()).unwrap();
        let mut scheduler = RecordingScheduler::default();

        let outcome = scene.on_minute_tick(time(0, 5), &mut scheduler);
        assert!(outcome.hour_changed && outcome.minute_changed);

        assert_eq!(shown(&scene, 0), Some(1));
        assert_eq!(shown(&scene, 1), Some(2));
        assert_eq!(shown(&scene, 2), Some(0));
        assert_eq!(shown(&scene, 3), Some(5));

        assert_eq!(
            scene.camera().state(),
            CameraState::Transitioning {
                from: WAYPOINTS[0],
                to: 1
            }
        );
        assert_eq!(scheduler.starts, 1);
    }

    #[test]
    fn test_same_minute_does_not_restart_camera() {
        let mut scene = SceneState::new(FaceConfig::default()).unwrap();
        let mut scheduler = RecordingScheduler::default();

        scene.on_minute_tick(time(10, 30), &mut scheduler);
        scene.take_dirty();
        let outcome = scene.on_minute_tick(time(10, 30), &mut scheduler);

        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(scheduler.starts, 1);
        assert_eq!(scheduler.cancels, 0);
        assert!(!scene.is_dirty());
    }

    #[test]
    fn test_new_minute_interrupts_camera_move() {
        let mut scene = SceneState::new(FaceConfig::default()).unwrap();
        let mut scheduler = RecordingScheduler::default();

        scene.on_minute_tick(time(10, 30), &mut scheduler);
        scene.on_animation_step(0.5);
        let outcome = scene.on_minute_tick(time(10, 31), &mut scheduler);

        assert!(!outcome.hour_changed && outcome.minute_changed);
        assert_eq!(scheduler.cancels, 1);
        assert_eq!(scene.camera().target(), 2);
    }

    #[test]
    fn test_hour_tens_hidden_before_ten() {
        let mut scene = SceneState::new(FaceConfig::default()).unwrap();
        let mut scheduler = RecordingScheduler::default();

        scene.on_minute_tick(time(21, 0), &mut scheduler);
        assert_eq!(shown(&scene, 0), None);
        assert_eq!(shown(&scene, 1), Some(9));
        assert_eq!(shown(&scene, 2), Some(0));

        let mut lines = Vec::<(ScreenPoint, ScreenPoint)>::new();
        assert_eq!(scene.render_slot(0, &mut lines), None);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_twenty_four_hour_mode() {
        let config = FaceConfig {
            twenty_four_hour: true,
            ..FaceConfig::default()
        };
        let mut scene = SceneState::new(config).unwrap();
        let mut scheduler = RecordingScheduler::default();

        scene.on_minute_tick(time(7, 45), &mut scheduler);
        assert_eq!(shown(&scene, 0), Some(0));
        assert_eq!(shown(&scene, 1), Some(7));
    }

    #[test]
    fn test_dirty_tracking() {
        let mut scene = SceneState::new(FaceConfig::default()).unwrap();
        let mut scheduler = RecordingScheduler::default();
        assert_eq!(scene.take_dirty(), [true; SLOT_COUNT]);
        assert_eq!(scene.take_dirty(), [false; SLOT_COUNT]);

        // idle camera: a stray step changes nothing
        scene.on_animation_step(0.5);
        assert!(!scene.is_dirty());

        scene.on_minute_tick(time(10, 30), &mut scheduler);
        scene.take_dirty();
        scene.on_animation_step(0.25);
        assert_eq!(scene.take_dirty(), [true; SLOT_COUNT]);

        scene.on_animation_stopped(false);
        assert!(!scene.is_dirty());
        assert_eq!(scene.camera().state(), CameraState::Idle);

        scheduler.scheduled = false;
        scene.on_minute_tick(time(10, 31), &mut scheduler);
        scene.take_dirty();
        scene.on_animation_stopped(true);
        assert_eq!(scene.take_dirty(), [true; SLOT_COUNT]);
        assert_eq!(scene.camera().eye(), WAYPOINTS[2]);
    }

    #[test]
    #[should_panic]
    fn test_render_slot_out_of_range_panics() {
        let scene = SceneState::new(FaceConfig::default()).unwrap();
        let mut lines = Vec::<(ScreenPoint, ScreenPoint)>::new();
        scene.render_slot(SLOT_COUNT, &mut lines);
    }

    #[test]
    fn test_render_follows_camera() {
        let mut scene = SceneState::new(FaceConfig::default()).unwrap();
        let mut scheduler = RecordingScheduler::default();
        scene.on_minute_tick(time(12, 34), &mut scheduler);

        let mut before = Vec::<(ScreenPoint, ScreenPoint)>::new();
        let frame_before = scene.render_slot(3, &mut before).unwrap();
        scene.on_animation_stopped(true);
        let mut after = Vec::<(ScreenPoint, ScreenPoint)>::new();
        let frame_after = scene.render_slot(3, &mut after).unwrap();

        assert_eq!(before.len(), after.len());
        assert_ne!(before, after);
        assert_ne!(frame_before.origin, frame_after.origin);
    }
}
