/// Camera waypoint cycle and the view matrix it drives
use std::time::Duration;

use crate::geometry::Vec3;
use crate::transform::Mat4;

/// Eye positions visited round-robin, one step per displayed minute
pub const WAYPOINTS: [Vec3; 4] = [
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

/// Start delay and length of one camera move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    pub delay: Duration,
    pub duration: Duration,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(500),
            duration: Duration::from_millis(500),
        }
    }
}

/// Host animation service that paces a camera transition.
///
/// Once scheduled, the host reports progress through
/// [`CameraRig::on_step`] and the end through [`CameraRig::on_stop`].
pub trait AnimationScheduler {
    fn is_scheduled(&self) -> bool;
    fn unschedule(&mut self);
    fn schedule(&mut self, timing: TransitionTiming);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraState {
    Idle,
    Transitioning { from: Vec3, to: usize },
}

/// Owner of the eye position and the world-to-view matrix.
///
/// The view matrix is only ever written by the rig's own methods.
#[derive(Debug, Clone)]
pub struct CameraRig {
    eye: Vec3,
    at: Vec3,
    up: Vec3,
    target: usize,
    state: CameraState,
    view: Mat4,
}

impl CameraRig {
    pub fn new() -> Self {
        let eye = WAYPOINTS[0];
        let (at, up) = (Vec3::ZERO, Vec3::UP);
        Self {
            eye,
            at,
            up,
            target: 0,
            state: CameraState::Idle,
            view: Mat4::look_at_rh(eye, at, up),
        }
    }

    pub fn view(&self) -> &Mat4 {
        &self.view
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Index of the waypoint the camera rests at or is heading to
    pub fn target(&self) -> usize {
        self.target
    }

    pub fn state(&self) -> CameraState {
        self.state
    }

    /// Drop an in-flight transition without settling it
    pub fn cancel_if_scheduled(&mut self, scheduler: &mut impl AnimationScheduler) {
        if scheduler.is_scheduled() {
            log::debug!("interrupting camera move towards waypoint {}", self.target);
            scheduler.unschedule();
        }
    }

    /// Begin moving from the current eye towards the next waypoint
    pub fn start(&mut self, scheduler: &mut impl AnimationScheduler, timing: TransitionTiming) {
        self.cancel_if_scheduled(scheduler);

        let from = self.eye;
        self.target = (self.target + 1) % WAYPOINTS.len();
        self.state = CameraState::Transitioning {
            from,
            to: self.target,
        };
        log::debug!("camera move {:?} -> waypoint {}", from, self.target);

        scheduler.schedule(timing);
    }

    /// Interpolate the eye for progress `ratio` and rebuild the view.
    ///
    /// Only x and y move; z keeps the value it had when the move started.
    /// Returns whether the view changed.
    pub fn on_step(&mut self, ratio: f32) -> bool {
        let CameraState::Transitioning { from, to } = self.state else {
            log::warn!("animation step at {:.2} with no camera move in flight", ratio);
            return false;
        };
        let ratio = ratio.clamp(0.0, 1.0);
        let dest = WAYPOINTS[to];
        self.eye.x = from.x * (1.0 - ratio) + dest.x * ratio;
        self.eye.y = from.y * (1.0 - ratio) + dest.y * ratio;
        self.rebuild_view();
        true
    }

    /// End the move in flight, settling on the target waypoint when it ran
    /// to completion.
    ///
    /// An interrupted move leaves the eye where it is. Either way the rig is
    /// idle afterwards. Returns whether the view changed.
    pub fn on_stop(&mut self, finished: bool) -> bool {
        if self.state == CameraState::Idle {
            log::warn!("animation stop with no camera move in flight");
            return false;
        }
        self.state = CameraState::Idle;
        if !finished {
            log::debug!("camera move towards waypoint {} cut short", self.target);
            return false;
        }
        self.eye = WAYPOINTS[self.target];
        self.rebuild_view();
        log::debug!("camera settled at waypoint {}", self.target);
        true
    }

    fn rebuild_view(&mut self) {
        self.view = Mat4::look_at_rh(self.eye, self.at, self.up);
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}
