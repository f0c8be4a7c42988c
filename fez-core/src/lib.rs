/// FEZ Core Library - Wireframe clock face kernel
///
/// This library provides the display-independent part of the clock face:
/// approximate vector math, column-major transforms, the view-to-screen
/// mapping, the numeral tables, the glyph renderer and the camera animator.
/// Hosts drive it through minute ticks and animation callbacks and supply
/// the line primitive.

pub mod camera;
pub mod clock;
pub mod error;
pub mod geometry;
pub mod glyph;
pub mod projection;
pub mod scene;
pub mod transform;
pub mod wireframe;

// Re-export commonly used types
pub use camera::{AnimationScheduler, CameraRig, TransitionTiming};
pub use clock::TimeOfDay;
pub use error::FaceError;
pub use geometry::Vec3;
pub use projection::ScreenPoint;
pub use scene::{FaceConfig, SceneState};
pub use transform::Mat4;
pub use wireframe::{Frame, LineSink};
