/// View space to screen space mapping for the 144x168 display
use crate::geometry::Vec3;
use crate::transform::Mat4;

pub const HALF_SCREEN_WIDTH: i32 = 72;
pub const HALF_SCREEN_HEIGHT: i32 = 84;

pub const SCREEN_WIDTH: i32 = HALF_SCREEN_WIDTH * 2;
pub const SCREEN_HEIGHT: i32 = HALF_SCREEN_HEIGHT * 2;

/// An integer pixel position, y growing downwards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Recenter a view-space point on the display, flipping y.
///
/// The perspective divide has already happened in `Mat4::transform_point`;
/// this only moves the origin to the screen center. Coordinates truncate
/// towards zero.
pub fn view_to_screen(v: Vec3) -> ScreenPoint {
    ScreenPoint {
        x: (v.x + HALF_SCREEN_WIDTH as f32) as i32,
        y: (HALF_SCREEN_HEIGHT as f32 - v.y) as i32,
    }
}

/// Project a world-space point through `view` onto the display
pub fn project_to_screen(view: &Mat4, world: Vec3) -> ScreenPoint {
    view_to_screen(view.transform_point(world))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_origin_maps_to_screen_center() {
        assert_eq!(view_to_screen(Vec3::new(0.0, 0.0, -7.0)), ScreenPoint::new(72, 84));
    }

    #[test]
    fn test_y_axis_flipped() {
        assert_eq!(view_to_screen(Vec3::new(10.0, 20.0, 0.0)), ScreenPoint::new(82, 64));
        assert_eq!(view_to_screen(Vec3::new(-72.0, -84.0, 0.0)), ScreenPoint::new(0, 168));
    }

    #[test]
    fn test_truncates_towards_zero() {
        assert_eq!(view_to_screen(Vec3::new(0.9, -0.9, 0.0)), ScreenPoint::new(72, 84));
        assert_eq!(view_to_screen(Vec3::new(-72.5, 0.0, 0.0)), ScreenPoint::new(0, 84));
    }

    #[test]
    fn test_project_through_identity() {
        let p = project_to_screen(&Mat4::identity(), Vec3::new(-40.0, 45.0, 3.0));
        assert_eq!(p, ScreenPoint::new(32, 39));
    }

    #[test]
    fn test_project_through_look_at() {
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::UP);
        let p = project_to_screen(&view, Vec3::new(10.0, 10.0, 0.0));
        assert!((p.x - 82).abs() <= 1 && (p.y - 74).abs() <= 1, "{:?}", p);
    }
}
