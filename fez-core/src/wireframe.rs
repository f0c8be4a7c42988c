/// Wireframe rendering of numeral glyphs into per-slot frames
use crate::geometry::Vec3;
use crate::glyph::{Glyph, GLYPH_SCALE, MAX_GLYPH_VERTICES};
use crate::projection::{project_to_screen, ScreenPoint};
use crate::transform::Mat4;

/// Pixel size of a slot's bounding frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    pub w: i32,
    pub h: i32,
}

/// Every slot frame is 40x50 model units, scaled like the glyphs
pub const SLOT_FRAME: FrameSize = FrameSize {
    w: (40.0 * GLYPH_SCALE) as i32,
    h: (50.0 * GLYPH_SCALE) as i32,
};

/// A slot's rectangle on the physical display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub origin: ScreenPoint,
    pub size: FrameSize,
}

impl Frame {
    /// Frame of `size` centered on `center`
    pub fn centered(center: ScreenPoint, size: FrameSize) -> Self {
        Self {
            origin: center.offset(-size.w / 2, -size.h / 2),
            size,
        }
    }
}

/// Line primitive supplied by the display host.
///
/// Points are in frame-local pixels: `(0, 0)` is the frame's top-left corner.
pub trait LineSink {
    fn draw_line(&mut self, p0: ScreenPoint, p1: ScreenPoint);
}

impl LineSink for Vec<(ScreenPoint, ScreenPoint)> {
    fn draw_line(&mut self, p0: ScreenPoint, p1: ScreenPoint) {
        self.push((p0, p1));
    }
}

/// One digit position on the face: a world placement and an optional numeral
#[derive(Debug, Clone, Copy)]
pub struct GlyphSlot {
    pub pos: Vec3,
    pub glyph: Option<&'static Glyph>,
    pub size: FrameSize,
}

impl GlyphSlot {
    /// An empty slot centered on `pos`
    pub fn new(pos: Vec3) -> Self {
        Self {
            pos,
            glyph: None,
            size: SLOT_FRAME,
        }
    }

    /// Where this slot's frame currently sits on the display
    pub fn frame(&self, view: &Mat4) -> Frame {
        Frame::centered(project_to_screen(view, self.pos), self.size)
    }

    /// Draw the assigned glyph through `view` into `sink`.
    ///
    /// Returns the frame the lines are relative to, or `None` when the slot
    /// is hidden and nothing was drawn.
    pub fn render(&self, view: &Mat4, scale: f32, sink: &mut impl LineSink) -> Option<Frame> {
        let glyph = self.glyph?;
        let center = project_to_screen(view, self.pos);
        let (half_w, half_h) = (self.size.w / 2, self.size.h / 2);

        let mut points = [ScreenPoint::default(); MAX_GLYPH_VERTICES];
        for (point, &vertex) in points.iter_mut().zip(glyph.vertices) {
            let model = vertex.scale(scale) - glyph.center;
            let p = project_to_screen(view, self.pos + model);
            *point = ScreenPoint::new(p.x - center.x + half_w, p.y - center.y + half_h);
        }

        for (from, to) in glyph.segments() {
            sink.draw_line(points[from], points[to]);
        }

        Some(Frame::centered(center, self.size))
    }
}

/// Render `slot` at the standard glyph scale
pub fn render_slot(slot: &GlyphSlot, view: &Mat4, sink: &mut impl LineSink) -> Option<Frame> {
    slot.render(view, GLYPH_SCALE, sink)
}
