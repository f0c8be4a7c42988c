/// Monochrome pixel canvas shown in the terminal as Braille cells
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use fez_core::projection::{SCREEN_HEIGHT, SCREEN_WIDTH};
use fez_core::{LineSink, SceneState, ScreenPoint};
use std::io::Write;

/// Braille cells are 2 dots wide and 4 dots tall
const CELL_W: usize = 2;
const CELL_H: usize = 4;

/// Dot bit for each `(x, y)` position inside a Braille cell
const DOT_BITS: [[u8; CELL_W]; CELL_H] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

const BRAILLE_BASE: u32 = 0x2800;

/// 1-bit framebuffer for the watch display
pub struct BrailleCanvas {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    /// Canvas matching the 144x168 display
    pub fn display() -> Self {
        Self::new(SCREEN_WIDTH as usize, SCREEN_HEIGHT as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.pixels.fill(false);
    }

    pub fn get(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map_or(false, |i| self.pixels[i])
    }

    /// Light one pixel; anything off the canvas is clipped
    pub fn set(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = true;
        }
    }

    /// Bresenham line between two canvas points, both ends inclusive
    pub fn draw_line(&mut self, p0: ScreenPoint, p1: ScreenPoint) {
        let (mut x, mut y) = (p0.x, p0.y);
        let dx = (p1.x - p0.x).abs();
        let dy = -(p1.y - p0.y).abs();
        let sx = if p0.x < p1.x { 1 } else { -1 };
        let sy = if p0.y < p1.y { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set(x, y);
            if x == p1.x && y == p1.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Line sink drawing relative to a frame whose top-left is `origin`
    pub fn frame(&mut self, origin: ScreenPoint) -> FrameSink<'_> {
        FrameSink {
            canvas: self,
            origin,
        }
    }

    /// Redraw every slot of the face from scratch
    pub fn render_scene(&mut self, scene: &SceneState) {
        self.clear();
        let view = scene.camera().view();
        for (i, slot) in scene.slots().iter().enumerate() {
            let origin = slot.frame(view).origin;
            scene.render_slot(i, &mut self.frame(origin));
        }
    }

    /// Canvas as lines of Braille characters
    pub fn rows(&self) -> Vec<String> {
        let cols = self.width.div_ceil(CELL_W);
        let rows = self.height.div_ceil(CELL_H);
        (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| self.cell(col * CELL_W, row * CELL_H))
                    .collect()
            })
            .collect()
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(Color::White))?;
        for (row, line) in self.rows().into_iter().enumerate() {
            writer.queue(cursor::MoveTo(0, row as u16))?;
            writer.queue(Print(line))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }

    fn cell(&self, x0: usize, y0: usize) -> char {
        let mut bits = 0u8;
        for (dy, row) in DOT_BITS.iter().enumerate() {
            for (dx, bit) in row.iter().enumerate() {
                if self.get((x0 + dx) as i32, (y0 + dy) as i32) {
                    bits |= bit;
                }
            }
        }
        char::from_u32(BRAILLE_BASE + u32::from(bits)).unwrap_or(' ')
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}

/// [`LineSink`] translating frame-local points onto the canvas
pub struct FrameSink<'a> {
    canvas: &'a mut BrailleCanvas,
    origin: ScreenPoint,
}

impl LineSink for FrameSink<'_> {
    fn draw_line(&mut self, p0: ScreenPoint, p1: ScreenPoint) {
        let (dx, dy) = (self.origin.x, self.origin.y);
        self.canvas.draw_line(p0.offset(dx, dy), p1.offset(dx, dy));
    }
}
