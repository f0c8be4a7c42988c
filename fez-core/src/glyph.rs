/// Baked-in wireframe numerals and the pen-up/pen-down edge encoding
use crate::error::FaceError;
use crate::geometry::Vec3;

/// Uniform scale applied to glyph model coordinates when rendered
pub const GLYPH_SCALE: f32 = 1.4;

/// Capacity of the renderer's projected-vertex scratch buffer
pub const MAX_GLYPH_VERTICES: usize = 32;

/// Centering offset shared by all numerals, in scaled units
pub const GLYPH_CENTER: Vec3 = Vec3::new(15.0 * GLYPH_SCALE, 20.0 * GLYPH_SCALE, 6.0 * GLYPH_SCALE);

/// A static numeral: vertices plus a pen-up/pen-down index list.
///
/// Walking `indices`, every index is joined to the one before it, except
/// when it repeats the previous index: the repeat lifts the pen and the
/// next index starts a new stroke.
#[derive(Debug)]
pub struct Glyph {
    pub center: Vec3,
    pub vertices: &'static [Vec3],
    pub indices: &'static [u8],
}

impl Glyph {
    /// Line segments drawn by this glyph, as vertex index pairs
    pub fn segments(&self) -> Segments<'static> {
        segments(self.indices)
    }

    /// Check the glyph fits the scratch buffer and indexes its own vertices.
    pub fn validate(&self, digit: usize) -> Result<(), FaceError> {
        if self.vertices.len() > MAX_GLYPH_VERTICES {
            return Err(FaceError::GlyphTooLarge {
                digit,
                vertices: self.vertices.len(),
                capacity: MAX_GLYPH_VERTICES,
            });
        }
        if let Some(&index) = self.indices.iter().find(|&&i| i as usize >= self.vertices.len()) {
            return Err(FaceError::IndexOutOfRange {
                digit,
                index: index as usize,
                vertices: self.vertices.len(),
            });
        }
        Ok(())
    }
}

/// Decode a pen-up/pen-down index list into drawn segments
pub fn segments(indices: &[u8]) -> Segments<'_> {
    Segments {
        indices: indices.iter(),
        prev: None,
    }
}

/// Iterator over `(from, to)` vertex pairs, see [`segments`]
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    indices: std::slice::Iter<'a, u8>,
    prev: Option<u8>,
}

impl Iterator for Segments<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        for &index in self.indices.by_ref() {
            match self.prev {
                None => self.prev = Some(index),
                Some(prev) if prev == index => self.prev = None,
                Some(prev) => {
                    self.prev = Some(index);
                    return Some((prev as usize, index as usize));
                }
            }
        }
        None
    }
}

/// The ten numerals, indexed by digit
pub static DIGITS: [Glyph; 10] = [
    glyph(&VERTICES_0, &INDICES_0),
    glyph(&VERTICES_1, &INDICES_1),
    glyph(&VERTICES_2, &INDICES_2),
    glyph(&VERTICES_3, &INDICES_3),
    glyph(&VERTICES_4, &INDICES_4),
    glyph(&VERTICES_5, &INDICES_5),
    glyph(&VERTICES_6, &INDICES_6),
    glyph(&VERTICES_7, &INDICES_7),
    glyph(&VERTICES_8, &INDICES_8),
    glyph(&VERTICES_9, &INDICES_9),
];

/// Validate every numeral once at startup.
pub fn validate_digits() -> Result<&'static [Glyph; 10], FaceError> {
    for (digit, glyph) in DIGITS.iter().enumerate() {
        glyph.validate(digit)?;
    }
    log::debug!("validated {} numeral glyphs", DIGITS.len());
    Ok(&DIGITS)
}

const fn glyph(vertices: &'static [Vec3], indices: &'static [u8]) -> Glyph {
    Glyph {
        center: GLYPH_CENTER,
        vertices,
        indices,
    }
}

const fn v(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

// Numerals sit on a 30x40 grid, y up. Each stroke is repeated on the front
// face (z = 12) and the back face (z = 0), followed by one depth edge per
// front vertex.

#[rustfmt::skip]
static VERTICES_0: [Vec3; 8] = [
    v(0.0, 40.0, 12.0), v(30.0, 40.0, 12.0), v(30.0, 0.0, 12.0),
    v(0.0, 0.0, 12.0), v(0.0, 40.0, 0.0), v(30.0, 40.0, 0.0),
    v(30.0, 0.0, 0.0), v(0.0, 0.0, 0.0),
];
#[rustfmt::skip]
static INDICES_0: [u8; 23] = [
    0, 1, 2, 3, 0, 0, 4, 5, 6, 7, 4, 4, 0, 4, 4, 1,
    5, 5, 2, 6, 6, 3, 7,
];

#[rustfmt::skip]
static VERTICES_1: [Vec3; 10] = [
    v(8.0, 32.0, 12.0), v(15.0, 40.0, 12.0), v(15.0, 0.0, 12.0),
    v(7.0, 0.0, 12.0), v(23.0, 0.0, 12.0), v(8.0, 32.0, 0.0),
    v(15.0, 40.0, 0.0), v(15.0, 0.0, 0.0), v(7.0, 0.0, 0.0),
    v(23.0, 0.0, 0.0),
];
#[rustfmt::skip]
static INDICES_1: [u8; 28] = [
    0, 1, 2, 2, 3, 4, 4, 5, 6, 7, 7, 8, 9, 9, 0, 5,
    5, 1, 6, 6, 2, 7, 7, 3, 8, 8, 4, 9,
];

#[rustfmt::skip]
static VERTICES_2: [Vec3; 12] = [
    v(0.0, 40.0, 12.0), v(30.0, 40.0, 12.0), v(30.0, 20.0, 12.0),
    v(0.0, 20.0, 12.0), v(0.0, 0.0, 12.0), v(30.0, 0.0, 12.0),
    v(0.0, 40.0, 0.0), v(30.0, 40.0, 0.0), v(30.0, 20.0, 0.0),
    v(0.0, 20.0, 0.0), v(0.0, 0.0, 0.0), v(30.0, 0.0, 0.0),
];
#[rustfmt::skip]
static INDICES_2: [u8; 31] = [
    0, 1, 2, 3, 4, 5, 5, 6, 7, 8, 9, 10, 11, 11, 0, 6,
    6, 1, 7, 7, 2, 8, 8, 3, 9, 9, 4, 10, 10, 5, 11,
];

#[rustfmt::skip]
static VERTICES_3: [Vec3; 12] = [
    v(0.0, 40.0, 12.0), v(30.0, 40.0, 12.0), v(30.0, 0.0, 12.0),
    v(0.0, 0.0, 12.0), v(8.0, 20.0, 12.0), v(30.0, 20.0, 12.0),
    v(0.0, 40.0, 0.0), v(30.0, 40.0, 0.0), v(30.0, 0.0, 0.0),
    v(0.0, 0.0, 0.0), v(8.0, 20.0, 0.0), v(30.0, 20.0, 0.0),
];
#[rustfmt::skip]
static INDICES_3: [u8; 33] = [
    0, 1, 2, 3, 3, 4, 5, 5, 6, 7, 8, 9, 9, 10, 11, 11,
    0, 6, 6, 1, 7, 7, 2, 8, 8, 3, 9, 9, 4, 10, 10, 5,
    11,
];

#[rustfmt::skip]
static VERTICES_4: [Vec3; 10] = [
    v(0.0, 40.0, 12.0), v(0.0, 20.0, 12.0), v(30.0, 20.0, 12.0),
    v(22.0, 40.0, 12.0), v(22.0, 0.0, 12.0), v(0.0, 40.0, 0.0),
    v(0.0, 20.0, 0.0), v(30.0, 20.0, 0.0), v(22.0, 40.0, 0.0),
    v(22.0, 0.0, 0.0),
];
#[rustfmt::skip]
static INDICES_4: [u8; 28] = [
    0, 1, 2, 2, 3, 4, 4, 5, 6, 7, 7, 8, 9, 9, 0, 5,
    5, 1, 6, 6, 2, 7, 7, 3, 8, 8, 4, 9,
];

#[rustfmt::skip]
static VERTICES_5: [Vec3; 12] = [
    v(30.0, 40.0, 12.0), v(0.0, 40.0, 12.0), v(0.0, 20.0, 12.0),
    v(30.0, 20.0, 12.0), v(30.0, 0.0, 12.0), v(0.0, 0.0, 12.0),
    v(30.0, 40.0, 0.0), v(0.0, 40.0, 0.0), v(0.0, 20.0, 0.0),
    v(30.0, 20.0, 0.0), v(30.0, 0.0, 0.0), v(0.0, 0.0, 0.0),
];
#[rustfmt::skip]
static INDICES_5: [u8; 31] = [
    0, 1, 2, 3, 4, 5, 5, 6, 7, 8, 9, 10, 11, 11, 0, 6,
    6, 1, 7, 7, 2, 8, 8, 3, 9, 9, 4, 10, 10, 5, 11,
];

#[rustfmt::skip]
static VERTICES_6: [Vec3; 12] = [
    v(30.0, 40.0, 12.0), v(0.0, 40.0, 12.0), v(0.0, 0.0, 12.0),
    v(30.0, 0.0, 12.0), v(30.0, 20.0, 12.0), v(0.0, 20.0, 12.0),
    v(30.0, 40.0, 0.0), v(0.0, 40.0, 0.0), v(0.0, 0.0, 0.0),
    v(30.0, 0.0, 0.0), v(30.0, 20.0, 0.0), v(0.0, 20.0, 0.0),
];
#[rustfmt::skip]
static INDICES_6: [u8; 31] = [
    0, 1, 2, 3, 4, 5, 5, 6, 7, 8, 9, 10, 11, 11, 0, 6,
    6, 1, 7, 7, 2, 8, 8, 3, 9, 9, 4, 10, 10, 5, 11,
];

#[rustfmt::skip]
static VERTICES_7: [Vec3; 6] = [
    v(0.0, 40.0, 12.0), v(30.0, 40.0, 12.0), v(12.0, 0.0, 12.0),
    v(0.0, 40.0, 0.0), v(30.0, 40.0, 0.0), v(12.0, 0.0, 0.0),
];
#[rustfmt::skip]
static INDICES_7: [u8; 16] = [
    0, 1, 2, 2, 3, 4, 5, 5, 0, 3, 3, 1, 4, 4, 2, 5,
];

#[rustfmt::skip]
static VERTICES_8: [Vec3; 12] = [
    v(0.0, 40.0, 12.0), v(30.0, 40.0, 12.0), v(30.0, 0.0, 12.0),
    v(0.0, 0.0, 12.0), v(0.0, 20.0, 12.0), v(30.0, 20.0, 12.0),
    v(0.0, 40.0, 0.0), v(30.0, 40.0, 0.0), v(30.0, 0.0, 0.0),
    v(0.0, 0.0, 0.0), v(0.0, 20.0, 0.0), v(30.0, 20.0, 0.0),
];
#[rustfmt::skip]
static INDICES_8: [u8; 35] = [
    0, 1, 2, 3, 0, 0, 4, 5, 5, 6, 7, 8, 9, 6, 6, 10,
    11, 11, 0, 6, 6, 1, 7, 7, 2, 8, 8, 3, 9, 9, 4, 10,
    10, 5, 11,
];

#[rustfmt::skip]
static VERTICES_9: [Vec3; 12] = [
    v(30.0, 20.0, 12.0), v(0.0, 20.0, 12.0), v(0.0, 40.0, 12.0),
    v(30.0, 40.0, 12.0), v(30.0, 0.0, 12.0), v(0.0, 0.0, 12.0),
    v(30.0, 20.0, 0.0), v(0.0, 20.0, 0.0), v(0.0, 40.0, 0.0),
    v(30.0, 40.0, 0.0), v(30.0, 0.0, 0.0), v(0.0, 0.0, 0.0),
];
#[rustfmt::skip]
static INDICES_9: [u8; 31] = [
    0, 1, 2, 3, 4, 5, 5, 6, 7, 8, 9, 10, 11, 11, 0, 6,
    6, 1, 7, 7, 2, 8, 8, 3, 9, 9, 4, 10, 10, 5, 11,
];
