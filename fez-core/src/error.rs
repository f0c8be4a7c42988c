/// Errors raised while setting up the clock face
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FaceError {
    #[error("glyph for digit {digit} has {vertices} vertices, at most {capacity} are supported")]
    GlyphTooLarge {
        digit: usize,
        vertices: usize,
        capacity: usize,
    },

    #[error("glyph for digit {digit} references vertex {index} but only has {vertices}")]
    IndexOutOfRange {
        digit: usize,
        index: usize,
        vertices: usize,
    },

    #[error("time of day {hour:02}:{minute:02} is out of range")]
    InvalidTime { hour: u32, minute: u32 },

    #[error("malformed time of day '{0}', expected HH:MM")]
    MalformedTime(String),
}
