//! Conversion of generated images into black-and-white line art.

mod transcoder;

pub use transcoder::{ImageTranscoder, LineArtTranscoder};
