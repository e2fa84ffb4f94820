//! Canvas composition and page encoding

/// Raster canvas with fit-to-fill pasting
pub mod canvas;
/// Background color parsing
pub mod color;
/// Layout dispatch onto a canvas
pub mod compositor;
/// Lossy and lossless page encodings
pub mod encoding;
/// Decoded input images
pub mod source;

pub use canvas::Canvas;
pub use color::Color;
pub use compositor::Compositor;
pub use encoding::OutputFormat;
pub use source::SourceImage;
