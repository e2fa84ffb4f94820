//! Filename captions burned into source images

/// Caption text derived from file names
pub mod label;
/// Caption drawing
pub mod overlay;

pub use label::filename_to_annotation;
pub use overlay::Annotator;
