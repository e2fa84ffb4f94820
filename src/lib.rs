//! Collage layout engine and converter from image directories to paginated PDFs
//!
//! Images are partitioned into pages and PDF files, each page is composed
//! onto a fixed-size canvas by one of several layouts (grid, lanes,
//! golden-ratio subdivision, or an automatic choice between them), and the
//! rendered pages are assembled into A4 PDFs.

#![forbid(unsafe_code)]

/// Filename captions burned into images
pub mod annotation;
/// Page partitioning and the conversion pipeline
pub mod batch;
/// Canvas composition and encoding
pub mod compose;
/// Input/output operations and error handling
pub mod io;
/// Geometric placement of images on a canvas
pub mod layout;

pub use io::error::{ConversionError, Result};
