//! Batch planning and the conversion pipeline

/// Conversion driver and run parameters
pub mod converter;
/// Page and PDF partitioning
pub mod planner;
/// Orientation and canvas sizing per layout mode
pub mod settings;

pub use converter::{ConversionConfig, Converter};
pub use planner::PdfPlan;
pub use settings::PageSettings;
