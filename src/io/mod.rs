//! Input/output operations, configuration and error handling

/// Command-line interface
pub mod cli;
/// Constants, defaults and typed parameter values
pub mod configuration;
/// Image file discovery
pub mod discovery;
/// Error types
pub mod error;
/// PDF assembly and atomic output
pub mod pdf;
/// Progress reporting
pub mod progress;
