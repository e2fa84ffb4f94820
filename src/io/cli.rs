//! Command-line interface for converting image directories into collage PDFs

use crate::batch::{ConversionConfig, Converter};
use crate::compose::{Color, OutputFormat};
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_IMAGES_PER_PAGE, DEFAULT_MAX_PAGES_PER_PDF,
    DEFAULT_NEWLINE_DELIMITER, DEFAULT_PADDING, LayoutMode, Resolution,
};
use crate::io::error::Result;
use crate::io::progress::{NoProgress, ProgressManager};
use clap::Parser;
use std::path::PathBuf;
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "imagecollage")]
#[command(
    author,
    version,
    about = "Arrange a directory of images into paginated collage PDFs"
)]
/// Command-line arguments for the conversion tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory scanned recursively for jpg, jpeg, png, gif and bmp files
    #[arg(value_name = "IMAGE_DIR")]
    pub image_dir: PathBuf,

    /// Output PDF; numbered copies are written when several PDFs are needed
    #[arg(value_name = "OUTPUT_PDF")]
    pub output: PathBuf,

    /// Images arranged on each page
    #[arg(short = 'n', long, default_value_t = DEFAULT_IMAGES_PER_PAGE)]
    pub images_per_page: usize,

    /// Pages written into each PDF
    #[arg(short = 'p', long, default_value_t = DEFAULT_MAX_PAGES_PER_PDF)]
    pub max_pages_per_pdf: usize,

    /// Page layout (document places one image per page)
    #[arg(short, long, value_enum, default_value_t = LayoutMode::Grid)]
    pub layout: LayoutMode,

    /// Canvas resolution: big, medium, small or WIDTHxHEIGHT
    #[arg(short, long, default_value = "big")]
    pub resolution: Resolution,

    /// Burn a caption derived from each file name into the image
    #[arg(short, long)]
    pub annotate: bool,

    /// TrueType font for captions (a system font is used when omitted)
    #[arg(long, value_name = "FONT")]
    pub font: Option<PathBuf>,

    /// File name sequence that starts a new caption line
    #[arg(long, default_value = DEFAULT_NEWLINE_DELIMITER)]
    pub newline_delimiter: String,

    /// Canvas background as #rgb or #rrggbb
    #[arg(short, long, default_value = DEFAULT_BACKGROUND)]
    pub background: Color,

    /// Encoding of rendered pages
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Gap between images in pixels
    #[arg(long, default_value_t = DEFAULT_PADDING)]
    pub padding: u32,

    /// Shuffle images within each page
    #[arg(long)]
    pub randomize: bool,

    /// Center arrangements that do not fill the page
    #[arg(short, long)]
    pub center: bool,

    /// Seed for reproducible randomized layouts
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Conversion parameters selected on the command line
    pub fn to_config(&self) -> ConversionConfig {
        ConversionConfig {
            images_per_page: self.images_per_page,
            max_pages_per_pdf: self.max_pages_per_pdf,
            layout: self.layout,
            resolution: self.resolution,
            annotate: self.annotate,
            font: self.font.clone(),
            newline_delimiter: self.newline_delimiter.clone(),
            background: self.background,
            format: self.format,
            padding: self.padding,
            randomize: self.randomize,
            centered: self.center,
            seed: self.seed,
        }
    }
}

/// Log sink for a run: formatted to stderr, or silent when `quiet`
///
/// The filter honours `RUST_LOG` and defaults to `info`.
pub fn log_dispatch(quiet: bool) -> Dispatch {
    if quiet {
        return Dispatch::none();
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    Dispatch::new(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .finish(),
    )
}

/// Runs a conversion described by CLI arguments
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Convert the image directory into PDFs, returning the written paths
    ///
    /// # Errors
    ///
    /// Returns an error if validation, image decoding or PDF writing fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let converter =
            Converter::new(self.cli.to_config())?.with_dispatch(log_dispatch(self.cli.quiet));

        match self.progress_manager.as_mut() {
            Some(pm) => {
                let written = converter.convert_directory(&self.cli.image_dir, &self.cli.output, pm);
                pm.finish();
                written
            }
            None => converter.convert_directory(
                &self.cli.image_dir,
                &self.cli.output,
                &mut NoProgress,
            ),
        }
    }
}
