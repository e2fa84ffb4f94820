//! End-to-end conversion of image lists into collage PDFs

use crate::annotation::{Annotator, filename_to_annotation};
use crate::batch::planner::{self, PdfPlan};
use crate::batch::settings::PageSettings;
use crate::compose::{Color, Compositor, OutputFormat, SourceImage};
use crate::io::configuration::{
    DEFAULT_IMAGES_PER_PAGE, DEFAULT_MAX_PAGES_PER_PDF, DEFAULT_NEWLINE_DELIMITER,
    DEFAULT_PADDING, LayoutMode, MAX_CANVAS_DIMENSION, Resolution,
};
use crate::io::discovery::collect_images;
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::pdf::{Page, PdfAssembler, validate_output_path};
use crate::io::progress::{Progress, ProgressSink};
use crate::layout::LayoutOptions;
use image::imageops::FilterType;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing::{Dispatch, debug, info, instrument, warn};

/// Parameters of a conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Images composed onto one page (ignored in document mode)
    pub images_per_page: usize,
    /// Pages per PDF before a new file is started
    pub max_pages_per_pdf: usize,
    /// Page arrangement
    pub layout: LayoutMode,
    /// Canvas resolution before orientation is applied
    pub resolution: Resolution,
    /// Burn file name captions into images
    pub annotate: bool,
    /// Font for captions, discovered from the system when absent
    pub font: Option<PathBuf>,
    /// Sequence in file names that becomes a caption line break
    pub newline_delimiter: String,
    /// Canvas background
    pub background: Color,
    /// Page image encoding
    pub format: OutputFormat,
    /// Gap between collage images
    pub padding: u32,
    /// Shuffle images within each page
    pub randomize: bool,
    /// Center arrangements that do not fill the canvas
    pub centered: bool,
    /// Seed for randomized layouts, drawn from the OS when absent
    pub seed: Option<u64>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            images_per_page: DEFAULT_IMAGES_PER_PAGE,
            max_pages_per_pdf: DEFAULT_MAX_PAGES_PER_PDF,
            layout: LayoutMode::default(),
            resolution: Resolution::default(),
            annotate: false,
            font: None,
            newline_delimiter: DEFAULT_NEWLINE_DELIMITER.to_string(),
            background: Color::BLACK,
            format: OutputFormat::default(),
            padding: DEFAULT_PADDING,
            randomize: false,
            centered: false,
            seed: None,
        }
    }
}

impl ConversionConfig {
    /// Check parameter ranges
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConversionError::InvalidParameter`] naming the first
    /// offending parameter
    pub fn validate(&self) -> Result<()> {
        if self.images_per_page == 0 {
            return Err(invalid_parameter(
                "images_per_page",
                &self.images_per_page,
                &"must be at least 1",
            ));
        }
        if self.max_pages_per_pdf == 0 {
            return Err(invalid_parameter(
                "max_pages_per_pdf",
                &self.max_pages_per_pdf,
                &"must be at least 1",
            ));
        }
        if self.resolution.width == 0 || self.resolution.height == 0 {
            return Err(invalid_parameter(
                "resolution",
                &self.resolution,
                &"dimensions must be positive",
            ));
        }
        if self.resolution.width > MAX_CANVAS_DIMENSION
            || self.resolution.height > MAX_CANVAS_DIMENSION
        {
            return Err(invalid_parameter(
                "resolution",
                &self.resolution,
                &format!("dimensions must not exceed {MAX_CANVAS_DIMENSION}"),
            ));
        }
        Ok(())
    }

    /// Page settings implied by the layout mode and resolution
    pub fn page_settings(&self) -> PageSettings {
        PageSettings::for_mode(self.layout, self.resolution, self.images_per_page)
    }

    fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            padding: self.padding,
            randomize: self.randomize,
            centered: self.centered,
        }
    }
}

/// Drives a conversion from image paths to finished PDF files
pub struct Converter {
    config: ConversionConfig,
    annotator: Option<Annotator>,
    dispatch: Option<Dispatch>,
}

impl Converter {
    /// Validate `config` and load the caption font when annotating
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is invalid or no font can be loaded
    pub fn new(config: ConversionConfig) -> Result<Self> {
        config.validate()?;
        let annotator = if config.annotate {
            Some(Annotator::discover(config.font.as_deref())?)
        } else {
            None
        };
        Ok(Self {
            config,
            annotator,
            dispatch: None,
        })
    }

    /// Use `annotator` for captions instead of the configured font
    #[must_use]
    pub fn with_annotator(mut self, annotator: Annotator) -> Self {
        self.annotator = Some(annotator);
        self
    }

    /// Send this converter's log events to `dispatch`
    ///
    /// Without a dispatcher, events go to whatever subscriber is current.
    #[must_use]
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    /// The run parameters
    pub const fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert every image below `input` into PDFs at `output`
    ///
    /// Returns the written PDF paths in order.
    ///
    /// # Errors
    ///
    /// Returns an error before any image is processed if `output` is not a
    /// PDF path in an existing directory or `input` does not exist, and
    /// afterwards if any image or PDF fails
    pub fn convert_directory(
        &self,
        input: &Path,
        output: &Path,
        progress: &mut dyn ProgressSink,
    ) -> Result<Vec<PathBuf>> {
        self.scoped(|| {
            validate_output_path(output)?;
            let images = collect_images(input)?;
            info!(input = %input.display(), images = images.len(), "Collected images");
            self.run(&images, output, progress)
        })
    }

    /// Convert `images` in the given order into PDFs at `output`
    ///
    /// # Errors
    ///
    /// Returns an error if the output path is invalid, an image cannot be
    /// read, or a PDF cannot be written. PDFs completed before the failure
    /// remain; no partial PDF is written.
    pub fn convert(
        &self,
        images: &[PathBuf],
        output: &Path,
        progress: &mut dyn ProgressSink,
    ) -> Result<Vec<PathBuf>> {
        self.scoped(|| {
            validate_output_path(output)?;
            self.run(images, output, progress)
        })
    }

    #[instrument(skip_all, fields(images = images.len(), layout = ?self.config.layout))]
    fn run(
        &self,
        images: &[PathBuf],
        output: &Path,
        progress: &mut dyn ProgressSink,
    ) -> Result<Vec<PathBuf>> {
        let settings = self.config.page_settings();
        let plans = planner::plan(
            images,
            output,
            settings.images_per_page,
            self.config.max_pages_per_pdf,
        )?;
        if plans.is_empty() {
            warn!("No images to convert, nothing written");
            return Ok(Vec::new());
        }

        let mut rng = self
            .config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let assembler = PdfAssembler::new(settings.orientation, settings.image_width_mm);
        let total = plans.len();
        let mut written = Vec::with_capacity(total);

        for (index, plan) in plans.iter().enumerate() {
            let pages = self.render_pdf_pages(plan, &settings, &mut rng, |done| {
                progress.report(Progress::from_counts(index, total, done, plan.pages.len()));
            })?;
            assembler.write(&pages, &plan.output)?;
            written.push(plan.output.clone());
            progress.report(Progress::from_counts(
                index + 1,
                total,
                plan.pages.len(),
                plan.pages.len(),
            ));
        }

        info!(pdfs = written.len(), "Conversion complete");
        Ok(written)
    }

    fn render_pdf_pages(
        &self,
        plan: &PdfPlan,
        settings: &PageSettings,
        rng: &mut StdRng,
        mut on_page: impl FnMut(usize),
    ) -> Result<Vec<Page>> {
        debug!(
            output = %plan.output.display(),
            pages = plan.pages.len(),
            images = plan.image_count(),
            "Rendering PDF"
        );
        let mut pages = Vec::with_capacity(plan.pages.len());
        for (done, batch) in plan.pages.iter().enumerate() {
            pages.push(self.render_page(batch, settings, rng)?);
            on_page(done + 1);
        }
        Ok(pages)
    }

    /// Render one page from `batch`
    ///
    /// Document mode turns the first image of the batch into the page
    /// directly; other modes compose a collage.
    ///
    /// # Errors
    ///
    /// Returns an error if an image cannot be decoded or the page cannot be
    /// encoded
    pub fn render_page(
        &self,
        batch: &[PathBuf],
        settings: &PageSettings,
        rng: &mut StdRng,
    ) -> Result<Page> {
        let origin = batch.first().cloned().unwrap_or_default();
        match self.config.layout.collage_layout() {
            None => self.render_document_page(&origin, settings),
            Some(layout) => {
                let sources = batch
                    .iter()
                    .map(|path| self.load_source(path))
                    .collect::<Result<Vec<_>>>()?;
                let compositor = Compositor {
                    canvas: settings.canvas,
                    background: self.config.background,
                    layout,
                    options: self.config.layout_options(),
                    format: self.config.format,
                };
                Ok(Page {
                    bytes: compositor.compose(&sources, rng)?,
                    origin,
                })
            }
        }
    }

    fn render_document_page(&self, path: &Path, settings: &PageSettings) -> Result<Page> {
        let source = self.load_source(path)?;
        let mut image = source.image;
        let mut modified = self.annotator.is_some();

        if let Some(bounds) = settings.shrink_to
            && (image.width() > bounds.width || image.height() > bounds.height)
        {
            image = image.resize(bounds.width, bounds.height, FilterType::Lanczos3);
            modified = true;
        }

        let bytes = if modified {
            self.config.format.encode(&image)?
        } else {
            std::fs::read(path).with_path(path, "read")?
        };
        Ok(Page {
            bytes,
            origin: path.to_path_buf(),
        })
    }

    fn load_source(&self, path: &Path) -> Result<SourceImage> {
        let mut source = SourceImage::open(path)?;
        if let Some(annotator) = &self.annotator {
            let label = filename_to_annotation(path, &self.config.newline_delimiter);
            source.image = annotator.annotate(&source.image, &label);
        }
        Ok(source)
    }

    fn scoped<T>(&self, run: impl FnOnce() -> T) -> T {
        match &self.dispatch {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, run),
            None => run(),
        }
    }
}
