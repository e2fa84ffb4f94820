//! PDF assembly: one page image per A4 page, written atomically

use crate::io::configuration::{A4_PORTRAIT_MM, PAGE_IMAGE_DPI};
use crate::io::error::{ConversionError, Result, WithPath, invalid_output};
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Paper orientation of every page in a PDF
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Long side vertical
    Portrait,
    /// Long side horizontal
    Landscape,
}

impl Orientation {
    /// A4 page dimensions (width, height) in millimetres
    pub const fn a4_mm(self) -> (f32, f32) {
        let (short, long) = A4_PORTRAIT_MM;
        match self {
            Self::Portrait => (short, long),
            Self::Landscape => (long, short),
        }
    }
}

/// Encoded raster image destined for one PDF page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Encoded image bytes (PNG, JPEG or an untouched source file)
    pub bytes: Vec<u8>,
    /// What the page was made from, for error messages
    pub origin: PathBuf,
}

/// Where an image lands on a page, in points from the bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlacement {
    /// Left edge
    pub translate_x: f32,
    /// Bottom edge
    pub translate_y: f32,
    /// Scale applied to the image's native size at [`PAGE_IMAGE_DPI`]
    pub scale: f32,
}

/// Anchor an image of `pixels` size at the top-left corner of the page,
/// scaled to `width_mm` wide
pub fn top_left_placement(pixels: (u32, u32), page_height_mm: f32, width_mm: f32) -> ImagePlacement {
    let (width_px, height_px) = pixels;
    let native_width_pt = width_px.max(1) as f32 / PAGE_IMAGE_DPI * 72.0;
    let native_height_pt = height_px as f32 / PAGE_IMAGE_DPI * 72.0;
    let scale = Mm(width_mm).into_pt().0 / native_width_pt;
    let page_height_pt = Mm(page_height_mm).into_pt().0;

    ImagePlacement {
        translate_x: 0.0,
        translate_y: page_height_pt - native_height_pt * scale,
        scale,
    }
}

/// Builds PDFs from page images
#[derive(Debug, Clone, Copy)]
pub struct PdfAssembler {
    /// Paper orientation
    pub orientation: Orientation,
    /// Printed width of each page image
    pub image_width_mm: f32,
}

impl PdfAssembler {
    /// Create an assembler
    pub const fn new(orientation: Orientation, image_width_mm: f32) -> Self {
        Self {
            orientation,
            image_width_mm,
        }
    }

    /// Assemble `pages` into an in-memory PDF
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::UnreadableImage`] if a page cannot be decoded
    #[instrument(skip_all, fields(pages = pages.len(), orientation = ?self.orientation))]
    pub fn assemble(&self, title: &str, pages: &[Page]) -> Result<Vec<u8>> {
        let (page_w, page_h) = self.orientation.a4_mm();
        let mut doc = PdfDocument::new(title);
        let mut pdf_pages = Vec::with_capacity(pages.len());

        for page in pages {
            let decoded = image::load_from_memory(&page.bytes).with_path(&page.origin, "decode")?;
            let (width, height) = (decoded.width(), decoded.height());
            let raw = RawImage {
                pixels: RawImageData::U8(decoded.to_rgb8().into_raw()),
                width: width as usize,
                height: height as usize,
                data_format: RawImageFormat::RGB8,
                tag: Vec::new(),
            };
            let xobject_id = doc.add_image(&raw);

            let placement = top_left_placement((width, height), page_h, self.image_width_mm);
            let ops = vec![Op::UseXobject {
                id: xobject_id,
                transform: XObjectTransform {
                    translate_x: Some(Pt(placement.translate_x)),
                    translate_y: Some(Pt(placement.translate_y)),
                    scale_x: Some(placement.scale),
                    scale_y: Some(placement.scale),
                    dpi: Some(PAGE_IMAGE_DPI),
                    rotate: None,
                },
            }];
            pdf_pages.push(PdfPage::new(Mm(page_w), Mm(page_h), ops));
        }

        doc.with_pages(pdf_pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);
        debug!(
            bytes = output.len(),
            warnings = warnings.len(),
            "PDF serialised"
        );
        Ok(output)
    }

    /// Assemble `pages` and write the PDF to `path`
    ///
    /// # Errors
    ///
    /// Returns an error if assembly or writing fails; `path` is left untouched
    /// in that case
    pub fn write(&self, pages: &[Page], path: &Path) -> Result<()> {
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let bytes = self.assemble(&title, pages)?;
        write_atomic(&bytes, path)?;
        info!(path = %path.display(), pages = pages.len(), "Created PDF");
        Ok(())
    }
}

/// Write `bytes` to `path` through a temporary file in the same directory
///
/// Readers never observe a partially written file, and a failed write leaves
/// no file behind.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created, written or
/// renamed into place
pub fn write_atomic(bytes: &[u8], path: &Path) -> Result<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged =
        tempfile::NamedTempFile::new_in(directory).with_path(directory, "create temporary file")?;
    staged.write_all(bytes).with_path(staged.path(), "write")?;
    staged
        .as_file()
        .sync_all()
        .with_path(path, "flush")?;
    staged
        .persist(path)
        .map_err(|err| ConversionError::FileSystem {
            path: path.to_path_buf(),
            operation: "rename into place",
            source: err.error,
        })?;
    Ok(())
}

/// Check that `path` names a PDF inside an existing directory
///
/// # Errors
///
/// Returns [`ConversionError::InvalidOutputPath`] otherwise
pub fn validate_output_path(path: &Path) -> Result<()> {
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if !is_pdf {
        return Err(invalid_output(path, &"file extension must be .pdf"));
    }
    if path.is_dir() {
        return Err(invalid_output(path, &"path is a directory"));
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => Err(invalid_output(
            path,
            &format!("directory '{}' does not exist", parent.display()),
        )),
        _ => Ok(()),
    }
}
