//! Partitioning of image lists into pages and PDF files

use crate::io::error::{Result, invalid_parameter};
use std::path::{Path, PathBuf};

/// Work assigned to one output PDF
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfPlan {
    /// Destination file
    pub output: PathBuf,
    /// Image batches, one per page, in order
    pub pages: Vec<Vec<PathBuf>>,
}

impl PdfPlan {
    /// Number of source images across all pages
    pub fn image_count(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }
}

/// Number of PDFs needed for `images` images
///
/// `page_size` and `pdf_size` must be positive.
pub const fn pdf_count(images: usize, page_size: usize, pdf_size: usize) -> usize {
    images.div_ceil(page_size.saturating_mul(pdf_size))
}

/// Split `items` into PDF groups of `page_size * pdf_size` items, each divided
/// into pages of `page_size` items
///
/// Order is preserved; only the final page and PDF may be short.
///
/// # Errors
///
/// Returns an error if either size is zero
pub fn partition<T: Clone>(
    items: &[T],
    page_size: usize,
    pdf_size: usize,
) -> Result<Vec<Vec<Vec<T>>>> {
    if page_size == 0 {
        return Err(invalid_parameter("images_per_page", &page_size, &"must be at least 1"));
    }
    if pdf_size == 0 {
        return Err(invalid_parameter("max_pages_per_pdf", &pdf_size, &"must be at least 1"));
    }
    let per_pdf = page_size.saturating_mul(pdf_size);

    Ok(items
        .chunks(per_pdf)
        .map(|pdf| pdf.chunks(page_size).map(<[T]>::to_vec).collect())
        .collect())
}

/// Output path of PDF number `number` (1-based) out of `total`
///
/// A single PDF keeps `base` unchanged. Otherwise the number is zero-padded to
/// the digit count of `total` and appended to the stem after an underscore.
pub fn numbered_output_path(base: &Path, number: usize, total: usize) -> PathBuf {
    if total <= 1 {
        return base.to_path_buf();
    }
    let width = total.to_string().len();
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let name = match base.extension() {
        Some(ext) => format!("{stem}_{number:0width$}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{number:0width$}"),
    };
    base.with_file_name(name)
}

/// Assign `images` to PDFs and pages
///
/// # Errors
///
/// Returns an error if either size is zero
pub fn plan(
    images: &[PathBuf],
    output: &Path,
    page_size: usize,
    pdf_size: usize,
) -> Result<Vec<PdfPlan>> {
    let groups = partition(images, page_size, pdf_size)?;
    let total = groups.len();
    Ok(groups
        .into_iter()
        .enumerate()
        .map(|(index, pages)| PdfPlan {
            output: numbered_output_path(output, index + 1, total),
            pages,
        })
        .collect())
}
