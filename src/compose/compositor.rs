//! Collage composition: canvas allocation, layout dispatch and encoding

use crate::compose::canvas::Canvas;
use crate::compose::color::Color;
use crate::compose::encoding::OutputFormat;
use crate::compose::source::SourceImage;
use crate::io::error::Result;
use crate::layout::{Layout, LayoutOptions, Placement, Size};
use rand::rngs::StdRng;
use std::path::Path;
use tracing::{debug, instrument};

/// Renders one batch of images into an encoded collage page
#[derive(Debug, Clone, Copy)]
pub struct Compositor {
    /// Canvas dimensions
    pub canvas: Size,
    /// Fill color behind and between images
    pub background: Color,
    /// Algorithm deciding where images go
    pub layout: Layout,
    /// Padding, randomization and centering
    pub options: LayoutOptions,
    /// Encoding of the rendered page
    pub format: OutputFormat,
}

impl Compositor {
    /// Plan the placement directive for `batch` without rendering it
    pub fn plan(&self, batch: &[SourceImage], rng: &mut StdRng) -> Vec<Placement> {
        let sizes: Vec<Size> = batch.iter().map(SourceImage::size).collect();
        self.layout.plan(&sizes, self.canvas, &self.options, rng)
    }

    /// Render `batch` onto a fresh canvas
    ///
    /// An empty batch yields a blank canvas.
    pub fn render(&self, batch: &[SourceImage], rng: &mut StdRng) -> Canvas {
        let mut canvas = Canvas::new(self.canvas, self.background);
        let sizes: Vec<Size> = batch.iter().map(SourceImage::size).collect();
        let layout = self.layout.resolve(&sizes);
        let placements = layout.plan(&sizes, self.canvas, &self.options, rng);

        for placement in &placements {
            if let Some(source) = batch.get(placement.source) {
                canvas.paste_fitted(&source.image, placement.rect);
            }
        }

        debug!(
            images = batch.len(),
            placed = placements.len(),
            ?layout,
            "Collage rendered"
        );
        canvas
    }

    /// Render `batch` and encode the result
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot be encoded
    #[instrument(skip_all, fields(images = batch.len(), format = %self.format))]
    pub fn compose(&self, batch: &[SourceImage], rng: &mut StdRng) -> Result<Vec<u8>> {
        let canvas = self.render(batch, rng);
        self.format.encode(&canvas.into_image())
    }

    /// Decode the images at `paths` and compose them
    ///
    /// # Errors
    ///
    /// Returns an error if any image cannot be decoded; no partial collage is
    /// produced
    pub fn compose_files<P: AsRef<Path>>(&self, paths: &[P], rng: &mut StdRng) -> Result<Vec<u8>> {
        let batch = paths
            .iter()
            .map(|path| SourceImage::open(path.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.compose(&batch, rng)
    }
}
