//! Tests for collage composition and encoding of whole pages

#[cfg(test)]
mod tests {
    use super::super::solid;
    use image::{GenericImageView, Rgb};
    use imagecollage::ConversionError;
    use imagecollage::compose::{Color, Compositor, OutputFormat, SourceImage};
    use imagecollage::layout::{Layout, LayoutOptions, Size};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const COLORS: [[u8; 3]; 4] = [[255, 0, 0], [0, 255, 0], [0, 0, 255], [255, 255, 0]];

    fn compositor(layout: Layout) -> Compositor {
        Compositor {
            canvas: Size::new(200, 200),
            background: Color::new(40, 40, 40),
            layout,
            options: LayoutOptions::default(),
            format: OutputFormat::Png,
        }
    }

    fn batch() -> Vec<SourceImage> {
        COLORS
            .iter()
            .enumerate()
            .map(|(i, rgb)| SourceImage::from_image(format!("{i}.png"), solid(100, 100, *rgb)))
            .collect()
    }

    // Tests grid cells receive images in batch order
    #[test]
    fn test_render_grid() {
        let canvas = compositor(Layout::Grid).render(&batch(), &mut StdRng::seed_from_u64(0));
        let pixels = canvas.pixels();

        assert_eq!(*pixels.get_pixel(50, 50), Rgb(COLORS[0]));
        assert_eq!(*pixels.get_pixel(150, 50), Rgb(COLORS[1]));
        assert_eq!(*pixels.get_pixel(50, 150), Rgb(COLORS[2]));
        assert_eq!(*pixels.get_pixel(150, 150), Rgb(COLORS[3]));
    }

    // Tests the planned directive has one entry per image
    #[test]
    fn test_plan() {
        let placements = compositor(Layout::Grid).plan(&batch(), &mut StdRng::seed_from_u64(0));

        assert_eq!(placements.len(), 4);
        assert!(placements.iter().all(|p| p.rect.width == 100 && p.rect.height == 100));
    }

    // Tests an empty batch renders only background
    #[test]
    fn test_render_empty_batch() {
        let canvas = compositor(Layout::Auto).render(&[], &mut StdRng::seed_from_u64(0));

        assert_eq!(canvas.size(), Size::new(200, 200));
        assert!(canvas.pixels().pixels().all(|p| *p == Rgb([40, 40, 40])));
    }

    // Tests padding leaves background visible between images
    #[test]
    fn test_render_padding_shows_background() {
        let mut padded = compositor(Layout::Grid);
        padded.options.padding = 10;

        let canvas = padded.render(&batch(), &mut StdRng::seed_from_u64(0));

        assert_eq!(*canvas.pixels().get_pixel(5, 5), Rgb([40, 40, 40]));
        assert_eq!(*canvas.pixels().get_pixel(100, 100), Rgb([40, 40, 40]));
        // Resampled into an 85 pixel cell, so allow rounding
        let inside = canvas.pixels().get_pixel(50, 50).0;
        assert!(inside.iter().zip(COLORS[0]).all(|(&a, b)| a.abs_diff(b) <= 1));
    }

    // Tests compose produces an encoded page of the canvas size
    #[test]
    fn test_compose_encodes_page() {
        let bytes = compositor(Layout::GoldenRatio)
            .compose(&batch(), &mut StdRng::seed_from_u64(0))
            .unwrap();

        let page = image::load_from_memory(&bytes).unwrap();
        assert_eq!(page.dimensions(), (200, 200));
    }

    // Tests one undecodable file fails the whole page
    #[test]
    fn test_compose_files_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.png");
        solid(10, 10, [1, 2, 3]).save(&good).unwrap();
        let bad = dir.path().join("bad.png");
        std::fs::write(&bad, b"not a png").unwrap();

        let result = compositor(Layout::Grid)
            .compose_files(&[good, bad.clone()], &mut StdRng::seed_from_u64(0));

        assert!(matches!(
            result,
            Err(ConversionError::UnreadableImage { path, .. }) if path == bad
        ));
    }
}
