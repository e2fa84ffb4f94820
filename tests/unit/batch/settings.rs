//! Tests for page geometry per layout mode

#[cfg(test)]
mod tests {
    use imagecollage::batch::PageSettings;
    use imagecollage::io::configuration::{
        DOCUMENT_IMAGE_WIDTH_MM, LayoutMode, PAGE_IMAGE_WIDTH_MM, Resolution,
    };
    use imagecollage::io::pdf::Orientation;
    use imagecollage::layout::Size;

    // Tests collage modes keep the resolution in landscape
    #[test]
    fn test_landscape_modes() {
        for mode in [LayoutMode::Grid, LayoutMode::Auto] {
            let settings = PageSettings::for_mode(mode, Resolution::BIG, 10);

            assert_eq!(settings.orientation, Orientation::Landscape);
            assert_eq!(settings.canvas, Size::new(1754, 1240));
            assert_eq!(settings.shrink_to, None);
            assert!((settings.image_width_mm - PAGE_IMAGE_WIDTH_MM).abs() < f32::EPSILON);
            assert_eq!(settings.images_per_page, 10);
        }
    }

    // Tests lane pages are portrait with the resolution rotated
    #[test]
    fn test_lane_mode_is_portrait() {
        let settings = PageSettings::for_mode(LayoutMode::Lane, Resolution::MEDIUM, 4);

        assert_eq!(settings.orientation, Orientation::Portrait);
        assert_eq!(settings.canvas, Size::new(620, 877));
        assert_eq!(settings.shrink_to, None);
        assert_eq!(settings.images_per_page, 4);
    }

    // Tests document pages hold one image shrunk into the rotated resolution
    #[test]
    fn test_document_mode() {
        let settings = PageSettings::for_mode(LayoutMode::Document, Resolution::SMALL, 10);

        assert_eq!(settings.orientation, Orientation::Portrait);
        assert_eq!(settings.canvas, Size::new(413, 584));
        assert_eq!(settings.shrink_to, Some(Size::new(413, 584)));
        assert!((settings.image_width_mm - DOCUMENT_IMAGE_WIDTH_MM).abs() < f32::EPSILON);
        assert_eq!(settings.images_per_page, 1);
    }
}
