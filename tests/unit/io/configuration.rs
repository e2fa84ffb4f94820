//! Tests for layout modes and resolution parsing

#[cfg(test)]
mod tests {
    use imagecollage::ConversionError;
    use imagecollage::io::configuration::{
        IMAGE_EXTENSIONS, LayoutMode, MAX_CANVAS_DIMENSION, Resolution,
    };
    use imagecollage::layout::{LaneOrientation, Layout, Size};

    // Tests each mode's collage algorithm
    #[test]
    fn test_collage_layouts() {
        assert_eq!(LayoutMode::Grid.collage_layout(), Some(Layout::Grid));
        assert_eq!(LayoutMode::Auto.collage_layout(), Some(Layout::Auto));
        assert_eq!(
            LayoutMode::Lane.collage_layout(),
            Some(Layout::Lane(LaneOrientation::Horizontal))
        );
        assert_eq!(LayoutMode::Document.collage_layout(), None);
    }

    // Tests which modes print in portrait
    #[test]
    fn test_portrait_modes() {
        assert!(LayoutMode::Lane.is_portrait());
        assert!(LayoutMode::Document.is_portrait());
        assert!(!LayoutMode::Grid.is_portrait());
        assert!(!LayoutMode::Auto.is_portrait());
        assert_eq!(LayoutMode::default(), LayoutMode::Grid);
    }

    // Tests the named presets
    #[test]
    fn test_presets() {
        assert_eq!("big".parse::<Resolution>().unwrap(), Resolution::new(1754, 1240));
        assert_eq!("Medium".parse::<Resolution>().unwrap(), Resolution::new(877, 620));
        assert_eq!("SMALL".parse::<Resolution>().unwrap(), Resolution::new(584, 413));
        assert_eq!(Resolution::default(), Resolution::BIG);
        assert_eq!(Resolution::SMALL.size(), Size::new(584, 413));
    }

    // Tests explicit dimensions with each separator
    #[test]
    fn test_custom_dimensions() {
        assert_eq!("800x600".parse::<Resolution>().unwrap(), Resolution::new(800, 600));
        assert_eq!(" 1024 X 768 ".parse::<Resolution>().unwrap(), Resolution::new(1024, 768));
        assert_eq!("640×480".parse::<Resolution>().unwrap(), Resolution::new(640, 480));
    }

    // Tests zero, oversized and malformed dimensions are rejected
    #[test]
    fn test_invalid_dimensions() {
        let too_big = format!("{}x10", MAX_CANVAS_DIMENSION + 1);
        for input in ["0x10", "10x0", "-5x10", "axb", "800", "800x", too_big.as_str()] {
            assert!(
                matches!(
                    input.parse::<Resolution>(),
                    Err(ConversionError::InvalidParameter {
                        parameter: "resolution",
                        ..
                    })
                ),
                "{input} was accepted"
            );
        }
        assert!(format!("{MAX_CANVAS_DIMENSION}x10").parse::<Resolution>().is_ok());
    }

    // Tests display matches the accepted input form
    #[test]
    fn test_display() {
        assert_eq!(Resolution::new(300, 200).to_string(), "300x200");
        assert_eq!(
            Resolution::MEDIUM.to_string().parse::<Resolution>().unwrap(),
            Resolution::MEDIUM
        );
    }

    // Tests the recognised extensions are lowercase
    #[test]
    fn test_image_extensions() {
        assert!(IMAGE_EXTENSIONS.iter().all(|ext| *ext == ext.to_lowercase()));
        assert!(IMAGE_EXTENSIONS.contains(&"jpeg"));
    }
}
