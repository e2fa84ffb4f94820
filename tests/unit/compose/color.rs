//! Tests for background color parsing and formatting

#[cfg(test)]
mod tests {
    use imagecollage::ConversionError;
    use imagecollage::compose::Color;
    use image::Rgb;

    // Tests long and short hex forms
    #[test]
    fn test_parse_hex() {
        assert_eq!("#1A2b3C".parse::<Color>().unwrap(), Color::new(0x1a, 0x2b, 0x3c));
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!(" #000000 ".parse::<Color>().unwrap(), Color::BLACK);
        assert_eq!("#a0c".parse::<Color>().unwrap(), Color::new(0xaa, 0x00, 0xcc));
    }

    // Tests named colors are case-insensitive
    #[test]
    fn test_parse_names() {
        assert_eq!("Black".parse::<Color>().unwrap(), Color::BLACK);
        assert_eq!("WHITE".parse::<Color>().unwrap(), Color::WHITE);
    }

    // Tests malformed values are reported against the background parameter
    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["fff", "#ggg", "#12345", "#1234567", "", "#", "#ééé", "red"] {
            let error = input.parse::<Color>().unwrap_err();
            assert!(
                matches!(
                    error,
                    ConversionError::InvalidParameter {
                        parameter: "background",
                        ..
                    }
                ),
                "{input:?} gave {error}"
            );
        }
    }

    // Tests display uses lowercase long hex that parses back
    #[test]
    fn test_display() {
        let color = Color::new(0xAB, 0x01, 0xFF);

        assert_eq!(color.to_string(), "#ab01ff");
        assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
    }

    // Tests conversion to an image pixel
    #[test]
    fn test_to_rgb() {
        assert_eq!(Color::new(1, 2, 3).to_rgb(), Rgb([1, 2, 3]));
        assert_eq!(Color::default(), Color::BLACK);
    }
}
