//! Tests for turning file names into captions

#[cfg(test)]
mod tests {
    use imagecollage::annotation::filename_to_annotation;
    use std::path::Path;

    fn label(name: &str) -> String {
        filename_to_annotation(Path::new(name), "__")
    }

    // Tests counter prefix removal, line breaks and underscores together
    #[test]
    fn test_full_transformation() {
        assert_eq!(label("03_holiday__beach_trip.jpg"), "Holiday\nbeach trip");
    }

    // Tests the stem is lowercased before the first letter is raised
    #[test]
    fn test_lowercased_then_capitalized() {
        assert_eq!(label("/photos/12 My Dog.JPG"), "My dog");
        assert_eq!(label("SUNSET.png"), "Sunset");
    }

    // Tests accents are decomposed and other non-ASCII text is dropped
    #[test]
    fn test_ascii_folding() {
        assert_eq!(label("Café_Crème.png"), "Cafe creme");
        assert_eq!(label("日本_trip.jpg"), "Trip");
    }

    // Tests names made only of digits produce an empty caption
    #[test]
    fn test_digits_only() {
        assert_eq!(label("2021.jpg"), "");
        assert_eq!(label("007_.png"), "");
    }

    // Tests only leading digits are removed
    #[test]
    fn test_inner_digits_kept() {
        assert_eq!(label("1_route_66.jpg"), "Route 66");
    }

    // Tests a custom delimiter and an empty one
    #[test]
    fn test_delimiters() {
        assert_eq!(
            filename_to_annotation(Path::new("paris-day_one.png"), "-"),
            "Paris\nday one"
        );
        assert_eq!(filename_to_annotation(Path::new("a__b.png"), ""), "A  b");
    }

    // Tests files without an extension
    #[test]
    fn test_no_extension() {
        assert_eq!(label("notes"), "Notes");
    }
}
