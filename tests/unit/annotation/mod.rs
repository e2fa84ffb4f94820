pub mod label;

use imagecollage::annotation::Annotator;
use imagecollage::io::configuration::FONT_SEARCH_PATHS;
use std::path::Path;

/// First installed system font, if the machine has one
pub fn system_font() -> Option<Annotator> {
    FONT_SEARCH_PATHS
        .iter()
        .map(Path::new)
        .find(|path| path.is_file())
        .map(|path| Annotator::from_file(path).unwrap())
}
