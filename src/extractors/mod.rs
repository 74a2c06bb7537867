use crate::model::ParsedRecipe;
use scraper::Html;

mod html_class;
mod json_ld;
mod ocr_text;

pub use self::html_class::{HtmlClassExtractor, NO_DIRECTIONS_PLACEHOLDER};
pub use self::json_ld::JsonLdExtractor;
pub use self::ocr_text::{OcrTextExtractor, NO_SCANNED_DIRECTIONS_PLACEHOLDER};

/// A fetched page: the final HTML and the URL it came from.
pub struct ParsingContext {
    pub url: String,
    pub document: Html,
}

impl ParsingContext {
    pub fn new(url: impl Into<String>, html: &str) -> Self {
        Self {
            url: url.into(),
            document: Html::parse_document(html),
        }
    }
}

/// An HTML extraction strategy. `None` means "nothing found, try the next one".
pub trait Extractor {
    fn parse(&self, context: &ParsingContext) -> Option<ParsedRecipe>;
}
