//! Glue between the sources and the extractors.
//!
//! Pages go through structured data first and fall back to the HTML class
//! heuristics; OCR text goes through the OCR segmenter. Every path ends in the
//! ingredient normalizer.

pub mod html;
pub mod image;
pub mod text;
pub mod url;

use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::extractors::{HtmlClassExtractor, JsonLdExtractor, OcrTextExtractor};
use crate::images_to_text::{ImageSource, TextRecognizer};
use crate::model::{Ingredient, ParsedRecipe};
use crate::url_to_text::fetchers::DocumentFetcher;

/// Holds the configured extractors. Stateless between calls, so one instance
/// can serve concurrent imports.
#[derive(Debug, Clone)]
pub struct RecipeExtractionPipeline {
    config: ImportConfig,
    structured: JsonLdExtractor,
    fallback: HtmlClassExtractor,
    ocr: OcrTextExtractor,
}

impl Default for RecipeExtractionPipeline {
    fn default() -> Self {
        Self::new(ImportConfig::default())
    }
}

impl RecipeExtractionPipeline {
    pub fn new(config: ImportConfig) -> Self {
        Self {
            structured: JsonLdExtractor,
            fallback: HtmlClassExtractor::new(&config.extraction),
            ocr: OcrTextExtractor::new(&config.extraction),
            config,
        }
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Extracts a recipe from an already-fetched page.
    pub fn from_html(&self, html: &str, source_url: &str) -> ParsedRecipe {
        html::process(&self.structured, &self.fallback, html, source_url)
    }

    /// Extracts a recipe from concatenated OCR text.
    pub fn from_ocr_text(&self, text: &str) -> ParsedRecipe {
        text::process(&self.ocr, text)
    }

    /// Bulk ingredient text: normalizes each non-blank line, nothing else.
    pub fn ingredients_from_text(&self, text: &str) -> Vec<Ingredient> {
        text::ingredients(text)
    }

    /// Fetches `url` with `fetcher` and extracts a recipe from the result.
    pub async fn from_url(
        &self,
        fetcher: &dyn DocumentFetcher,
        url: &str,
    ) -> Result<ParsedRecipe, ImportError> {
        url::process(self, fetcher, url).await
    }

    /// Recognizes `images` in order with `recognizer` and extracts a recipe.
    pub async fn from_images(
        &self,
        recognizer: &dyn TextRecognizer,
        images: &[ImageSource],
    ) -> Result<ParsedRecipe, ImportError> {
        image::process(self, recognizer, images).await
    }
}
