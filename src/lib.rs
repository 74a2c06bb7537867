//! Heuristic recipe extraction.
//!
//! Turns a fetched recipe page or the OCR text of photographed recipe pages
//! into a [`ParsedRecipe`]. Pages are read from schema.org JSON-LD when present
//! and from common recipe-plugin markup otherwise; OCR text is segmented into
//! title, ingredients and directions by keyword heuristics. Every ingredient
//! line is split into amount, unit and name.
//!
//! Extraction is synchronous and never fails. Only the collaborator edges
//! (fetching a page, recognizing an image) return errors.

pub mod builder;
pub mod config;
pub mod error;
pub mod extractors;
pub mod images_to_text;
pub mod ingredients;
pub mod model;
pub mod pipelines;
pub mod url_to_text;

pub use builder::{ImportResult, InputSource, RecipeImporter, RecipeImporterBuilder};
pub use config::{ExtractionConfig, ImportConfig};
pub use error::ImportError;
pub use images_to_text::{ImageSource, TextRecognizer};
pub use model::{Ingredient, ParsedRecipe};
pub use pipelines::RecipeExtractionPipeline;
pub use url_to_text::fetchers::{DocumentFetcher, RequestFetcher};

/// Fetches a page over plain HTTP and extracts its recipe.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipe = recipe_extract::url_to_recipe("https://example.com/recipe").await?;
/// println!("{}", recipe.title);
/// # Ok(())
/// # }
/// ```
pub async fn url_to_recipe(url: &str) -> Result<ParsedRecipe, ImportError> {
    let pipeline = RecipeExtractionPipeline::default();
    let fetcher = RequestFetcher::from_config(pipeline.config())?;
    pipeline.from_url(&fetcher, url).await
}

/// Extracts a recipe from HTML that has already been fetched from `source_url`.
pub fn html_to_recipe(html: &str, source_url: &str) -> ParsedRecipe {
    RecipeExtractionPipeline::default().from_html(html, source_url)
}

/// Extracts a recipe from newline-joined OCR text.
pub fn ocr_text_to_recipe(text: &str) -> ParsedRecipe {
    RecipeExtractionPipeline::default().from_ocr_text(text)
}

/// Normalizes a multi-line ingredient list.
pub fn parse_ingredients(text: &str) -> Vec<Ingredient> {
    ingredients::parse_ingredient_text(text)
}
