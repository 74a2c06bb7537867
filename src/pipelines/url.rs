use super::RecipeExtractionPipeline;
use crate::error::ImportError;
use crate::model::ParsedRecipe;
use crate::url_to_text::fetchers::DocumentFetcher;
use log::info;
use url::Url;

/// Process a URL to extract a recipe
///
/// This pipeline:
/// 1. Rejects strings that are not absolute URLs
/// 2. Fetches the final HTML with the given fetcher
/// 3. Runs structured-data extraction, falling back to HTML heuristics
///
/// Fetch failures are returned as errors; extraction itself cannot fail.
pub async fn process(
    pipeline: &RecipeExtractionPipeline,
    fetcher: &dyn DocumentFetcher,
    url: &str,
) -> Result<ParsedRecipe, ImportError> {
    Url::parse(url)?;

    info!("Parsing recipe from: {}", url);
    let html = fetcher.fetch(url).await?;

    Ok(pipeline.from_html(&html, url))
}
