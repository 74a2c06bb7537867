use crate::extractors::{Extractor, HtmlClassExtractor, JsonLdExtractor, ParsingContext};
use crate::model::ParsedRecipe;
use log::info;

/// Structured data when the page has it, class heuristics otherwise.
pub fn process(
    structured: &JsonLdExtractor,
    fallback: &HtmlClassExtractor,
    html: &str,
    source_url: &str,
) -> ParsedRecipe {
    let context = ParsingContext::new(source_url, html);

    if let Some(recipe) = structured.parse(&context) {
        info!("Extracted '{}' from structured data", recipe.title);
        return recipe;
    }

    let recipe = fallback.extract(&context);
    info!("Extracted '{}' using HTML heuristics", recipe.title);
    recipe
}
