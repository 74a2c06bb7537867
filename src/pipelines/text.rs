use crate::extractors::OcrTextExtractor;
use crate::ingredients;
use crate::model::{Ingredient, ParsedRecipe};
use log::info;

pub fn process(extractor: &OcrTextExtractor, text: &str) -> ParsedRecipe {
    let recipe = extractor.extract(text);
    info!(
        "Extracted '{}' from OCR text ({} ingredients, {} directions)",
        recipe.title,
        recipe.ingredients.len(),
        recipe.directions.len()
    );
    recipe
}

pub fn ingredients(text: &str) -> Vec<Ingredient> {
    ingredients::parse_ingredient_text(text)
}
