use super::{Extractor, ParsingContext};
use crate::extractors::NO_DIRECTIONS_PLACEHOLDER;
use crate::ingredients;
use crate::model::{ParsedRecipe, UNTITLED_RECIPE};
use html_escape::decode_html_entities;
use log::debug;
use regex::Regex;
use scraper::Selector;
use serde_json::Value;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static SCRIPT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("script[type='application/ld+json']").expect("valid selector")
});

#[allow(clippy::expect_used)]
static ISO_DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?").expect("valid regex"));

#[allow(clippy::expect_used)]
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Reads schema.org `Recipe` objects from JSON-LD script blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLdExtractor;

impl JsonLdExtractor {
    fn convert_to_recipe(&self, recipe: &Value, url: &str) -> ParsedRecipe {
        let title = recipe
            .get("name")
            .and_then(Value::as_str)
            .map(decode_html_symbols)
            .unwrap_or_default();

        let directions = recipe
            .get("recipeInstructions")
            .map(parse_directions)
            .unwrap_or_default();

        let ingredient_lines: Vec<String> = recipe
            .get("recipeIngredient")
            .and_then(Value::as_array)
            .map(|lines| {
                lines
                    .iter()
                    .filter_map(Value::as_str)
                    .filter(|line| !line.trim().is_empty())
                    .map(decode_html_symbols)
                    .collect()
            })
            .unwrap_or_default();

        let mut parsed = ParsedRecipe::with_fallbacks(
            title,
            UNTITLED_RECIPE,
            directions,
            NO_DIRECTIONS_PLACEHOLDER,
        );
        parsed.ingredients = ingredients::normalize(&ingredient_lines);
        parsed.prep_time = recipe
            .get("prepTime")
            .and_then(Value::as_str)
            .and_then(parse_duration);
        parsed.cook_time = recipe
            .get("cookTime")
            .and_then(Value::as_str)
            .and_then(parse_duration);
        parsed.servings = recipe.get("recipeYield").and_then(parse_servings);
        parsed.tags = recipe.get("keywords").and_then(parse_keywords);
        parsed.image_url = recipe.get("image").and_then(parse_image);
        parsed.source_url = Some(url.to_string());

        parsed
    }
}

impl Extractor for JsonLdExtractor {
    fn parse(&self, context: &ParsingContext) -> Option<ParsedRecipe> {
        debug!("JsonLdExtractor: Starting parse for URL: {}", context.url);

        for (index, script) in context.document.select(&SCRIPT_SELECTOR).enumerate() {
            let raw_json = script.text().collect::<String>();
            if raw_json.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<Value>(&raw_json) {
                Ok(json_ld) => {
                    if let Some(recipe) = find_recipe(&json_ld) {
                        debug!("JsonLdExtractor: Found Recipe in script {}", index);
                        return Some(self.convert_to_recipe(recipe, &context.url));
                    }
                    debug!("JsonLdExtractor: No Recipe in script {}", index);
                }
                Err(e) => {
                    debug!("JsonLdExtractor: Failed to parse JSON-LD {}: {}", index, e);
                }
            }
        }

        debug!("JsonLdExtractor: No valid recipe found in any JSON-LD script");
        None
    }
}

fn is_recipe_type(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(kind)) => kind == "Recipe",
        Some(Value::Array(kinds)) => kinds.iter().any(|k| k.as_str() == Some("Recipe")),
        _ => false,
    }
}

/// First Recipe node of a block: the block itself (or each element of a
/// top-level array), else the first Recipe inside its `@graph`.
fn find_recipe(json_ld: &Value) -> Option<&Value> {
    let items: Vec<&Value> = match json_ld {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };

    for item in items {
        if is_recipe_type(item) {
            return Some(item);
        }
        if let Some(graph) = item.get("@graph").and_then(Value::as_array) {
            if let Some(recipe) = graph.iter().find(|node| is_recipe_type(node)) {
                return Some(recipe);
            }
        }
    }

    None
}

/// One entry of `recipeInstructions`.
#[derive(Debug, PartialEq)]
enum Instruction {
    Text(String),
    /// Any object carrying `text`, `HowToStep` included
    Step(String),
    /// `HowToSection` and its nested `itemListElement`
    Section(Vec<Instruction>),
    Other,
}

impl From<&Value> for Instruction {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(text) => Instruction::Text(text.clone()),
            Value::Object(object) => {
                if let Some(text) = object.get("text").and_then(Value::as_str) {
                    if !text.is_empty() {
                        return Instruction::Step(text.to_string());
                    }
                }
                let is_section = object.get("@type").and_then(Value::as_str) == Some("HowToSection");
                match object.get("itemListElement") {
                    Some(items) if is_section => Instruction::Section(instruction_list(items)),
                    _ => Instruction::Other,
                }
            }
            _ => Instruction::Other,
        }
    }
}

impl Instruction {
    fn flatten_into(&self, steps: &mut Vec<String>) {
        match self {
            Instruction::Text(text) | Instruction::Step(text) => {
                let text = decode_html_symbols(text.trim());
                if !text.is_empty() {
                    steps.push(text);
                }
            }
            Instruction::Section(items) => {
                for item in items {
                    item.flatten_into(steps);
                }
            }
            Instruction::Other => {}
        }
    }
}

/// A top-level string is split on line breaks; arrays are visited entry by entry.
fn instruction_list(value: &Value) -> Vec<Instruction> {
    match value {
        Value::Array(entries) => entries.iter().map(Instruction::from).collect(),
        Value::String(text) => text
            .split('\n')
            .map(|line| Instruction::Text(line.to_string()))
            .collect(),
        _ => Vec::new(),
    }
}

fn parse_directions(value: &Value) -> Vec<String> {
    let mut steps = Vec::new();
    for instruction in instruction_list(value) {
        instruction.flatten_into(&mut steps);
    }
    steps
}

/// Total minutes of an ISO-8601 `PT#H#M` duration. Seconds and days are ignored.
/// Components too large for a `u32` of minutes yield `None`.
fn parse_duration(duration: &str) -> Option<u32> {
    let caps = ISO_DURATION.captures(duration)?;
    let component = |i: usize| match caps.get(i) {
        Some(m) => m.as_str().parse::<u32>().ok(),
        None => Some(0),
    };
    component(1)?
        .checked_mul(60)?
        .checked_add(component(2)?)
}

fn parse_servings(value: &Value) -> Option<u32> {
    let servings = match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => DIGITS.find(s).and_then(|m| m.as_str().parse().ok()),
        Value::Array(items) => items.first().and_then(parse_servings),
        _ => None,
    };
    servings.filter(|n| *n > 0)
}

fn parse_keywords(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(keywords) => Some(
            keywords
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        ),
        Value::String(keywords) if !keywords.is_empty() => Some(
            keywords
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        _ => None,
    }
}

fn parse_image(value: &Value) -> Option<String> {
    let url = match value {
        Value::String(url) => Some(url.as_str()),
        Value::Array(images) => images.first().and_then(|first| match first {
            Value::String(url) => Some(url.as_str()),
            other => other.get("url").and_then(Value::as_str),
        }),
        Value::Object(_) => value.get("url").and_then(Value::as_str),
        _ => None,
    };
    url.filter(|u| !u.is_empty()).map(str::to_string)
}

fn decode_html_symbols(text: &str) -> String {
    // for some reason need to decode twice to get the correct string
    decode_html_entities(&decode_html_entities(text)).into_owned()
}
