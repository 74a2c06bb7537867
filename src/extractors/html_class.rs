use crate::config::ExtractionConfig;
use crate::extractors::{Extractor, ParsingContext};
use crate::ingredients;
use crate::model::{ParsedRecipe, UNTITLED_RECIPE};
use log::debug;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

pub const NO_DIRECTIONS_PLACEHOLDER: &str = "No directions found. Please add them manually.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Ingredients,
    Directions,
    Servings,
    Image,
}

/// Selectors in one group are matched together, in document order. Groups of
/// the same field are tried in table order.
struct SelectorGroup {
    field: Field,
    selectors: &'static [&'static str],
    /// Attribute holding the value; element text when `None`
    attr: Option<&'static str>,
}

const SELECTOR_GROUPS: &[SelectorGroup] = &[
    SelectorGroup { field: Field::Title, selectors: &["h1"], attr: None },
    SelectorGroup { field: Field::Title, selectors: &["[class*='recipe-title']"], attr: None },
    SelectorGroup { field: Field::Title, selectors: &["[class*='entry-title']"], attr: None },
    SelectorGroup {
        field: Field::Ingredients,
        selectors: &[
            ".recipe-ingredients li",
            ".ingredients li",
            "[class*='ingredient'] li",
            // WordPress Recipe Maker (WPRM)
            ".wprm-recipe-ingredient",
            ".tasty-recipe-ingredients li",
        ],
        attr: None,
    },
    SelectorGroup {
        field: Field::Directions,
        selectors: &[
            ".recipe-instructions li",
            ".directions li",
            "[class*='instruction'] li",
            ".wprm-recipe-instruction",
            ".tasty-recipe-instructions li",
            "[class*='step']",
        ],
        attr: None,
    },
    SelectorGroup {
        field: Field::Servings,
        selectors: &["[class*='serving']", "[class*='yield']"],
        attr: None,
    },
    SelectorGroup {
        field: Field::Image,
        selectors: &["[class*='recipe'] img", "[class*='featured'] img"],
        attr: Some("src"),
    },
    SelectorGroup {
        field: Field::Image,
        selectors: &["img[class*='wp-post-image']"],
        attr: Some("src"),
    },
    SelectorGroup {
        field: Field::Image,
        selectors: &["meta[property='og:image']"],
        attr: Some("content"),
    },
];

struct CompiledGroup {
    field: Field,
    selector: Selector,
    attr: Option<&'static str>,
}

struct ClassMatchers {
    groups: Vec<CompiledGroup>,
}

static MATCHERS: LazyLock<ClassMatchers> = LazyLock::new(ClassMatchers::new);

#[allow(clippy::expect_used)]
static SECTION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(instructions?|directions?):?$").expect("valid regex")
});

#[allow(clippy::expect_used)]
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

impl ClassMatchers {
    fn new() -> Self {
        let groups = SELECTOR_GROUPS
            .iter()
            .filter_map(|group| {
                let selector_str = group.selectors.join(", ");
                let selector = Selector::parse(&selector_str)
                    .inspect_err(|e| {
                        debug!("Skipping invalid selector {}: {:?}", selector_str, e)
                    })
                    .ok()?;
                Some(CompiledGroup {
                    field: group.field,
                    selector,
                    attr: group.attr,
                })
            })
            .collect();

        ClassMatchers { groups }
    }

    fn groups_for(&self, field: Field) -> impl Iterator<Item = &CompiledGroup> + '_ {
        self.groups.iter().filter(move |group| group.field == field)
    }

    /// Trimmed text of the first element of the first group that yields any.
    fn find_first_text(&self, document: &Html, field: Field) -> Option<String> {
        for group in self.groups_for(field) {
            if let Some(element) = document.select(&group.selector).next() {
                let text = element_text(element);
                if !text.is_empty() {
                    debug!("Found {:?} using selector group {:?}", field, group.selector);
                    return Some(text);
                }
            }
        }
        None
    }

    /// Whitespace-collapsed text of every matching element, in document order.
    fn find_all_texts(&self, document: &Html, field: Field) -> Vec<String> {
        let mut items = Vec::new();
        for group in self.groups_for(field) {
            items.extend(
                document
                    .select(&group.selector)
                    .map(element_text)
                    .filter(|text| !text.is_empty()),
            );
        }
        debug!("Found {} {:?} candidates", items.len(), field);
        items
    }

    fn find_first_attr(&self, document: &Html, field: Field) -> Option<String> {
        for group in self.groups_for(field) {
            let Some(attr) = group.attr else { continue };
            let value = document
                .select(&group.selector)
                .next()
                .and_then(|element| element.value().attr(attr))
                .map(str::trim)
                .filter(|value| !value.is_empty());
            if let Some(value) = value {
                return Some(value.to_string());
            }
        }
        None
    }
}

fn element_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn resolve_url(candidate: &str, base: &str) -> Option<String> {
    if candidate.starts_with("http") {
        return Some(candidate.to_string());
    }
    match Url::parse(base).and_then(|base_url| base_url.join(candidate)) {
        Ok(absolute) => Some(absolute.to_string()),
        Err(e) => {
            debug!("Could not resolve image URL {} against {}: {}", candidate, base, e);
            None
        }
    }
}

/// Last-resort extractor for pages without structured data. Never fails.
#[derive(Debug, Clone)]
pub struct HtmlClassExtractor {
    max_ingredient_chars: usize,
    max_direction_chars: usize,
}

impl Default for HtmlClassExtractor {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

impl HtmlClassExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            max_ingredient_chars: config.max_ingredient_chars,
            max_direction_chars: config.max_direction_chars,
        }
    }

    pub fn extract(&self, context: &ParsingContext) -> ParsedRecipe {
        debug!("Attempting to extract recipe using HTML class matchers");
        let matchers = &*MATCHERS;
        let document = &context.document;

        let title = matchers
            .find_first_text(document, Field::Title)
            .unwrap_or_default();

        let ingredient_lines: Vec<String> = matchers
            .find_all_texts(document, Field::Ingredients)
            .into_iter()
            .filter(|text| text.chars().count() < self.max_ingredient_chars)
            .collect();

        let directions: Vec<String> = matchers
            .find_all_texts(document, Field::Directions)
            .into_iter()
            .filter(|text| {
                !SECTION_LABEL.is_match(text) && text.chars().count() < self.max_direction_chars
            })
            .collect();

        let servings = matchers
            .find_first_text(document, Field::Servings)
            .and_then(|text| DIGITS.find(&text).and_then(|m| m.as_str().parse::<u32>().ok()))
            .filter(|servings| *servings > 0);

        let image_url = matchers
            .find_first_attr(document, Field::Image)
            .and_then(|src| resolve_url(&src, &context.url));

        debug!("Recipe name: {}", title);
        debug!("Ingredients count: {}", ingredient_lines.len());
        debug!("Instructions count: {}", directions.len());

        let mut recipe = ParsedRecipe::with_fallbacks(
            title,
            UNTITLED_RECIPE,
            directions,
            NO_DIRECTIONS_PLACEHOLDER,
        );
        recipe.ingredients = ingredients::normalize(&ingredient_lines);
        recipe.servings = servings;
        recipe.image_url = image_url;
        recipe.source_url = Some(context.url.clone());
        recipe
    }
}

impl Extractor for HtmlClassExtractor {
    fn parse(&self, context: &ParsingContext) -> Option<ParsedRecipe> {
        Some(self.extract(context))
    }
}
