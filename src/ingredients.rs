//! Ingredient line normalizer.
//!
//! Splits a free-text ingredient line such as `"1 1/2 cups flour"` into an
//! amount, a unit and a name. Used by every extraction path and by the bulk
//! ingredient-text interface.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::model::Ingredient;

/// Units recognised as the first word (or first two words) after the amount.
/// Lookups are made against the lower-cased word with `.` and `,` removed.
const UNITS: &[&str] = &[
    "cup", "cups", "tablespoon", "tablespoons", "tbsp", "tbsps", "teaspoon", "teaspoons", "tsp",
    "tsps", "ounce", "ounces", "oz", "pound", "pounds", "lb", "lbs", "gram", "grams", "g",
    "kilogram", "kilograms", "kg", "milliliter", "milliliters", "ml", "liter", "liters", "l",
    "pinch", "pinches", "dash", "dashes", "clove", "cloves", "can", "cans", "package", "packages",
    "pkg", "container", "containers", "jar", "jars", "bottle", "bottles", "slice", "slices",
    "piece", "pieces", "head", "heads", "bunch", "bunches", "sprig", "sprigs", "stalk", "stalks",
    "ear", "ears", "inch", "inches",
    // compound units
    "fluid ounce", "fluid ounces", "fl oz",
];

/// Single capital letter, `|`, or a short list index ("3." / "12,") that OCR
/// tends to leave in front of a line.
#[allow(clippy::expect_used)]
static OCR_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Z|]|[0-9]{1,2}[.,])\s+").expect("valid regex"));

/// Leading bullets and symbols. Digits, parentheses and the ¼–¾ glyphs survive.
#[allow(clippy::expect_used)]
pub(crate) static LEADING_SYMBOLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^a-zA-Z0-9()¼-¾]+\s*").expect("valid regex"));

#[allow(clippy::expect_used)]
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Mixed number, fraction, decimal or integer at the start of the line.
#[allow(clippy::expect_used)]
static AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+\s+[0-9]/[0-9]|[0-9]+/[0-9]|[0-9]+(?:\.[0-9]+)?)?\s*")
        .expect("valid regex")
});

/// Normalizes each line into an [`Ingredient`]. One output per input, in order.
///
/// Never fails; lines that do not look like ingredients come back with an empty
/// amount and unit and the whole line as the name. Empty lines are not dropped.
pub fn normalize<S: AsRef<str>>(lines: &[S]) -> Vec<Ingredient> {
    lines.iter().map(|line| normalize_line(line.as_ref())).collect()
}

/// Bulk ingredient text: one ingredient per non-blank line.
pub fn parse_ingredient_text(text: &str) -> Vec<Ingredient> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    debug!("Parsing {} ingredient lines from bulk text", lines.len());
    normalize(&lines)
}

pub fn normalize_line(line: &str) -> Ingredient {
    let cleaned = clean_line(line);

    let (amount, remaining) = split_amount(&cleaned);
    let (unit, remaining) = split_unit(remaining);

    let name = remaining.trim();
    let name = if name.is_empty() {
        cleaned.as_str()
    } else {
        name
    };

    Ingredient::new(capitalize(name), amount, unit)
}

fn clean_line(line: &str) -> String {
    let line = line.trim();
    let line = OCR_PREFIX.replace(line, "");
    let line = LEADING_SYMBOLS.replace(&line, "");
    WHITESPACE.replace_all(&line, " ").into_owned()
}

fn split_amount(cleaned: &str) -> (String, &str) {
    match AMOUNT.captures(cleaned) {
        Some(caps) => match caps.get(1) {
            Some(amount) => {
                let consumed = caps.get(0).map_or(0, |m| m.end());
                (amount.as_str().trim().to_string(), cleaned[consumed..].trim())
            }
            None => (String::new(), cleaned),
        },
        None => (String::new(), cleaned),
    }
}

fn split_unit(remaining: &str) -> (String, String) {
    let words: Vec<&str> = remaining.split(' ').collect();

    if let Some(first) = words.first() {
        if is_unit(first) {
            return (first.to_string(), words[1..].join(" "));
        }
        if words.len() > 1 {
            let pair = format!("{} {}", words[0], words[1]);
            if is_unit(&pair) {
                return (pair, words[2..].join(" "));
            }
        }
    }

    (String::new(), remaining.to_string())
}

fn is_unit(candidate: &str) -> bool {
    let key: String = candidate
        .to_lowercase()
        .chars()
        .filter(|c| *c != '.' && *c != ',')
        .collect();
    UNITS.contains(&key.as_str())
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
