//! Segmentation of raw OCR text into a recipe.
//!
//! Photographed recipes arrive as a flat list of recognized lines with no
//! markup. The extractor guesses a title from the first lines, then walks the
//! rest once, tracking whether it is inside the ingredients or the directions
//! block based on header keywords.

use crate::config::ExtractionConfig;
use crate::ingredients::{self, LEADING_SYMBOLS};
use crate::model::{ParsedRecipe, IMPORTED_RECIPE};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

pub const NO_SCANNED_DIRECTIONS_PLACEHOLDER: &str =
    "No directions found in scanning. Please add manually.";

/// Site names, author names and metadata labels that make a poor title.
#[allow(clippy::expect_used)]
static TITLE_BLOCKLIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)half[- \s]*baked|harvest|tieghan|gerard|calories|prep|cook|total|time|servings|recipe",
    )
    .expect("valid regex")
});

#[allow(clippy::expect_used)]
static TITLE_DECORATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[|—\-\s]+|[|—\-\s]+$").expect("valid regex"));

#[allow(clippy::expect_used)]
static DIRECTION_ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.?\s*(?:\d+\.?\s*)?").expect("valid regex"));

#[allow(clippy::expect_used)]
static DIRECTION_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[|•-]\s*").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Section {
    #[default]
    None,
    Ingredients,
    Directions,
}

/// Header keywords in priority order. Directions come first so that an
/// "Instructions" header is never read as an ingredients header.
const SECTION_KEYWORDS: &[(Section, &str)] = &[
    (Section::Directions, r"(?i)(directions|instructions|steps|method|how to make)"),
    (Section::Ingredients, r"(?i)(ingredients|what you'll need|shopping list)"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Metadata {
    Servings,
    PrepTime,
    CookTime,
}

const METADATA_PATTERNS: &[(Metadata, &str)] = &[
    (Metadata::Servings, r"(?i)servings?:?\s*(\d+)"),
    (Metadata::PrepTime, r"(?i)prep\s*time:?\s*(\d+)"),
    (Metadata::CookTime, r"(?i)cook\s*time:?\s*(\d+)"),
];

#[allow(clippy::expect_used)]
static SECTION_MATCHERS: LazyLock<Vec<(Section, Regex)>> = LazyLock::new(|| {
    SECTION_KEYWORDS
        .iter()
        .map(|(section, pattern)| (*section, Regex::new(pattern).expect("valid regex")))
        .collect()
});

#[allow(clippy::expect_used)]
static METADATA_MATCHERS: LazyLock<Vec<(Metadata, Regex)>> = LazyLock::new(|| {
    METADATA_PATTERNS
        .iter()
        .map(|(field, pattern)| (*field, Regex::new(pattern).expect("valid regex")))
        .collect()
});

/// Accumulator threaded through the single pass over the lines.
#[derive(Debug, Default)]
struct ScanState {
    section: Section,
    ingredients: Vec<String>,
    directions: Vec<String>,
    servings: Option<u32>,
    prep_time: Option<u32>,
    cook_time: Option<u32>,
}

impl ScanState {
    fn step(mut self, line: &str) -> Self {
        self.record_metadata(line);

        if let Some(section) = next_section(self.section, line) {
            debug!("OCR section {:?} -> {:?} at {:?}", self.section, section, line);
            self.section = section;
            return self;
        }

        match self.section {
            Section::Ingredients => {
                let cleaned = LEADING_SYMBOLS.replace(line, "");
                let cleaned = cleaned.trim();
                if cleaned.chars().count() > 2 {
                    self.ingredients.push(cleaned.to_string());
                }
            }
            Section::Directions => {
                let cleaned = DIRECTION_ORDINAL.replace(line, "");
                let cleaned = DIRECTION_BULLET.replace(&cleaned, "");
                let cleaned = cleaned.trim();
                if cleaned.chars().count() > 3
                    && !cleaned.contains("footer")
                    && !cleaned.contains("http")
                {
                    self.directions.push(cleaned.to_string());
                }
            }
            Section::None => {}
        }

        self
    }

    fn record_metadata(&mut self, line: &str) {
        for (field, pattern) in METADATA_MATCHERS.iter() {
            let slot = match field {
                Metadata::Servings => &mut self.servings,
                Metadata::PrepTime => &mut self.prep_time,
                Metadata::CookTime => &mut self.cook_time,
            };
            if slot.is_some() {
                continue;
            }
            *slot = pattern
                .captures(line)
                .and_then(|caps| caps.get(1))
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .filter(|value| *value > 0);
        }
    }
}

/// Section a header line switches to, if it is a header at all. Once in
/// directions, an ingredients keyword is treated as ordinary content.
fn next_section(current: Section, line: &str) -> Option<Section> {
    SECTION_MATCHERS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(line))
        .map(|(section, _)| *section)
        .find(|section| !(*section == Section::Ingredients && current == Section::Directions))
}

fn guess_title(lines: &[&str], scan_lines: usize) -> Option<String> {
    lines.iter().take(scan_lines).find_map(|line| {
        let letters = line.chars().filter(char::is_ascii_alphabetic).count();
        let qualifies = line.chars().count() > 8
            && !TITLE_BLOCKLIST.is_match(line)
            && !line.contains("http")
            && letters > 5;
        qualifies.then(|| TITLE_DECORATION.replace_all(line, "").trim().to_string())
    })
}

/// Turns the newline-joined OCR text of one or more images into a recipe.
#[derive(Debug, Clone)]
pub struct OcrTextExtractor {
    title_scan_lines: usize,
}

impl Default for OcrTextExtractor {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

impl OcrTextExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            title_scan_lines: config.title_scan_lines,
        }
    }

    pub fn extract(&self, raw_text: &str) -> ParsedRecipe {
        let lines: Vec<&str> = raw_text
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        debug!("OCR text has {} non-empty lines", lines.len());

        let title = guess_title(&lines, self.title_scan_lines).unwrap_or_default();

        let state = lines
            .iter()
            .fold(ScanState::default(), |state, line| state.step(line));

        let (ingredient_lines, directions) =
            if state.ingredients.is_empty() && state.directions.is_empty() {
                // No headers recognised: guess that the top half lists ingredients
                debug!("No OCR sections found, splitting lines in half");
                let half = lines.len() / 2;
                let owned_lines =
                    |slice: &[&str]| -> Vec<String> { slice.iter().map(|l| l.to_string()).collect() };
                (
                    owned_lines(lines.get(1..half).unwrap_or_default()),
                    owned_lines(&lines[half..]),
                )
            } else {
                (state.ingredients, state.directions)
            };

        let mut recipe = ParsedRecipe::with_fallbacks(
            title,
            IMPORTED_RECIPE,
            directions,
            NO_SCANNED_DIRECTIONS_PLACEHOLDER,
        );
        recipe.ingredients = ingredients::normalize(&ingredient_lines);
        recipe.servings = state.servings;
        recipe.prep_time = state.prep_time;
        recipe.cook_time = state.cook_time;
        recipe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_keyword_patterns_compile() {
        assert_eq!(SECTION_MATCHERS.len(), SECTION_KEYWORDS.len());
        assert_eq!(METADATA_MATCHERS.len(), METADATA_PATTERNS.len());
    }

    #[test]
    fn test_next_section_priority() {
        assert_eq!(next_section(Section::None, "| Instructions"), Some(Section::Directions));
        assert_eq!(next_section(Section::None, "INGREDIENTS"), Some(Section::Ingredients));
        assert_eq!(
            next_section(Section::Ingredients, "Ingredients and instructions"),
            Some(Section::Directions)
        );
        assert_eq!(next_section(Section::Directions, "Ingredients"), None);
        assert_eq!(next_section(Section::Ingredients, "2 cups flour"), None);
    }

    #[test]
    fn test_guess_title_skips_branding_and_short_lines() {
        let lines = [
            "Half Baked Harvest",
            "| www.myrecipes.com |",
            "Prep Time: 10",
            "Short",
            "— Creamy Tomato Soup —",
        ];
        assert_eq!(guess_title(&lines, 15).as_deref(), Some("Creamy Tomato Soup"));
    }

    #[test]
    fn test_guess_title_respects_scan_window() {
        let lines = ["x", "y", "Lemon Garlic Chicken"];
        assert_eq!(guess_title(&lines, 2), None);
        assert_eq!(guess_title(&lines, 3).as_deref(), Some("Lemon Garlic Chicken"));
    }

    #[test]
    fn test_guess_title_rejects_links_and_symbol_noise() {
        let lines = ["http://example.com/soup", "12345 67890 !!", "a1b2c3d4e5"];
        assert_eq!(guess_title(&lines, 15), None);
    }

    #[test]
    fn test_metadata_first_match_wins() {
        let state = ["Servings: 4", "Prep time 15 min", "Cook Time: 30", "servings 8"]
            .iter()
            .fold(ScanState::default(), |state, line| state.step(line));
        assert_eq!(state.servings, Some(4));
        assert_eq!(state.prep_time, Some(15));
        assert_eq!(state.cook_time, Some(30));
    }

    #[test]
    fn test_zero_metadata_does_not_lock_the_slot() {
        let lines = [
            "Prep time: 0",
            "Cook time 0",
            "Servings 0",
            "Prep time: 10",
            "Cook time 25",
            "Servings 6",
        ];
        let state = lines
            .iter()
            .fold(ScanState::default(), |state, line| state.step(line));
        assert_eq!(state.prep_time, Some(10));
        assert_eq!(state.cook_time, Some(25));
        assert_eq!(state.servings, Some(6));
    }

    #[test]
    fn test_direction_line_cleanup() {
        let lines = [
            "Directions",
            "1. Preheat oven",
            "2.1. Grease pan",
            "• Bake it",
            "- Cool",
            "see footer",
            "Visit http://x.io now",
        ];
        let state = lines
            .iter()
            .fold(ScanState::default(), |state, line| state.step(line));
        assert_eq!(state.directions, vec!["Preheat oven", "Grease pan", "Bake it", "Cool"]);
    }

    #[test]
    fn test_ingredient_line_cleanup() {
        let state = ["Ingredients", "• 2 cups flour", "| ½ cup milk", "E", "--"]
            .iter()
            .fold(ScanState::default(), |state, line| state.step(line));
        assert_eq!(state.ingredients, vec!["2 cups flour", "½ cup milk"]);
    }

    #[test]
    fn test_empty_input() {
        let recipe = OcrTextExtractor::default().extract("");
        assert_eq!(recipe.title, IMPORTED_RECIPE);
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.directions, vec![NO_SCANNED_DIRECTIONS_PLACEHOLDER]);
    }

    #[test]
    fn test_single_line_input_does_not_panic() {
        let recipe = OcrTextExtractor::default().extract("just one line of noise");
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.directions, vec!["just one line of noise"]);
    }
}
