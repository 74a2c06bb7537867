use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const UNTITLED_RECIPE: &str = "Untitled Recipe";
pub const IMPORTED_RECIPE: &str = "Imported Recipe";

/// A single normalized ingredient line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Fresh random token; re-parsing the same line yields a new one
    pub id: String,
    pub name: String,
    /// Free-form quantity such as "2", "1.5" or "1 1/2"; empty when absent
    pub amount: String,
    pub unit: String,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            amount: amount.into(),
            unit: unit.into(),
        }
    }

    /// Renders the line back as "<amount> <unit> <name>", skipping empty parts.
    pub fn to_line(&self) -> String {
        [self.amount.as_str(), self.unit.as_str(), self.name.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Recipe record produced by every extraction path.
///
/// `title` and `directions` are never empty: extractors fill in placeholders
/// when the source has nothing usable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRecipe {
    pub title: String,
    pub ingredients: Vec<Ingredient>,
    pub directions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub servings: Option<u32>,
    /// Minutes
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub prep_time: Option<u32>,
    /// Minutes
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cook_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tools: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_url: Option<String>,
}

impl ParsedRecipe {
    /// Starts a record with the given title and directions, substituting
    /// `title_placeholder` / `directions_placeholder` for empty values.
    pub(crate) fn with_fallbacks(
        title: String,
        title_placeholder: &str,
        directions: Vec<String>,
        directions_placeholder: &str,
    ) -> Self {
        let title = if title.trim().is_empty() {
            title_placeholder.to_string()
        } else {
            title
        };
        let directions = if directions.is_empty() {
            vec![directions_placeholder.to_string()]
        } else {
            directions
        };

        Self {
            title,
            ingredients: Vec::new(),
            directions,
            servings: None,
            prep_time: None,
            cook_time: None,
            source_url: None,
            tags: None,
            tools: None,
            image_url: None,
        }
    }
}
