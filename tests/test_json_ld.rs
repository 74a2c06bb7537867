#[cfg(test)]
mod tests {
    use recipe_extract::extractors::{Extractor, JsonLdExtractor, ParsingContext};
    use recipe_extract::html_to_recipe;

    const SOURCE_URL: &str = "https://example.com/recipes/tacos";

    fn create_recipe_html(scripts: &[&str]) -> String {
        let blocks: String = scripts
            .iter()
            .map(|json_ld| format!(r#"<script type="application/ld+json">{json_ld}</script>"#))
            .collect();
        format!(
            r#"
            <!DOCTYPE html>
            <html>
            <head>
                <title>Test Recipe</title>
                {blocks}
            </head>
            <body>
                <h1>Heading From Markup</h1>
                <ul class="ingredients"><li>1 cup rice</li></ul>
            </body>
            </html>
            "#
        )
    }

    fn parse(scripts: &[&str]) -> Option<recipe_extract::ParsedRecipe> {
        let context = ParsingContext::new(SOURCE_URL, &create_recipe_html(scripts));
        JsonLdExtractor.parse(&context)
    }

    #[test]
    fn test_basic_recipe() {
        let json_ld = r#"{
            "@context": "https://schema.org",
            "@type": "Recipe",
            "name": "Tacos",
            "recipeIngredient": ["2 tbsp oil"],
            "recipeInstructions": [{"@type": "HowToStep", "text": "Heat oil"}],
            "prepTime": "PT10M",
            "recipeYield": "4 servings"
        }"#;

        let recipe = parse(&[json_ld]).expect("recipe should be found");

        assert_eq!(recipe.title, "Tacos");
        assert_eq!(recipe.prep_time, Some(10));
        assert_eq!(recipe.cook_time, None);
        assert_eq!(recipe.servings, Some(4));
        assert_eq!(recipe.directions, vec!["Heat oil"]);
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].amount, "2");
        assert_eq!(recipe.ingredients[0].unit, "tbsp");
        assert_eq!(recipe.ingredients[0].name, "Oil");
        assert_eq!(recipe.source_url.as_deref(), Some(SOURCE_URL));
    }

    #[test]
    fn test_recipe_inside_graph() {
        let json_ld = r#"{
            "@context": "https://schema.org",
            "@graph": [
                {"@type": "WebSite", "name": "Example Kitchen"},
                {"@type": ["Recipe", "NewsArticle"], "name": "Graph Soup", "cookTime": "PT1H15M"},
                {"@type": "Recipe", "name": "Second Soup"}
            ]
        }"#;

        let recipe = parse(&[json_ld]).expect("recipe should be found");

        assert_eq!(recipe.title, "Graph Soup");
        assert_eq!(recipe.cook_time, Some(75));
    }

    #[test]
    fn test_top_level_array() {
        let json_ld = r#"[
            {"@type": "Organization", "name": "Example"},
            {"@type": "Recipe", "name": "Array Bread"}
        ]"#;

        let recipe = parse(&[json_ld]).expect("recipe should be found");
        assert_eq!(recipe.title, "Array Bread");
    }

    #[test]
    fn test_malformed_block_is_skipped() {
        let broken = r#"{"@type": "Recipe", "name": "Broken",,}"#;
        let good = r#"{"@type": "Recipe", "name": "Second Block Pie"}"#;

        let recipe = parse(&[broken, good]).expect("second block should be used");
        assert_eq!(recipe.title, "Second Block Pie");
    }

    #[test]
    fn test_first_recipe_block_wins() {
        let first = r#"{"@type": "Recipe", "name": "First"}"#;
        let second = r#"{"@type": "Recipe", "name": "Second"}"#;
        assert_eq!(parse(&[first, second]).map(|r| r.title).as_deref(), Some("First"));
    }

    #[test]
    fn test_returns_none_without_recipe() {
        let article = r#"{"@type": "Article", "name": "Not food"}"#;
        let graph = r#"{"@graph": [{"@type": "BreadcrumbList"}, {"@type": "Person"}]}"#;
        let type_as_name = r#"{"@type": "RecipeCollection", "name": "Close but no"}"#;

        assert!(parse(&[article, graph, type_as_name]).is_none());
        assert!(parse(&[]).is_none());
    }

    #[test]
    fn test_nested_sections_are_flattened_in_order() {
        let json_ld = r#"{
            "@type": "Recipe",
            "name": "Layer Cake",
            "recipeInstructions": [
                "Preheat the oven",
                {
                    "@type": "HowToSection",
                    "name": "Cake",
                    "itemListElement": [
                        {"@type": "HowToStep", "text": "Mix batter"},
                        {
                            "@type": "HowToSection",
                            "itemListElement": [{"@type": "HowToStep", "text": "Bake 30 minutes"}]
                        }
                    ]
                },
                {"@type": "HowToTip", "text": "Cool completely"},
                {"@type": "HowToStep"},
                42
            ]
        }"#;

        let recipe = parse(&[json_ld]).expect("recipe should be found");
        assert_eq!(
            recipe.directions,
            vec!["Preheat the oven", "Mix batter", "Bake 30 minutes", "Cool completely"]
        );
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let json_ld = r#"{"@type": "Recipe", "prepTime": "about ten minutes", "recipeYield": 0}"#;

        let recipe = parse(&[json_ld]).expect("recipe should be found");

        assert_eq!(recipe.title, "Untitled Recipe");
        assert_eq!(
            recipe.directions,
            vec!["No directions found. Please add them manually."]
        );
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.prep_time, None);
        assert_eq!(recipe.servings, None);
        assert_eq!(recipe.tags, None);
        assert_eq!(recipe.image_url, None);
    }

    #[test]
    fn test_oversized_durations_are_absent() {
        let json_ld = r#"{
            "@type": "Recipe",
            "name": "Slow Ferment",
            "prepTime": "PT99999999H",
            "cookTime": "PT2H5M"
        }"#;

        let recipe = parse(&[json_ld]).expect("recipe should be found");

        assert_eq!(recipe.prep_time, None);
        assert_eq!(recipe.cook_time, Some(125));
    }

    #[test]
    fn test_metadata_fields() {
        let json_ld = r#"{
            "@type": "Recipe",
            "name": "Mac &amp;amp; Cheese",
            "recipeYield": ["6", "6 bowls"],
            "keywords": "comfort food, pasta , ,cheese",
            "image": [{"@type": "ImageObject", "url": "https://cdn.example.com/mac.jpg"}]
        }"#;

        let recipe = parse(&[json_ld]).expect("recipe should be found");

        assert_eq!(recipe.title, "Mac & Cheese");
        assert_eq!(recipe.servings, Some(6));
        assert_eq!(
            recipe.tags,
            Some(vec![
                "comfort food".to_string(),
                "pasta".to_string(),
                "cheese".to_string()
            ])
        );
        assert_eq!(
            recipe.image_url.as_deref(),
            Some("https://cdn.example.com/mac.jpg")
        );
    }

    #[test]
    fn test_structured_data_takes_priority_over_markup() {
        let json_ld = r#"{"@type": "Recipe", "name": "From JSON-LD"}"#;
        let recipe = html_to_recipe(&create_recipe_html(&[json_ld]), SOURCE_URL);
        assert_eq!(recipe.title, "From JSON-LD");
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_falls_back_to_markup_without_recipe() {
        let json_ld = r#"{"@type": "WebPage", "name": "Just a page"}"#;
        let recipe = html_to_recipe(&create_recipe_html(&[json_ld]), SOURCE_URL);

        assert_eq!(recipe.title, "Heading From Markup");
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].name, "Rice");
        assert_eq!(
            recipe.directions,
            vec!["No directions found. Please add them manually."]
        );
    }
}
