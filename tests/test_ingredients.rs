#[cfg(test)]
mod tests {
    use recipe_extract::ingredients::{normalize, normalize_line};
    use recipe_extract::parse_ingredients;

    fn triple(line: &str) -> (String, String, String) {
        let ingredient = normalize_line(line);
        (ingredient.amount, ingredient.unit, ingredient.name)
    }

    fn expected(amount: &str, unit: &str, name: &str) -> (String, String, String) {
        (amount.to_string(), unit.to_string(), name.to_string())
    }

    #[test]
    fn test_amount_unit_name() {
        assert_eq!(triple("1 1/2 cups flour"), expected("1 1/2", "cups", "Flour"));
        assert_eq!(triple("0.5 kg potatoes"), expected("0.5", "kg", "Potatoes"));
        assert_eq!(triple("3/4 Tbsp. vanilla"), expected("3/4", "Tbsp.", "Vanilla"));
        assert_eq!(triple("1 FL. OZ. lime juice"), expected("1", "FL. OZ.", "Lime juice"));
    }

    #[test]
    fn test_line_without_amount_or_unit() {
        assert_eq!(triple("salt to taste"), expected("", "", "Salt to taste"));
        assert_eq!(triple("3 large eggs"), expected("3", "", "Large eggs"));
        assert_eq!(triple("pinch of nutmeg"), expected("", "pinch", "Of nutmeg"));
    }

    #[test]
    fn test_ocr_noise_is_stripped() {
        assert_eq!(triple("• 2 cups   milk"), expected("2", "cups", "Milk"));
        assert_eq!(triple("| 1 cup rice"), expected("1", "cup", "Rice"));
        assert_eq!(triple("12. 4 cloves garlic"), expected("4", "cloves", "Garlic"));
    }

    #[test]
    fn test_renormalizing_rendered_line_is_stable() {
        let lines = [
            "1 1/2 cups flour",
            "salt to taste",
            "2 tbsp olive oil",
            "1 fl oz rum",
            "3 large eggs",
        ];
        for ingredient in normalize(&lines) {
            let again = normalize_line(&ingredient.to_line());
            assert_eq!(
                (&again.amount, &again.unit, &again.name),
                (&ingredient.amount, &ingredient.unit, &ingredient.name),
                "unstable for {:?}",
                ingredient.to_line()
            );
            assert_ne!(again.id, ingredient.id);
        }
    }

    #[test]
    fn test_bulk_text_skips_blank_lines() {
        let ingredients = parse_ingredients("2 cups flour\n\n   \n1 tsp salt\r\nbutter\n");
        let names: Vec<_> = ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Flour", "Salt", "Butter"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let ingredients = normalize(&["1 egg", "1 egg"]);
        assert_ne!(ingredients[0].id, ingredients[1].id);
        assert!(!ingredients[0].id.is_empty());
    }
}
