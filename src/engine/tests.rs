use crate::{ParseError, UnitId, UnitPass, UnitVocabulary, parse, parse_verbose};

fn unit_of(input: &str) -> Option<UnitId> {
    parse(input).unwrap_or_else(|err| panic!("{input:?}: {err}")).unit
}

fn ingredient_of(input: &str) -> String {
    parse(input).unwrap_or_else(|err| panic!("{input:?}: {err}")).ingredient
}

#[test]
fn amount_examples() {
    let cases: Vec<(f64, &str)> = vec![
        (1.0, "1 cup flour"),
        (1.5, "1 1/2 cups flour"),
        (1.0, "1.0 cup flour"),
        (1.5, "1.5 cups flour"),
        (1.0 + 2.0 / 3.0, "1 2/3 cups flour"),
        (28.0, "1 (28 ounce) can crushed tomatoes"),
        (56.0, "2 (28 ounce) can crushed tomatoes"),
        (0.5, "1/2 cups flour"),
        (0.25, ".25 cups flour"),
        (12.0, "12oz tequila"),
        (8.0, "1 8  oz. cream cheese"),
        (15.0, "1 15-ounce can of white cannelini or navy beans, drained and rinsed"),
        (14.0, "1 (14- to 19-ounce) can chickpeas, rinsed and drained"),
        (18.25, "1  (18.25 oz.)  Betty Crocker devils food SuperMoist cake mix"),
        (3.0, "3-pound chicken, in parts"),
    ];

    for (expected, input) in cases {
        let amount = parse(input).unwrap().amount;
        assert!(
            amount.is_some_and(|a| (a - expected).abs() < 1e-9),
            "expected amount {expected} for {input:?}, got {amount:?}"
        );
    }
}

#[test]
fn missing_quantity_leaves_amount_absent() {
    for input in ["pinch of nutmeg", "Vegetable oil or shortening (see my explanation in the post) for frying"] {
        assert_eq!(parse(input).unwrap().amount, None, "{input:?}");
    }
}

#[test]
fn english_units_abbreviated() {
    let cases: Vec<(&str, UnitId)> = vec![
        ("1 c flour", UnitId::Cup),
        ("1 c. flour", UnitId::Cup),
        ("1 fl oz flour", UnitId::FluidOunce),
        ("1 fl. oz. flour", UnitId::FluidOunce),
        ("1 (28 fl oz) can crushed tomatoes", UnitId::FluidOunce),
        ("2 gal flour", UnitId::Gallon),
        ("2 gal. flour", UnitId::Gallon),
        ("1 ounce flour", UnitId::Ounce),
        ("2 ounces flour", UnitId::Ounce),
        ("1 oz flour", UnitId::Ounce),
        ("1 oz. flour", UnitId::Ounce),
        ("2 pt flour", UnitId::Pint),
        ("2 pt. flour", UnitId::Pint),
        ("1 lb flour", UnitId::Pound),
        ("1 lb. flour", UnitId::Pound),
        ("1 pound flour", UnitId::Pound),
        ("2 pounds flour", UnitId::Pound),
        ("2 qt flour", UnitId::Quart),
        ("2 qt. flour", UnitId::Quart),
        ("2 qts flour", UnitId::Quart),
        ("2 qts. flour", UnitId::Quart),
        ("2 tbsp flour", UnitId::Tablespoon),
        ("2 tbsp. flour", UnitId::Tablespoon),
        ("2 Tbs flour", UnitId::Tablespoon),
        ("2 Tbs. flour", UnitId::Tablespoon),
        ("2 T flour", UnitId::Tablespoon),
        ("2 T. flour", UnitId::Tablespoon),
        ("2 tsp flour", UnitId::Teaspoon),
        ("2 tsp. flour", UnitId::Teaspoon),
        ("2 t flour", UnitId::Teaspoon),
        ("2 t. flour", UnitId::Teaspoon),
        ("12oz tequila", UnitId::Ounce),
        ("2 TSP flour", UnitId::Teaspoon),
        ("1 LB flour", UnitId::Pound),
    ];

    for (input, expected) in cases {
        assert_eq!(unit_of(input), Some(expected), "{input:?}");
    }
}

#[test]
fn english_units_long_form() {
    let cases: Vec<(&str, UnitId)> = vec![
        ("1 cup flour", UnitId::Cup),
        ("2 cups flour", UnitId::Cup),
        ("1 fluid ounce flour", UnitId::FluidOunce),
        ("2 fluid ounces flour", UnitId::FluidOunce),
        ("2 gallon flour", UnitId::Gallon),
        ("2 gallons flour", UnitId::Gallon),
        ("2 pint flour", UnitId::Pint),
        ("2 pints flour", UnitId::Pint),
        ("1 quart flour", UnitId::Quart),
        ("2 quarts flour", UnitId::Quart),
        ("2 tablespoon flour", UnitId::Tablespoon),
        ("2 tablespoons flour", UnitId::Tablespoon),
        ("2 teaspoon flour", UnitId::Teaspoon),
        ("2 teaspoons flour", UnitId::Teaspoon),
    ];

    for (input, expected) in cases {
        assert_eq!(unit_of(input), Some(expected), "{input:?}");
    }
}

#[test]
fn metric_units() {
    let cases: Vec<(&str, UnitId)> = vec![
        ("1 g flour", UnitId::Gram),
        ("1 g. flour", UnitId::Gram),
        ("1 gr flour", UnitId::Gram),
        ("1 gr. flour", UnitId::Gram),
        ("1 kg flour", UnitId::Kilogram),
        ("1 kg. flour", UnitId::Kilogram),
        ("1 l water", UnitId::Liter),
        ("1 l. water", UnitId::Liter),
        ("1 mg water", UnitId::Milligram),
        ("1 mg. water", UnitId::Milligram),
        ("1 ml water", UnitId::Milliliter),
        ("1 ml. water", UnitId::Milliliter),
        ("1 gram flour", UnitId::Gram),
        ("2 grams flour", UnitId::Gram),
        ("1 kilogram flour", UnitId::Kilogram),
        ("2 kilograms flour", UnitId::Kilogram),
        ("1 liter water", UnitId::Liter),
        ("2 liters water", UnitId::Liter),
        ("1 milligram water", UnitId::Milligram),
        ("2 milligrams water", UnitId::Milligram),
        ("1 milliliter water", UnitId::Milliliter),
        ("2 milliliters water", UnitId::Milliliter),
    ];

    for (input, expected) in cases {
        assert_eq!(unit_of(input), Some(expected), "{input:?}");
    }
}

#[test]
fn nonstandard_units() {
    let cases: Vec<(&str, UnitId)> = vec![
        ("1 pinch pepper", UnitId::Pinch),
        ("2 pinches pepper", UnitId::Pinch),
        ("1 dash salt", UnitId::Dash),
        ("2 dashes salt", UnitId::Dash),
        ("1 touch hot sauce", UnitId::Touch),
        ("2 touches hot sauce", UnitId::Touch),
        ("1 handful rice", UnitId::Handful),
        ("2 handfuls rice", UnitId::Handful),
        ("1 stick butter", UnitId::Stick),
        ("2 large eggs", UnitId::Large),
        ("1 tiny onion", UnitId::Small),
        ("2 boxes pasta", UnitId::Box),
        ("1 jar salsa", UnitId::Jar),
        ("2 pkgs yeast", UnitId::Package),
    ];

    for (input, expected) in cases {
        assert_eq!(unit_of(input), Some(expected), "{input:?}");
    }
}

#[test]
fn every_alias_canonicalizes() {
    let vocab = UnitVocabulary::shared();
    for (alias, unit) in vocab.aliases() {
        let input = format!("2 {alias} flour");
        let res = parse(&input).unwrap();
        assert_eq!(res.unit, Some(unit), "{input:?}");
        assert_eq!(res.ingredient, "flour", "{input:?}");
    }
}

#[test]
fn without_units() {
    let res = parse("3 eggs, lightly beaten").unwrap();
    assert_eq!(res.amount, Some(3.0));
    assert_eq!(res.unit, None);
    assert_eq!(res.ingredient, "eggs, lightly beaten");
}

fn formatting_cases() -> Vec<(&'static str, &'static str)> {
    vec![
        ("1 c. flour", "flour"),
        ("1  c. Crisco shortening", "Crisco shortening"),
        ("2  large Granny Smith apples, diced", "Granny Smith apples"),
        ("2 to 3  Tbsp. chili powder", "chili powder"),
        ("7 to 7 1/2  c. all-purpose flour", "all-purpose flour"),
        ("1  pkg. active dry yeast", "active dry yeast"),
        ("pinch of nutmeg", "nutmeg"),
        ("6-8 c. bread crumbs", "bread crumbs"),
        ("1  jar Ragu spaghetti sauce (15 1/2 oz.)", "Ragu spaghetti sauce"),
        ("1  1/2 t. baking soda", "baking soda"),
        ("1 8  oz. cream cheese", "cream cheese"),
        (
            "1  (18.25 oz.)  Betty Crocker devils food SuperMoist cake mix (dry; do not make as directed on the box)",
            "Betty Crocker devils food SuperMoist cake mix",
        ),
        ("(17.3 ounces) Pepperidge Farm Puff Pastry Sheets , thawed", "Pepperidge Farm Puff Pastry Sheets"),
        ("1 1/2 cups all-purpose flour", "all-purpose flour"),
        ("1 1/2 cups (6.75 ounces or 195 grams) all-purpose flour", "all-purpose flour"),
        ("3 1/2 cups flour, plus additional for the work surface", "flour"),
        ("1/8 teaspoon ground nutmeg", "ground nutmeg"),
        ("1/2 cup buttermilk", "buttermilk"),
        ("Vegetable oil or shortening (see my explanation in the post) for frying", "Vegetable oil or shortening"),
        ("4 tablespoons (1/2 stick or 2 ounces) butter, at room temperature", "butter"),
        ("1 cup white wine (they suggest 1/2 cup but I need more to steam that volume)", "white wine"),
        ("1 handful fresh flat-leaf parsley leaves, minced", "fresh flat-leaf parsley leaves"),
        ("Coarse or pearl sugar for sprinkling (optional)", "Coarse or pearl sugar for sprinkling"),
        ("1 15-ounce can of white cannelini or navy beans, drained and rinsed", "white cannelini or navy beans"),
        ("1 1/2 teaspoons (.17 oz.) instant yeast", "instant yeast"),
        ("1 stick (1/2cup) unsalted butter, melted", "unsalted butter"),
        ("2 pounds cooked lobster meat*, chopped roughly into 1/2 and 3/4-inch pieces", "cooked lobster meat"),
        ("Seeds from 1/2 vanilla bean (or 2 teaspoons of vanilla extract)", "Seeds from 1/2 vanilla bean"),
        ("3 medium mixed bell peppers (orange, yellow, green)", "mixed bell peppers"),
        ("Thyme sprigs for garnish. ", "Thyme sprigs for garnish"),
        ("1 (14- to 19-ounce) can chickpeas, rinsed and drained", "chickpeas"),
        ("3-pound chicken, in parts or 3 pounds chicken pieces of your choice", "chicken"),
        ("17.3-ounce package Pepperidge Farm Puff Pastry Sheets (1 sheet), thawed", "Pepperidge Farm Puff Pastry Sheets"),
        ("skinless, boneless chicken breasts or thighs", "skinless boneless chicken breasts or thighs"),
        ("skinless, boneless chicken breast halves (about 1 pound)", "skinless boneless chicken breast halves"),
    ]
}

#[test]
fn ingredient_formatting() {
    let cases = formatting_cases();

    for (raw, expected) in cases {
        assert_eq!(ingredient_of(raw), expected, "{raw:?}");
    }
}

#[test]
fn container_unit_fallback() {
    let res = parse_verbose("1 (28 fl oz) can crushed tomatoes").unwrap();
    assert_eq!(res.result.unit, Some(UnitId::FluidOunce));
    assert_eq!(res.result.ingredient, "crushed tomatoes");
    assert_eq!(res.details.unit_pass, Some(UnitPass::Container));

    let res = parse_verbose("1 (28 ounce) jar of pasta sauce").unwrap();
    assert_eq!(res.result.amount, Some(28.0));
    assert_eq!(res.result.unit, Some(UnitId::Ounce));
    assert_eq!(res.result.ingredient, "pasta sauce");
    assert_eq!(res.details.unit_pass, Some(UnitPass::Container));
    assert!(res.details.productions.contains(crate::Productions::CONTAINER_NOUN | crate::Productions::OF));
}

#[test]
fn longest_alias_wins() {
    let res = parse_verbose("2 fl oz vanilla extract").unwrap();
    assert_eq!(res.result.unit, Some(UnitId::FluidOunce));
    assert_eq!(res.result.ingredient, "vanilla extract");

    let res = parse("3 tablespoons olive oil").unwrap();
    assert_eq!(res.unit, Some(UnitId::Tablespoon));
    assert_eq!(res.ingredient, "olive oil");
}

#[test]
fn case_is_preserved_after_case_insensitive_unit() {
    let res = parse_verbose("2 TBSP Dijon Mustard").unwrap();
    assert_eq!(res.result.unit, Some(UnitId::Tablespoon));
    assert_eq!(res.result.ingredient, "Dijon Mustard");
    assert_eq!(res.details.unit_pass, Some(UnitPass::CaseInsensitive));
}

#[test]
fn unit_word_alone_stays_the_ingredient() {
    let res = parse("2 cups").unwrap();
    assert_eq!(res.amount, Some(2.0));
    assert_eq!(res.unit, None);
    assert_eq!(res.ingredient, "cups");

    let res = parse_verbose("1 cup , chopped").unwrap();
    assert_eq!(res.result.unit, None);
    assert_eq!(res.result.ingredient, "cup, chopped");
    assert!(res.details.productions.contains(crate::Productions::BACKTRACKED));
}

#[test]
fn dash_specifics_are_dropped_when_a_unit_is_known() {
    let res = parse("2 cups broccoli - cut into florets").unwrap();
    assert_eq!(res.ingredient, "broccoli");

    let res = parse("4 apples - peeled").unwrap();
    assert_eq!(res.ingredient, "apples - peeled");
}

#[test]
fn malformed_input() {
    for input in ["", "   ", "1/2", "(about 2 cups)", "3 ,"] {
        assert_eq!(
            parse(input),
            Err(ParseError::MalformedInput { line: input.to_string() }),
            "{input:?}"
        );
    }
}

#[test]
fn parsing_is_deterministic() {
    let lines = [
        "1 1/2 cups (6.75 ounces) all-purpose flour, sifted",
        "2 (28 ounce) can crushed tomatoes",
        "3 eggs, lightly beaten",
        "skinless, boneless chicken breasts or thighs",
    ];
    for line in lines {
        assert_eq!(parse(line), parse(line), "{line:?}");
    }
}

#[test]
fn cleanup_is_idempotent_on_results() {
    for (line, _) in formatting_cases() {
        let once = parse(line).unwrap().ingredient;
        assert_eq!(super::cleanup::clean_ingredient(&once), once, "{line:?}");
    }
}

#[test]
fn retained_specifics_are_not_cleaned() {
    // A bare count keeps its specifics verbatim after cleanup, so cleaning
    // the result again would drop their comma.
    let once = parse("3 eggs, lightly beaten").unwrap().ingredient;
    assert_eq!(once, "eggs, lightly beaten");
    assert_eq!(super::cleanup::clean_ingredient(&once), "eggs lightly beaten");

    let once = parse("4 apples - peeled").unwrap().ingredient;
    assert_eq!(super::cleanup::clean_ingredient(&once), once);
}

#[test]
fn container_noun_alone_stays_the_ingredient() {
    let cases: Vec<(&str, f64, UnitId, &str)> = vec![
        ("2 (15 oz) cans ,drained", 30.0, UnitId::Ounce, "cans"),
        ("1 (28 ounce) can ,", 28.0, UnitId::Ounce, "can"),
    ];

    for (input, amount, unit, ingredient) in cases {
        let res = parse_verbose(input).unwrap();
        assert_eq!(res.result.amount, Some(amount), "{input:?}");
        assert_eq!(res.result.unit, Some(unit), "{input:?}");
        assert_eq!(res.result.ingredient, ingredient, "{input:?}");
        assert!(res.details.productions.contains(crate::Productions::BACKTRACKED), "{input:?}");
        assert!(!res.details.productions.contains(crate::Productions::CONTAINER_NOUN), "{input:?}");
    }
}

#[test]
fn container_noun_is_the_unit_when_the_size_has_none() {
    let res = parse_verbose("1 (x) can tomatoes").unwrap();
    assert_eq!(res.result.amount, Some(1.0));
    assert_eq!(res.result.unit, Some(UnitId::Can));
    assert_eq!(res.result.ingredient, "tomatoes");
    assert_eq!(res.details.unit_pass, Some(UnitPass::Declared));

    let res = parse("2 (family size) boxes cereal").unwrap();
    assert_eq!(res.unit, Some(UnitId::Box));
    assert_eq!(res.ingredient, "cereal");
}

#[test]
fn overflowing_amount_is_not_infinite() {
    let line = format!("{} cups flour", "9".repeat(400));
    let res = parse(&line).unwrap();
    assert_eq!(res.amount, None);
}
