use paprika_kv::parse_recipe_html;

/// Page shaped like a Paprika 3 "Export > HTML" recipe file.
const TIKKA_MASALA: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Chicken Tikka Masala</title>
  <link rel="stylesheet" href="../style.css">
</head>
<body>
<div class="recipe" itemscope itemtype="http://schema.org/Recipe">
  <div class="infobox">
    <div class="name" itemprop="name">Chicken Tikka Masala</div>
    <div class="categories" itemprop="recipeCategory">Dinner, Indian, Chicken</div>
    <div class="rating" value="5">★★★★★</div>
    <div class="metadata"><b>Prep Time:</b> <span itemprop="prepTime">20 mins</span> <b>Cook Time:</b> <span itemprop="cookTime">50 mins</span> <b>Servings:</b> <span itemprop="recipeYield">4</span> <b>Source:</b> <a itemprop="url" href="https://www.foodandwine.com/recipes/tikka">foodandwine.com</a></div>
  </div>
  <div class="left-column">
    <div class="subhead">Ingredients</div>
    <div class="ingredients text">
      <p class="line" itemprop="recipeIngredient"><strong>1 1/2</strong> lb chicken thighs</p>
      <p class="line" itemprop="recipeIngredient"><strong>1</strong> cup plain yogurt</p>
      <p class="line" itemprop="recipeIngredient"></p>
      <p class="line" itemprop="recipeIngredient"><strong>2</strong> tsp garam masala</p>
    </div>
  </div>
  <div class="right-column">
    <div class="subhead">Directions</div>
    <div class="directions text" itemprop="recipeInstructions">
      <p class="line">Marinate the chicken in yogurt for 1 hour.</p>
      <p class="line">Grill until charred.</p>
    </div>
    <div class="subhead">Notes</div>
    <div class="notes text">
      <p class="line">Crème fraîche works instead of cream.</p>
    </div>
  </div>
</div>
</body>
</html>
"#;

#[test]
fn test_full_export_page() {
    let recipe = parse_recipe_html(TIKKA_MASALA, "Chicken Tikka Masala").unwrap();

    assert_eq!(recipe.name, "Chicken Tikka Masala");
    assert_eq!(recipe.slug, "chicken-tikka-masala");
    assert_eq!(recipe.categories, vec!["Dinner", "Indian", "Chicken"]);
    assert_eq!(recipe.prep_time, "20 mins");
    assert_eq!(recipe.cook_time, "50 mins");
    assert_eq!(recipe.total_time, "");
    assert_eq!(recipe.servings, "4");
    assert_eq!(recipe.source, "foodandwine.com");
    assert_eq!(recipe.rating, "★★★★★");
    assert_eq!(
        recipe.ingredients,
        vec![
            "1 1/2 lb chicken thighs",
            "1 cup plain yogurt",
            "2 tsp garam masala"
        ]
    );
    assert_eq!(
        recipe.directions,
        "Marinate the chicken in yogurt for 1 hour.\nGrill until charred."
    );
    assert_eq!(recipe.notes, "Crème fraîche works instead of cream.");
}

#[test]
fn test_payload_round_trip() {
    let recipe = parse_recipe_html(TIKKA_MASALA, "x").unwrap();
    let payload = recipe.to_json().unwrap();

    assert!(payload.starts_with(r#"{"name":"Chicken Tikka Masala","slug":"chicken-tikka-masala","#));
    assert!(payload.contains("Crème fraîche"));

    let back: paprika_kv::Recipe = serde_json::from_str(&payload).unwrap();
    assert_eq!(back, recipe);
}

#[test]
fn test_three_ingredients_from_four_paragraphs() {
    let html = r#"<html><body><div class="recipe">
        <div class="name">Vinaigrette</div>
        <div class="ingredients">
            <p>3 tbsp olive oil</p>
            <p>1 tbsp red wine vinegar</p>
            <p>   </p>
            <p>1 tsp Dijon mustard</p>
        </div>
    </div></body></html>"#;

    let recipe = parse_recipe_html(html, "vinaigrette").unwrap();
    assert_eq!(
        recipe.ingredients,
        vec!["3 tbsp olive oil", "1 tbsp red wine vinegar", "1 tsp Dijon mustard"]
    );
}

#[test]
fn test_page_without_recipe_container() {
    let html = r#"<html><body><h1>My Recipes</h1><ul><li><a href="a.html">A</a></li></ul></body></html>"#;
    assert!(parse_recipe_html(html, "index").is_none());
}

#[test]
fn test_missing_name_falls_back_to_file_stem() {
    let html = r#"<div class="recipe"><div class="ingredients"><p>salt</p></div></div>"#;
    let recipe = parse_recipe_html(html, "Grandma's Soup").unwrap();
    assert_eq!(recipe.name, "Grandma's Soup");
    assert_eq!(recipe.slug, "grandmas-soup");
}

#[test]
fn test_directions_fall_back_to_plain_text_block() {
    let html = r#"<div class="recipe">
        <div class="name">Toast</div>
        <div class="text"><p>Toast the bread.</p><p>Butter it.</p></div>
    </div>"#;
    let recipe = parse_recipe_html(html, "toast").unwrap();
    assert_eq!(recipe.directions, "Toast the bread.\nButter it.");
    assert_eq!(recipe.notes, "");
}

#[test]
fn test_malformed_html_degrades_to_defaults() {
    let html = r#"<div class="recipe"><div class="name">Half <b>Baked<div class="metadata">Servings:2"#;
    let recipe = parse_recipe_html(html, "half").unwrap();
    assert!(recipe.name.starts_with("Half Baked"));
    assert_eq!(recipe.servings, "2");
    assert!(recipe.ingredients.is_empty());
}

#[test]
fn test_slug_is_url_safe_for_odd_names() {
    for name in ["Pâte à Choux!!", "  Fish & Chips  ", "BBQ -- Ribs (v2)"] {
        let html = format!(r#"<div class="recipe"><div class="name">{name}</div></div>"#);
        let recipe = parse_recipe_html(&html, "x").unwrap();
        let slug = &recipe.slug;
        assert!(!slug.is_empty());
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert!(!slug.starts_with('-') && !slug.ends_with('-') && !slug.contains("--"));
    }
}
