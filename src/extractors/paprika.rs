use crate::extractors::metadata::parse_metadata;
use crate::extractors::text::{
    block_text, class_text, element_text, find_by_class, find_in_document, has_class,
};
use crate::extractors::{Extractor, ParsingContext};
use crate::model::Recipe;
use crate::slug::slugify;
use log::debug;
use scraper::{ElementRef, Selector};

/// Reads the HTML pages Paprika writes when exporting recipes.
///
/// Everything hangs off a `.recipe` container; the rest of the structure is
/// loose, so each lookup degrades to an empty value when its element is
/// missing. Directions and notes are only told apart by the label of the
/// `.subhead` element that precedes them.
pub struct PaprikaExtractor;

#[derive(Debug, Default)]
struct Sections {
    directions: Option<String>,
    notes: Option<String>,
}

impl PaprikaExtractor {
    fn categories(container: ElementRef<'_>) -> Vec<String> {
        class_text(container, "categories")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn ingredients(container: ElementRef<'_>) -> Vec<String> {
        let Some(list) = find_by_class(container, "ingredients") else {
            return Vec::new();
        };

        list.children()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "p")
            .map(element_text)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Walk every `.subhead` and gather the sibling elements after it, up to
    /// the next `.subhead`.
    ///
    /// Only the first section of each kind is kept; a second "Notes" block
    /// is dropped.
    fn sections(container: ElementRef<'_>) -> Sections {
        let mut sections = Sections::default();
        let Ok(selector) = Selector::parse(".subhead") else {
            return sections;
        };

        for subhead in container.select(&selector) {
            let label = element_text(subhead).to_lowercase();
            let slot = if label.contains("direction") {
                &mut sections.directions
            } else if label.contains("note") {
                &mut sections.notes
            } else {
                continue;
            };

            if slot.is_some() {
                debug!("Ignoring repeated section {:?}", label);
                continue;
            }

            let content = subhead
                .next_siblings()
                .filter_map(ElementRef::wrap)
                .take_while(|el| !has_class(*el, "subhead"))
                .map(block_text)
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join("\n");

            *slot = Some(content);
        }

        sections
    }
}

impl Extractor for PaprikaExtractor {
    fn parse(&self, context: &ParsingContext) -> Option<Recipe> {
        let Some(container) = find_in_document(&context.document, "recipe") else {
            debug!("No .recipe container in {}", context.fallback_name);
            return None;
        };

        let name = class_text(container, "name")
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| context.fallback_name.clone());

        let metadata = class_text(container, "metadata")
            .map(|text| parse_metadata(&text))
            .unwrap_or_default();

        let sections = Self::sections(container);
        let directions = match sections.directions.filter(|d| !d.is_empty()) {
            Some(directions) => directions,
            None => find_by_class(container, "text")
                .map(block_text)
                .unwrap_or_default(),
        };

        let recipe = Recipe {
            slug: slugify(&name),
            name,
            categories: Self::categories(container),
            cook_time: metadata.cook_time,
            prep_time: metadata.prep_time,
            total_time: metadata.total_time,
            servings: metadata.servings,
            source: metadata.source,
            rating: class_text(container, "rating").unwrap_or_default(),
            ingredients: Self::ingredients(container),
            directions,
            notes: sections.notes.unwrap_or_default(),
        };

        debug!("Recipe name: {}", recipe.name);
        debug!("Ingredients count: {}", recipe.ingredients.len());
        Some(recipe)
    }
}
