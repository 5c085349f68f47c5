const PREP_TIME: &str = "Prep Time:";
const COOK_TIME: &str = "Cook Time:";
const TOTAL_TIME: &str = "Total Time:";
const SERVINGS: &str = "Servings:";
const SOURCE: &str = "Source:";

const LABELS: [&str; 5] = [PREP_TIME, COOK_TIME, TOTAL_TIME, SERVINGS, SOURCE];

/// Fields decoded from the metadata line of a Paprika export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub prep_time: String,
    pub cook_time: String,
    pub total_time: String,
    pub servings: String,
    pub source: String,
}

/// Split a metadata blob such as `Cook Time:50 minsServings:4Source:foodandwine.com`
/// into its labelled values.
///
/// Labels may come in any order. A value runs from its label to the next
/// occurrence of any other label, or to the end of the text. Label text that
/// happens to appear inside a value still ends that value.
pub fn parse_metadata(text: &str) -> Metadata {
    Metadata {
        prep_time: labelled_value(text, PREP_TIME),
        cook_time: labelled_value(text, COOK_TIME),
        total_time: labelled_value(text, TOTAL_TIME),
        servings: labelled_value(text, SERVINGS),
        source: labelled_value(text, SOURCE),
    }
}

fn labelled_value(text: &str, label: &str) -> String {
    let Some(start) = text.find(label).map(|at| at + label.len()) else {
        return String::new();
    };
    let rest = &text[start..];

    let end = LABELS
        .iter()
        .filter(|other| **other != label)
        .filter_map(|other| rest.find(other))
        .min()
        .unwrap_or(rest.len());

    rest[..end].trim().to_string()
}
