use scraper::{ElementRef, Html, Selector};

/// Text of an element on one line: descendant text concatenated, whitespace
/// runs collapsed to a single space, trimmed.
///
/// `<b>Cook Time:</b><span>50 mins</span>` reads `Cook Time:50 mins` and
/// `<strong>2</strong> cups flour` reads `2 cups flour`.
pub fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of a free-form block: every descendant text node trimmed, blanks
/// dropped, one node per line.
pub fn block_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// First element under `scope` carrying `class`, if any.
pub fn find_by_class<'a>(scope: ElementRef<'a>, class: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(&format!(".{class}")).ok()?;
    scope.select(&selector).next()
}

/// First element in the whole document carrying `class`, if any.
pub fn find_in_document<'a>(document: &'a Html, class: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(&format!(".{class}")).ok()?;
    document.select(&selector).next()
}

/// One-line text of the first element under `scope` carrying `class`.
pub fn class_text(scope: ElementRef<'_>, class: &str) -> Option<String> {
    find_by_class(scope, class).map(element_text)
}

pub fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}
