/// Turn a recipe name into the store key.
///
/// The result is lowercase and only contains `[a-z0-9-]`, with no leading,
/// trailing or doubled hyphens. Characters outside ASCII are dropped, so a
/// name made only of symbols or non-Latin script yields an empty string.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else if ch.is_whitespace() || ch == '_' || ch == '-' {
            pending_dash = true;
        }
        // anything else is removed without leaving a separator
    }

    slug
}
