/// Alias category names and the canonical category each one resolves to.
const ALIASES: &[(&str, &str)] = &[("tree", "trees"), ("dog", "dogs")];

/// Replace any alias in `categories` with its canonical name, e.g. `["tree"]`
/// becomes `["trees"]`. Unknown names pass through unchanged.
pub fn unalias<S: AsRef<str>>(categories: &[S]) -> Vec<String> {
    categories
        .iter()
        .map(|c| resolve(c.as_ref()).to_string())
        .collect()
}

fn resolve(category: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == category)
        .map_or(category, |&(_, canonical)| canonical)
}
