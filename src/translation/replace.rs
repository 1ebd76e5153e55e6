//! Named placeholder substitution for message templates.

/// Substitute `:name` placeholders in `template`.
///
/// Each replacement is applied in three spellings:
/// - `:name` inserts the value as-is
/// - `:Name` inserts the value with its first character upper-cased
/// - `:NAME` inserts the value upper-cased
///
/// Longer names are substituted first so `:target_model` is never clobbered
/// by a shorter `:target` replacement.
///
/// # Example
///
/// ```rust
/// use equality_validation::translation::replace_placeholders;
///
/// let message = replace_placeholders(
///     ":Column must equal :column on :MODEL.",
///     &[("column", "code"), ("model", "invoice")],
/// );
/// assert_eq!(message, "Code must equal code on INVOICE.");
/// ```
pub fn replace_placeholders(template: &str, replacements: &[(&str, &str)]) -> String {
    let mut ordered: Vec<&(&str, &str)> = replacements.iter().collect();
    ordered.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut message = template.to_string();
    for (name, value) in ordered {
        if name.is_empty() {
            continue;
        }
        message = message
            .replace(&format!(":{}", upper_first(name)), &upper_first(value))
            .replace(&format!(":{}", name.to_uppercase()), &value.to_uppercase())
            .replace(&format!(":{name}"), value);
    }
    message
}

fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
