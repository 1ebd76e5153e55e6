//! Dot-delimited attribute paths.
//!
//! Attribute paths address a field inside a flattened payload, e.g.
//! `items.0.reference_id`. Rule keys may contain `*` segments which match
//! exactly one concrete segment (`items.*.reference_id`).

/// Segment separator used by attribute paths.
pub const SEPARATOR: char = '.';

/// Wildcard segment in rule keys.
pub const WILDCARD: &str = "*";

/// Final dot segment of a path.
///
/// # Example
///
/// ```rust
/// use equality_validation::core::path;
///
/// assert_eq!(path::leaf("items.0.reference_id"), "reference_id");
/// assert_eq!(path::leaf("reference_id"), "reference_id");
/// ```
pub fn leaf(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(index) => &path[index + 1..],
        None => path,
    }
}

/// Replace the final segment of `path` with `leaf`, keeping the prefix.
///
/// This is how a sibling field of the same row is addressed: validating
/// `items.3.reference_id` against a `target_id` leaf yields `items.3.target_id`.
pub fn replace_leaf(path: &str, leaf: &str) -> String {
    match path.rfind(SEPARATOR) {
        Some(index) => format!("{}{}", &path[..=index], leaf),
        None => leaf.to_string(),
    }
}

/// Whether a rule key contains wildcard segments.
pub fn is_pattern(pattern: &str) -> bool {
    pattern.split(SEPARATOR).any(|segment| segment == WILDCARD)
}

/// Segment-wise match of a rule key against a concrete path.
pub fn matches(pattern: &str, concrete: &str) -> bool {
    let mut pattern_segments = pattern.split(SEPARATOR);
    let mut concrete_segments = concrete.split(SEPARATOR);

    loop {
        match (pattern_segments.next(), concrete_segments.next()) {
            (None, None) => return true,
            (Some(p), Some(c)) if p == WILDCARD || p == c => continue,
            _ => return false,
        }
    }
}

/// Join a prefix and a segment into a path.
pub fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}{SEPARATOR}{segment}")
    }
}
