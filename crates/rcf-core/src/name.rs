use std::fmt;

use heck::ToKebabCase;

use crate::error::GenerateError;

/// Normalize a raw component name: split on `-`, capitalize the first
/// character of each segment, concatenate. Characters within a segment keep
/// their casing, so `normalize("my-XLButton")` is `"MyXLButton"`.
pub fn normalize(name: &str) -> String {
    name.split('-')
        .map(capitalize_first)
        .collect()
}

/// Capitalize the first character of a segment, leaving the rest untouched.
fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strict slug for CSS class hyphenation: lowercase kebab-case with
/// identifier-unsafe characters stripped. Idempotent.
pub fn slugify(name: &str) -> String {
    name.to_kebab_case()
}

/// A component name with its derived casing variants, computed once at
/// parse time. Flags never feed into name derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentName {
    raw: String,
    pascal: String,
    slug: String,
}

impl ComponentName {
    /// Validate and derive the name variants. Empty or whitespace-only
    /// input is rejected here, before any template read happens.
    pub fn parse(raw: &str) -> Result<Self, GenerateError> {
        if raw.trim().is_empty() {
            return Err(GenerateError::EmptyName);
        }
        let pascal = normalize(raw);
        let slug = slugify(&pascal);
        Ok(Self {
            raw: raw.to_string(),
            pascal,
            slug,
        })
    }

    /// The name exactly as the user supplied it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized PascalCase-like form.
    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    /// Hyphenated lowercase form for CSS class names.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn upper(&self) -> String {
        self.pascal.to_uppercase()
    }

    pub fn lower(&self) -> String {
        self.pascal.to_lowercase()
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hyphenated() {
        assert_eq!(normalize("my-button"), "MyButton");
    }

    #[test]
    fn test_normalize_single_word() {
        assert_eq!(normalize("button"), "Button");
    }

    #[test]
    fn test_normalize_preserves_inner_casing() {
        assert_eq!(normalize("my-XLButton"), "MyXLButton");
    }

    #[test]
    fn test_normalize_collapses_empty_segments() {
        assert_eq!(normalize("my--button"), "MyButton");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("MyButton"), "my-button");
    }

    #[test]
    fn test_slugify_idempotent() {
        let once = slugify("MyButton");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_slugify_strips_unsafe_chars() {
        assert_eq!(slugify("My Button!"), "my-button");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(ComponentName::parse("").is_err());
        assert!(ComponentName::parse("   ").is_err());
    }

    #[test]
    fn test_parse_variants() {
        let n = ComponentName::parse("my-button").unwrap();
        assert_eq!(n.raw(), "my-button");
        assert_eq!(n.pascal(), "MyButton");
        assert_eq!(n.slug(), "my-button");
        assert_eq!(n.upper(), "MYBUTTON");
        assert_eq!(n.lower(), "mybutton");
    }
}
