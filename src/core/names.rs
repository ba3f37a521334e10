use serde::Serialize;

use crate::error::{Error, Result};

/// A validated component name and its derived forms.
///
/// `component` upper-cases only the first character (`myBox` stays `MyBox`,
/// never `Mybox`); `slug` lower-cases the whole string. Both are pure
/// functions of the trimmed input. No character-set or length restrictions
/// are applied beyond rejecting emptiness.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentName {
    /// The trimmed user input.
    pub raw: String,
    /// First-character-capitalized form, used for the component file and symbol.
    pub component: String,
    /// Fully lower-cased form, used for route slugs and thumbnail names.
    pub slug: String,
}

impl ComponentName {
    pub fn parse(input: &str) -> Result<ComponentName> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::scaffold_empty_name());
        }

        Ok(ComponentName {
            raw: trimmed.to_string(),
            component: capitalize_first(trimmed),
            slug: trimmed.to_lowercase(),
        })
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_name() {
        let name = ComponentName::parse("box").unwrap();
        assert_eq!(name.component, "Box");
        assert_eq!(name.slug, "box");
    }

    #[test]
    fn parse_preserves_interior_case() {
        let name = ComponentName::parse("myBox").unwrap();
        assert_eq!(name.component, "MyBox");
        assert_eq!(name.slug, "mybox");
    }

    #[test]
    fn parse_leaves_already_capitalized_input() {
        let name = ComponentName::parse("BouncyBallroom").unwrap();
        assert_eq!(name.component, "BouncyBallroom");
        assert_eq!(name.slug, "bouncyballroom");
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let name = ComponentName::parse("  spinner  ").unwrap();
        assert_eq!(name.raw, "spinner");
        assert_eq!(name.component, "Spinner");
    }

    #[test]
    fn slug_is_idempotent() {
        let name = ComponentName::parse("MullerLyer").unwrap();
        assert_eq!(name.slug.to_lowercase(), name.slug);
    }

    #[test]
    fn capitalized_only_touches_first_char() {
        let name = ComponentName::parse("aBCdef").unwrap();
        assert_eq!(&name.component[1..], "BCdef");
    }

    #[test]
    fn parse_empty_fails() {
        let err = ComponentName::parse("").unwrap_err();
        assert_eq!(err.code.as_str(), "scaffold.empty_name");
    }

    #[test]
    fn parse_whitespace_only_fails() {
        assert!(ComponentName::parse("   ").is_err());
    }
}
