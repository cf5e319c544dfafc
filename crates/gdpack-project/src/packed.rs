//! Godot `PackedStringArray(...)` literal parsing and serialization.
//!
//! Dependency and export lists are stored in config values as Godot packed
//! string arrays, e.g. `PackedStringArray("ui@repo-x@1.0.0", "fox@repo-y@2.0.0")`.

const PREFIX: &str = "PackedStringArray(";
const SUFFIX: &str = ")";

/// Parse a `PackedStringArray(...)` literal into its items.
///
/// Returns `None` when the value is not a packed string array at all; an
/// empty array parses to an empty vector.
pub fn parse(value: &str) -> Option<Vec<String>> {
    let inner = value
        .trim()
        .strip_prefix(PREFIX)?
        .strip_suffix(SUFFIX)?
        .trim();

    if inner.is_empty() {
        return Some(Vec::new());
    }

    Some(
        inner
            .split(',')
            .map(|item| unquote(item.trim()).to_string())
            .collect(),
    )
}

/// Serialize items as a `PackedStringArray(...)` literal.
pub fn stringify<S: AsRef<str>>(items: &[S]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| format!("\"{}\"", item.as_ref()))
        .collect();
    format!("{PREFIX}{}{SUFFIX}", quoted.join(", "))
}

/// Strip one pair of surrounding double quotes, if present.
pub fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Wrap a value in double quotes.
pub fn quote(value: &str) -> String {
    format!("\"{value}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_items() {
        assert_eq!(
            parse("PackedStringArray(\"a\", \"b@c@1.0\")"),
            Some(vec!["a".to_string(), "b@c@1.0".to_string()])
        );
    }

    #[test]
    fn parses_empty_array() {
        assert_eq!(parse("PackedStringArray()"), Some(vec![]));
        assert_eq!(parse("PackedStringArray( )"), Some(vec![]));
    }

    #[test]
    fn rejects_other_values() {
        assert_eq!(parse("\"just a string\""), None);
        assert_eq!(parse("5"), None);
    }

    #[test]
    fn round_trip() {
        let items = vec!["ui@repo-x@1.0.0", "fox@repo-y@2.0.0"];
        assert_eq!(parse(&stringify(&items)), Some(items.iter().map(|s| s.to_string()).collect()));
    }

    #[test]
    fn stringify_empty() {
        assert_eq!(stringify::<&str>(&[]), "PackedStringArray()");
    }

    #[test]
    fn unquote_only_strips_pairs() {
        assert_eq!(unquote("\"x\""), "x");
        assert_eq!(unquote("\"x"), "\"x");
        assert_eq!(unquote("x"), "x");
    }
}
