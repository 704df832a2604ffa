//! # Value Grammars
//!
//! Recognizers for the two string shapes the linter cares about:
//!
//! - **Alias reference**: `{dotted.path}`, after trimming surrounding
//!   whitespace. The braces must enclose at least one character.
//! - **Raw color literal**: `#rgb`, `#rrggbb`, `#rrggbbaa` (case-insensitive
//!   hex), or anything starting with `rgb(` / `rgba(`.

/// Returns the referenced path of an alias, without braces.
///
/// Returns `None` if `value` is not an alias reference.
pub fn strip_alias(value: &str) -> Option<&str> {
    let inner = value.trim().strip_prefix('{')?.strip_suffix('}')?;
    if inner.is_empty() {
        None
    } else {
        Some(inner)
    }
}

/// Returns true if `value` is a raw color literal (hex or `rgb()`/`rgba()`).
pub fn is_raw_color(value: &str) -> bool {
    let s = value.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    s.starts_with("rgb(") || s.starts_with("rgba(")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_detection() {
        assert!(strip_alias("{color.semantic.foreground.default}").is_some());
        assert!(strip_alias("  {a}  ").is_some());
        assert!(strip_alias("{}").is_none());
        assert!(strip_alias("color.semantic").is_none());
        assert!(strip_alias("{unterminated").is_none());
        assert!(strip_alias("#ffffff").is_none());
    }

    #[test]
    fn test_strip_alias() {
        assert_eq!(strip_alias("{a.b.c}"), Some("a.b.c"));
        assert_eq!(strip_alias(" {a.b} "), Some("a.b"));
        assert_eq!(strip_alias("a.b"), None);
    }

    #[test]
    fn test_raw_hex_forms() {
        assert!(is_raw_color("#abc"));
        assert!(is_raw_color("#ABCDEF"));
        assert!(is_raw_color("#11223344"));
        assert!(is_raw_color(" #000000 "));
        assert!(!is_raw_color("#abcd"));
        assert!(!is_raw_color("#abcdeg"));
        assert!(!is_raw_color("#"));
    }

    #[test]
    fn test_raw_functional_forms() {
        assert!(is_raw_color("rgb(0, 0, 0)"));
        assert!(is_raw_color("rgba(0,0,0,0.5)"));
        assert!(!is_raw_color("hsl(0, 0%, 0%)"));
        assert!(!is_raw_color("{color.primitive.black}"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn hex_length_decides_raw_color(hex in "[0-9a-fA-F]{1,10}") {
            let expected = matches!(hex.len(), 3 | 6 | 8);
            prop_assert_eq!(is_raw_color(&format!("#{hex}")), expected);
        }

        #[test]
        fn braced_path_is_alias(path in "[a-z][a-z0-9.]{0,20}") {
            let wrapped = format!("{{{path}}}");
            prop_assert_eq!(strip_alias(&wrapped), Some(path.as_str()));
            prop_assert!(!is_raw_color(&wrapped));
        }
    }
}
