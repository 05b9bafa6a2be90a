//! Shared string helpers.

use std::sync::LazyLock;

use regex::Regex;

/// Trailing identifier of a code reference (`T:System.String` -> `String`).
static CREF_LAST_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+$").expect("invalid cref regex"));

/// Uppercase only the first character of a section name.
///
/// # Examples
///
/// ```
/// use xmldoc_renderer::capitalize;
///
/// assert_eq!(capitalize("summary"), "Summary");
/// assert_eq!(capitalize("typeparam"), "Typeparam");
/// assert_eq!(capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Short display name for a `cref` attribute value.
///
/// Returns the trailing run of word characters, or an empty string when the
/// reference ends in punctuation (for example a method signature).
#[must_use]
pub fn cref_display_name(cref: &str) -> &str {
    CREF_LAST_SEGMENT.find(cref).map_or("", |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_keeps_rest_of_name() {
        assert_eq!(capitalize("remarks"), "Remarks");
        assert_eq!(capitalize("returnValue"), "ReturnValue");
        assert_eq!(capitalize("x"), "X");
    }

    #[test]
    fn test_capitalize_non_ascii() {
        assert_eq!(capitalize("über"), "Über");
    }

    #[test]
    fn test_cref_display_name() {
        assert_eq!(cref_display_name("T:System.String"), "String");
        assert_eq!(cref_display_name("System.String"), "String");
        assert_eq!(cref_display_name("P:Ns.Type.Property_1"), "Property_1");
        assert_eq!(cref_display_name("String"), "String");
    }

    #[test]
    fn test_cref_display_name_without_trailing_word() {
        assert_eq!(cref_display_name("M:Ns.Type.Method(System.Int32)"), "");
        assert_eq!(cref_display_name(""), "");
    }
}
