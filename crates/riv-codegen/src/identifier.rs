//! Identifier synthesis.

/// Identifier used when a name has no usable characters.
pub const UNNAMED_IDENTIFIER: &str = "Unnamed";

/// Turn an arbitrary name into a TypeScript identifier.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`, runs of `_` collapse,
/// leading and trailing `_` are trimmed, an empty result becomes `Unnamed`
/// and a leading digit gets a `_` prefix.
///
/// Distinct names can map to the same identifier (`"A B"` and `"A_B"`).
///
/// ```
/// use riv_codegen::to_identifier;
///
/// assert_eq!(to_identifier("Tip Button"), "Tip_Button");
/// assert_eq!(to_identifier("123"), "_123");
/// ```
#[must_use]
pub fn to_identifier(name: &str) -> String {
    let mut collapsed = String::with_capacity(name.len());
    for ch in name.chars() {
        let ch = if ch.is_ascii_alphanumeric() || ch == '_' {
            ch
        } else {
            '_'
        };
        if ch == '_' && collapsed.ends_with('_') {
            continue;
        }
        collapsed.push(ch);
    }

    let trimmed = collapsed.trim_matches('_');
    if trimmed.is_empty() {
        UNNAMED_IDENTIFIER.to_string()
    } else if trimmed.starts_with(|ch: char| ch.is_ascii_digit()) {
        format!("_{trimmed}")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        let cases = [
            ("Main", "Main"),
            ("Tip Button", "Tip_Button"),
            ("123", "_123"),
            ("", "Unnamed"),
            ("A__B", "A_B"),
            ("  spaced  out  ", "spaced_out"),
            ("order-button/hover", "order_button_hover"),
            ("___", "Unnamed"),
            ("_private", "private"),
            ("9 lives", "_9_lives"),
            ("Café", "Caf"),
            ("日本", "Unnamed"),
        ];
        for (name, expected) in cases {
            assert_eq!(to_identifier(name), expected, "name {name:?}");
        }
    }
}
