//! C# identifier rules used when rendering and verifying alias names.

use std::borrow::Cow;

/// Reserved C# keywords. Contextual keywords are valid identifiers.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

pub fn is_keyword(s: &str) -> bool {
    KEYWORDS.contains(&s)
}

/// Whether `s` is a plain identifier: a letter or `_` followed by letters,
/// digits or `_`. Keywords qualify; they are escaped at render time.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_') && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Prefix keywords with `@` so they can be used as names.
///
/// # Examples
/// ```
/// use scriptalias_core::identifier::escape_identifier;
/// assert_eq!(escape_identifier("params"), "@params");
/// assert_eq!(escape_identifier("path"), "path");
/// ```
pub fn escape_identifier(s: &str) -> Cow<'_, str> {
    if is_keyword(s) {
        Cow::Owned(format!("@{s}"))
    } else {
        Cow::Borrowed(s)
    }
}
