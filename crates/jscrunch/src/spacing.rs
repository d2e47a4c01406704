//! The space-collapse policy.
//!
//! On every whitespace run outside strings, comments and regexes the scanner
//! emits either nothing or a single `' '`. The decision looks only at the
//! tail of the output produced so far and at the next non-whitespace
//! character in the input.

/// Single-character operators that can pair up into longer tokens.
const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '%', '<', '>', '=', '!', '&', '|'];

/// The two-character operators the language actually has. A space between
/// two operator characters is preserved exactly when dropping it would
/// splice them into one of these; any other operator pair still tokenizes
/// as two operators when adjacent.
const COMPOUND_OPERATORS: &[&str] = &[
    "++", "--", "<<", ">>", "&&", "||", "==", "!=", "<=", ">=", "**",
];

/// Keywords that must stay separated from a following identifier character.
const KEYWORDS: &[&str] = &[
    "return",
    "throw",
    "new",
    "delete",
    "typeof",
    "void",
    "in",
    "of",
    "instanceof",
];

/// `true` for characters that can appear in an identifier.
pub(crate) fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(&c)
}

fn is_compound_pair(prev: char, next: char) -> bool {
    COMPOUND_OPERATORS.iter().any(|op| {
        let b = op.as_bytes();
        b[0] as char == prev && b[1] as char == next
    })
}

/// `true` when `out` ends with one of [`KEYWORDS`] as a whole word.
fn ends_with_keyword(out: &str) -> bool {
    KEYWORDS.iter().any(|kw| {
        out.ends_with(kw)
            && !out[..out.len() - kw.len()]
                .chars()
                .next_back()
                .is_some_and(is_ident_char)
    })
}

/// Decides whether the whitespace run between the already-emitted output
/// `out` and the upcoming character `next` must survive as one space.
pub(crate) fn needs_space(out: &str, next: char) -> bool {
    let Some(prev) = out.chars().next_back() else {
        return false;
    };
    // Identifier characters on both sides would fuse into one token.
    if is_ident_char(prev) && is_ident_char(next) {
        return true;
    }
    // Two single-character operators whose concatenation reads as a
    // compound operator (`+ +` vs `++`) must stay apart.
    if is_operator_char(prev) && is_operator_char(next) && is_compound_pair(prev, next) {
        return true;
    }
    // A keyword followed by an identifier character.
    is_ident_char(next) && ends_with_keyword(out)
}
