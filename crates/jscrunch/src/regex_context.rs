//! The regex-vs-division heuristic.
//!
//! A `/` in ordinary code is ambiguous: it may be the division operator or
//! the start of a regex literal. Resolving it properly takes a parser; this
//! engine instead inspects the most recently emitted non-whitespace
//! character. After `=`, an opening bracket, a separator or another
//! operator a value (and thus a regex) can begin; after an identifier or a
//! closing bracket, `/` divides.
//!
//! The lookback set is fixed. Extending it (say, to recognize
//! `return /re/`) changes which inputs survive minification unscathed and
//! is a behavior change, not a bug fix.

/// Characters after which a `/` opens a regex literal.
const REGEX_PRECEDERS: &[char] = &[
    '=', '(', '[', '{', ':', ';', '!', '&', '|', '?', '+', '-', '%', '<', '>', '^', '~', ',', '\n',
];

/// `true` when a `/` seen after `last` (the most recent non-whitespace
/// output character, `None` while nothing has been emitted) starts a regex
/// literal rather than a division.
pub(crate) fn opens_regex(last: Option<char>) -> bool {
    match last {
        None => true,
        Some(c) => REGEX_PRECEDERS.contains(&c),
    }
}
