//! Lexical modes for the single-pass scanner.

/// The scanner's current interpretation context.
///
/// Exactly one variant is active at any cursor position, so contradictory
/// mode combinations (inside a string *and* a regex, say) cannot be
/// represented, only sequenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    /// Ordinary code: whitespace collapses and comments are stripped.
    Normal,
    /// Inside a string literal opened by the given quote (`"`, `'` or a
    /// backtick). Content is copied verbatim.
    InString(char),
    /// Inside a `//` comment; nothing reaches the output until the next
    /// newline.
    InLineComment,
    /// Inside a `/* ... */` comment; nothing reaches the output until the
    /// closing `*/`.
    InBlockComment,
    /// Inside a regex literal; content is copied verbatim until the first
    /// unescaped `/`. Character classes are not special-cased, so the
    /// bracketed slash in `/[/]/` already closes the literal.
    InRegex,
}

impl ScanState {
    /// The construct left open when a scan ends in this state, if any.
    pub(crate) fn open_construct(self) -> Option<OpenConstruct> {
        match self {
            ScanState::Normal => None,
            ScanState::InString(quote) => Some(OpenConstruct::String { quote }),
            ScanState::InLineComment => Some(OpenConstruct::LineComment),
            ScanState::InBlockComment => Some(OpenConstruct::BlockComment),
            ScanState::InRegex => Some(OpenConstruct::Regex),
        }
    }
}

/// The construct a scan was still inside when the input ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OpenConstruct {
    /// An unterminated string literal, with its opening quote character.
    String {
        /// The quote that opened the literal: `"`, `'` or a backtick.
        quote: char,
    },
    /// A `//` comment not followed by a newline (common on the last line of
    /// a file).
    LineComment,
    /// An unterminated `/* ... */` comment.
    BlockComment,
    /// An unterminated regex literal.
    Regex,
}
