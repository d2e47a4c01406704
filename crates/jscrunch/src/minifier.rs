//! The tokenizing minifier: one forward pass over one file's text.
//!
//! Shape of the pass
//! - One cursor, one mode: the scanner owns a byte-offset cursor into the
//!   source and a [`ScanState`] naming the construct the cursor sits in.
//!   Every transition is driven by the peeked character, so the automaton
//!   advances by at least one character per step and terminates in O(n).
//! - Verbatim islands: string and regex bodies flow through untouched. The
//!   only characters the pass may drop are whitespace and comment content,
//!   and the only character it may introduce is a single collapsed space,
//!   so the output is never longer than the input.
//! - Fail-open: scanning is total. Input that ends inside a construct still
//!   yields everything accumulated so far, plus a flag naming the open
//!   construct, so callers can distrust the result without handling errors.

use alloc::string::String;

use crate::{
    regex_context, spacing,
    state::{OpenConstruct, ScanState},
};

/// The result of one minification pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Minified {
    /// The compacted text.
    pub text: String,
    /// `true` when the scan finished outside any string, comment or regex.
    /// `false` means the input ended mid-construct (truncated or malformed
    /// source); `text` still holds the best-effort output.
    pub ended_cleanly: bool,
    /// The construct left open when the scan did not end cleanly.
    pub open_construct: Option<OpenConstruct>,
}

/// Minifies one file's worth of source text.
///
/// Comments are removed, whitespace runs outside strings and regexes
/// collapse to at most one space, and string/regex bodies are preserved
/// byte-for-byte, escape sequences included. The pass never fails; see
/// [`Minified::ended_cleanly`] for the malformed-input signal.
///
/// ```rust
/// use jscrunch::minify;
///
/// assert_eq!(minify("a /* gap */ b").text, "a b");
/// ```
#[must_use]
pub fn minify(input: &str) -> Minified {
    Minifier::new(input).run()
}

struct Minifier<'src> {
    src: &'src str,
    /// Byte offset of the next unread character.
    pos: usize,
    state: ScanState,
    out: String,
    /// Most recently emitted non-whitespace character; feeds the regex
    /// heuristic.
    last_nonspace: Option<char>,
    /// Length of the run of consecutive `\` just before the cursor, inside
    /// strings and regexes. Odd means the next delimiter is escaped.
    backslash_run: usize,
}

impl<'src> Minifier<'src> {
    fn new(src: &'src str) -> Self {
        Self {
            src,
            pos: 0,
            state: ScanState::Normal,
            out: String::new(),
            last_nonspace: None,
            backslash_run: 0,
        }
    }

    fn run(mut self) -> Minified {
        while let Some(ch) = self.peek() {
            match self.state {
                ScanState::Normal => self.step_normal(ch),
                ScanState::InString(quote) => self.step_string(ch, quote),
                ScanState::InLineComment => self.step_line_comment(ch),
                ScanState::InBlockComment => self.step_block_comment(ch),
                ScanState::InRegex => self.step_regex(ch),
            }
        }
        Minified {
            ended_cleanly: self.state == ScanState::Normal,
            open_construct: self.state.open_construct(),
            text: self.out,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    /// The character one past the cursor — the second of a potential `//`,
    /// `/*` or `*/` pair.
    fn peek_second(&self) -> Option<char> {
        let mut chars = self.src[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn bump(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos += ch.len_utf8();
        }
    }

    fn emit(&mut self, ch: char) {
        self.out.push(ch);
        if !ch.is_whitespace() {
            self.last_nonspace = Some(ch);
        }
    }

    fn step_normal(&mut self, ch: char) {
        match ch {
            '"' | '\'' | '`' => {
                self.bump();
                self.emit(ch);
                self.backslash_run = 0;
                self.state = ScanState::InString(ch);
            }
            '/' if self.peek_second() == Some('/') => {
                self.bump();
                self.bump();
                self.state = ScanState::InLineComment;
            }
            '/' if self.peek_second() == Some('*') => {
                self.bump();
                self.bump();
                self.state = ScanState::InBlockComment;
            }
            '/' if regex_context::opens_regex(self.last_nonspace) => {
                self.bump();
                self.emit(ch);
                self.backslash_run = 0;
                self.state = ScanState::InRegex;
            }
            c if c.is_whitespace() => self.collapse_whitespace(),
            _ => {
                self.bump();
                self.emit(ch);
            }
        }
    }

    /// Consumes a maximal whitespace run and emits at most one space.
    fn collapse_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
        if let Some(next) = self.peek() {
            if spacing::needs_space(&self.out, next) {
                self.emit(' ');
            }
        }
    }

    fn step_string(&mut self, ch: char, quote: char) {
        self.bump();
        let escaped = self.backslash_run % 2 == 1;
        self.backslash_run = if ch == '\\' { self.backslash_run + 1 } else { 0 };
        self.emit(ch);
        if ch == quote && !escaped {
            self.state = ScanState::Normal;
        }
    }

    fn step_regex(&mut self, ch: char) {
        self.bump();
        let escaped = self.backslash_run % 2 == 1;
        self.backslash_run = if ch == '\\' { self.backslash_run + 1 } else { 0 };
        self.emit(ch);
        if ch == '/' && !escaped {
            self.scan_regex_flags();
            self.state = ScanState::Normal;
        }
    }

    /// Consumes the flag letters trailing a closed regex literal.
    fn scan_regex_flags(&mut self) {
        while let Some(c) = self.peek() {
            if !matches!(c, 'g' | 'i' | 'm' | 's' | 'u' | 'y') {
                break;
            }
            self.bump();
            self.emit(c);
        }
    }

    fn step_line_comment(&mut self, ch: char) {
        if ch == '\n' {
            // The newline is not comment content; the whitespace policy
            // decides whether the gap it leaves survives.
            self.state = ScanState::Normal;
        } else {
            self.bump();
        }
    }

    fn step_block_comment(&mut self, ch: char) {
        if ch == '*' && self.peek_second() == Some('/') {
            self.bump();
            self.bump();
            self.state = ScanState::Normal;
        } else {
            self.bump();
        }
    }
}
