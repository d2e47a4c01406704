//! Build-time minification for ECMAScript-family source text.
//!
//! `jscrunch` shrinks whitespace and strips comments from one in-memory
//! source buffer at a time while preserving the token stream: string,
//! template and regex literal bodies are copied verbatim, and a whitespace
//! run survives (as exactly one space) only where removing it would merge
//! two tokens into one.
//!
//! The engine is a single forward pass over the decoded input: no syntax
//! tree, no identifier renaming, no dead-code elimination, no source maps.
//! Scanning is total. Malformed input still produces a best-effort result,
//! and [`Minified::ended_cleanly`] reports whether the pass finished outside
//! any string/comment/regex construct so callers can decide how much to
//! trust a truncated file.
//!
//! ```rust
//! use jscrunch::minify;
//!
//! let out = minify("let x = 1;  // counter\nlet y = 2;");
//! assert_eq!(out.text, "let x=1;let y=2;");
//! assert!(out.ended_cleanly);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod minifier;
mod regex_context;
mod spacing;
mod state;

#[cfg(test)]
mod tests;

pub use minifier::{Minified, minify};
pub use state::OpenConstruct;
