//! # segroute-core
//!
//! Segment trie and matcher for URL-style path patterns.
//!
//! A route definition is a `/`-separated list of segments:
//!
//! - `users` - a literal, matched exactly and case-sensitively
//! - `:id` - a named parameter, matching any non-empty segment
//! - `:id(\d+)` - a regex parameter; the pattern is anchored and
//!   case-insensitive
//! - `(edit|view)` - an alternation, shorthand for one literal per branch
//!
//! Routes are inserted into a [`Trie`] with [`Trie::define`] and looked up with
//! [`Trie::find`], which returns the terminal [`NodeRef`] together with the
//! captured [`Params`].
//!
//! # Precedence
//!
//! At every depth a literal beats any regex, regexes are tried in
//! declaration order, and the plain parameter comes last. Once a child is
//! chosen the matcher never revisits that decision.
//!
//! # Error Types
//!
//! - [`DefineError`] - Invalid route definitions
//! - [`MatchError`] - Undecodable input paths
//! - [`RouterError`] - Top-level error type

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod decode;
mod error;
mod matcher;
mod node;
mod segment;
mod trie;

// Re-exports
pub use decode::{decode_path, decode_segment};
pub use error::{BoxError, DefineError, MatchError, RouterError};
pub use matcher::{Match, Params};
pub use node::{NodeId, NodeKind, NodeRef};
pub use segment::{Segment, compile_pattern, parse_path};
pub use trie::Trie;
