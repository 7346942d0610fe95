//! External content recognizer for Gosu-style templates.
//!
//! Template sources mix literal text with two embedded escapes: tag
//! delimiters (`<%`, also `<%=` and `<%@`) and interpolation delimiters
//! (`${`). The grammar that owns tag structure and expression syntax is
//! declarative; the one decision it cannot express is "how much literal
//! text belongs to the next content token", because recognizing a `<` that
//! is *not* followed by `%` (or a `$` not followed by `{`) takes one
//! character of lookahead with a conditional decision on the result.
//!
//! That single decision is this crate. [`ContentScanner`] is a stateless
//! recognizer the host engine calls before trying its own rules: it either
//! claims a non-empty span of literal content ending exactly at the next
//! escape trigger (or end of input), or it declines and the grammar's own
//! rule for the escape matches instead.
//!
//! # Boundary with the host
//!
//! The host lends a cursor for the duration of one call through the
//! [`HostLexer`] capability trait (lookahead, advance, mark end, result
//! slot). [`BufferLexer`] is the concrete implementation over a
//! [`gst_lexer_core::Cursor`], used by hosts that scan in-memory sources
//! and by this crate's tests. The [`ExternalScanner`] trait carries the
//! full pluggable-recognizer lifecycle (create, serialize, deserialize,
//! scan); for this recognizer the lifecycle is deliberately empty — there
//! is nothing to persist across scans.

mod content;
mod external;
mod lexer;
mod token;

pub use content::ContentScanner;
pub use external::ExternalScanner;
pub use lexer::{BufferLexer, HostLexer};
pub use token::{ExternalToken, TokenSet};
