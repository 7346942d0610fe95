//! Pluggable external recognizer lifecycle contract.
//!
//! Parsing hosts manage external recognizers through a fixed lifecycle:
//! create an instance, hand it the lexer for each scan, and — for
//! recognizers that keep cross-edit state — serialize and restore that
//! state around incremental edits. The contract is uniform even for
//! recognizers with nothing to persist, so a stateless recognizer simply
//! reports a zero-length serialization. Destruction is [`Drop`].

use crate::lexer::HostLexer;
use crate::token::TokenSet;

/// Recognizer pluggable into a parsing host.
///
/// Implementations must be total: `scan` terminates for any finite input
/// and never signals an error — the only outcomes are matched (result slot
/// set, marked span committed) and not matched.
pub trait ExternalScanner: Default {
    /// Create a fresh recognizer.
    fn create() -> Self {
        Self::default()
    }

    /// Write internal state into `buffer`, returning the number of bytes
    /// written. Stateless recognizers return `0` and write nothing.
    fn serialize(&self, buffer: &mut [u8]) -> usize;

    /// Restore internal state from `buffer`. Must accept any buffer a
    /// previous [`serialize`](Self::serialize) produced, including the
    /// empty one.
    fn deserialize(&mut self, buffer: &[u8]);

    /// Attempt to recognize one of the `valid` token kinds at the lexer's
    /// position. On `true` the matched kind is in the lexer's result slot
    /// and the marked span is the token; on `false` nothing is committed.
    fn scan<L: HostLexer>(&mut self, lexer: &mut L, valid: TokenSet) -> bool;
}
