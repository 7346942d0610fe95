//! External token kinds and the requested-kind set.
//!
//! The grammar declares which tokens are delegated to the external
//! recognizer; this scanner supports exactly one, [`ExternalToken::Content`].
//! At each call site the host passes a [`TokenSet`] naming the kinds that
//! are syntactically valid at the current position, so the recognizer can
//! defer entirely when content is not legal there (for example immediately
//! after a tag-open delimiter).

use bitflags::bitflags;

/// External token kinds this recognizer can produce.
///
/// One byte, stable discriminants: hosts store the matched kind in a result
/// slot and may persist it in token streams.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExternalToken {
    /// A maximal run of literal template text between escape sequences.
    Content = 0,
}

bitflags! {
    /// Set of external token kinds the host will accept at a position.
    ///
    /// Mirrors the grammar's per-position "valid symbols" mask. An empty
    /// set means the recognizer must not consume anything.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct TokenSet: u8 {
        /// Literal template text is valid here.
        const CONTENT = 1 << 0;
    }
}

impl TokenSet {
    /// Returns `true` if `token` is among the requested kinds.
    pub fn requests(self, token: ExternalToken) -> bool {
        match token {
            ExternalToken::Content => self.contains(Self::CONTENT),
        }
    }
}
