//! Host lexer capability surface.
//!
//! The host engine owns the input cursor; the recognizer borrows it for the
//! duration of one `scan` call through the [`HostLexer`] trait. The trait
//! is the narrow wire between the two sides: one byte of lookahead, forward
//! movement, a tentative end mark, and a result slot. Nothing the
//! recognizer does through it is committed until the host reads the mark
//! back after a matched return.
//!
//! [`BufferLexer`] is the concrete implementation over a
//! [`Cursor`](gst_lexer_core::Cursor), for hosts scanning in-memory
//! sources.

use gst_lexer_core::Cursor;

use crate::token::ExternalToken;

/// Cursor capabilities the host lends to an external recognizer.
///
/// # Commit protocol
///
/// `advance` moves the raw read position; `mark_end` records the tentative
/// end of the token being built. The host treats the marked position as the
/// end of the matched token only when `scan` returns `true` — on a `false`
/// return the raw position may have moved past the mark (lookahead), but
/// nothing is committed.
pub trait HostLexer {
    /// Byte at the current read position, `0` at end of input.
    fn lookahead(&self) -> u8;

    /// Returns `true` when the read position is at end of input.
    ///
    /// Kept separate from [`lookahead`](Self::lookahead) returning `0` so
    /// that sources containing interior null bytes still scan as content.
    fn is_eof(&self) -> bool;

    /// Advance the read position past one character.
    fn advance(&mut self);

    /// Record the current read position as the tentative token end.
    fn mark_end(&mut self);

    /// Store the matched token kind in the host's result slot.
    ///
    /// Called at most once per scan, and only on the matched path.
    fn set_result(&mut self, token: ExternalToken);
}

/// [`HostLexer`] over an in-memory sentinel-terminated source.
///
/// Records the scan's start position on construction; the marked token end
/// starts equal to it, so a scan that declines commits an empty (ignored)
/// span no matter how far its lookahead read ahead.
#[derive(Debug)]
pub struct BufferLexer<'a> {
    cursor: Cursor<'a>,
    start: u32,
    token_end: u32,
    result: Option<ExternalToken>,
}

impl<'a> BufferLexer<'a> {
    /// Create a lexer for one scan starting at the cursor's position.
    pub fn new(cursor: Cursor<'a>) -> Self {
        let start = cursor.pos();
        Self {
            cursor,
            start,
            token_end: start,
            result: None,
        }
    }

    /// Position the scan started from.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Marked token end. Meaningful only after a matched scan.
    pub fn token_end(&self) -> u32 {
        self.token_end
    }

    /// Raw read position (may be ahead of the marked end by lookahead).
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Matched token kind, if a scan stored one.
    pub fn result(&self) -> Option<ExternalToken> {
        self.result
    }

    /// Text of the committed span (`start..token_end`).
    ///
    /// Empty until a scan accepts content. Both ends are character-aligned:
    /// the scanner only marks positions before or after whole characters.
    pub fn token_text(&self) -> &'a str {
        self.cursor.slice(self.start, self.token_end)
    }
}

impl HostLexer for BufferLexer<'_> {
    #[inline]
    fn lookahead(&self) -> u8 {
        self.cursor.current()
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    #[inline]
    fn advance(&mut self) {
        self.cursor.advance_char();
    }

    #[inline]
    fn mark_end(&mut self) {
        self.token_end = self.cursor.pos();
    }

    #[inline]
    fn set_result(&mut self, token: ExternalToken) {
        self.result = Some(token);
    }
}
