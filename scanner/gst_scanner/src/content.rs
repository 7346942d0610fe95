//! Content recognition: how much literal text precedes the next escape.
//!
//! The scan is a two-state machine over one character of lookahead. In
//! `Accumulating` it absorbs ordinary characters, moving the tentative end
//! mark after each one. On a marker character (`<` or `$`) it marks the
//! span end *before* the marker, steps past it, and switches to
//! `CheckingTrigger`: if the next character completes the escape (`%` after
//! `<`, `{` after `$`) the scan stops — emitting the accumulated span, or
//! declining when the escape sits at the scan start; otherwise the marker
//! was ordinary text, the mark moves past it, and accumulation resumes.
//!
//! No rewind is ever needed: the decline paths simply return before the
//! mark is finalized, and the host re-reads from the committed position.

use crate::external::ExternalScanner;
use crate::lexer::HostLexer;
use crate::token::{ExternalToken, TokenSet};

/// First byte of a tag escape (`<%`).
const TAG_MARKER: u8 = b'<';
/// Second byte confirming a tag escape.
const TAG_CONFIRM: u8 = b'%';
/// First byte of an interpolation escape (`${`).
const INTERP_MARKER: u8 = b'$';
/// Second byte confirming an interpolation escape.
const INTERP_CONFIRM: u8 = b'{';

/// Scan state: either absorbing ordinary characters or sitting one past a
/// candidate marker, deciding trigger-vs-content from the lookahead byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    Accumulating,
    CheckingTrigger {
        /// Byte that would confirm the escape (`%` after `<`, `{` after `$`).
        confirm: u8,
    },
}

/// Stateless recognizer for [`ExternalToken::Content`].
///
/// Holds no data: all scan state is transient to one [`scan`] call, so the
/// lifecycle hooks are empty and an instance can be shared across any
/// number of scans.
///
/// [`scan`]: ExternalScanner::scan
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContentScanner;

impl ExternalScanner for ContentScanner {
    /// Nothing to persist across scans.
    fn serialize(&self, _buffer: &mut [u8]) -> usize {
        0
    }

    /// Nothing to restore; any buffer is accepted without effect.
    fn deserialize(&mut self, _buffer: &[u8]) {}

    fn scan<L: HostLexer>(&mut self, lexer: &mut L, valid: TokenSet) -> bool {
        if !valid.requests(ExternalToken::Content) {
            // Content is not legal here; defer to the grammar untouched.
            return false;
        }

        let mut has_content = false;
        let mut state = ScanState::Accumulating;

        loop {
            match state {
                ScanState::Accumulating => {
                    if lexer.is_eof() {
                        break;
                    }
                    match lexer.lookahead() {
                        TAG_MARKER => {
                            lexer.mark_end();
                            lexer.advance();
                            state = ScanState::CheckingTrigger {
                                confirm: TAG_CONFIRM,
                            };
                        }
                        INTERP_MARKER => {
                            lexer.mark_end();
                            lexer.advance();
                            state = ScanState::CheckingTrigger {
                                confirm: INTERP_CONFIRM,
                            };
                        }
                        _ => {
                            // Ordinary character, interior nulls included.
                            lexer.advance();
                            lexer.mark_end();
                            has_content = true;
                        }
                    }
                }
                ScanState::CheckingTrigger { confirm } => {
                    if !lexer.is_eof() && lexer.lookahead() == confirm {
                        // Escape confirmed. Emit what was accumulated;
                        // with nothing accumulated the mark still equals
                        // the scan start, so declining commits nothing and
                        // the grammar matches the escape itself.
                        if has_content {
                            lexer.set_result(ExternalToken::Content);
                            return true;
                        }
                        return false;
                    }
                    // Lone marker (including marker at EOF): ordinary
                    // content. Move the mark past it and keep accumulating
                    // from the unconfirmed lookahead character.
                    has_content = true;
                    lexer.mark_end();
                    state = ScanState::Accumulating;
                }
            }
        }

        // Input exhausted: flush whatever was accumulated.
        if has_content {
            lexer.set_result(ExternalToken::Content);
            return true;
        }
        false
    }
}
