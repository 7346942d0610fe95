//! Input primitives for the template content scanner.
//!
//! [`TemplateSource`] owns a copy of the template text with a single
//! `0x00` byte appended; [`Cursor`] walks it one character at a time. The
//! appended byte lets a scan loop run off the end of the text and read the
//! terminator instead of panicking, so the hot path tests for end of input
//! with a byte compare rather than a bounds check. End of input itself is
//! positional: a null byte *inside* the template is ordinary text.
//!
//! Nothing here knows about tokens or escapes — the recognizer in
//! `gst_scanner` supplies those.

mod source;

pub use source::{Cursor, TemplateSource};
