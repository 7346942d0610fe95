//! Template text with a terminating byte, and the cursor over it.

/// Template text, copied and terminated with a single `0x00` byte.
///
/// The terminator keeps [`Cursor::current`] an in-bounds read at every
/// position a scan can reach. Construction takes `&str`, so every
/// multi-byte character in the buffer is complete and stepping by
/// character width never lands past the terminator.
#[derive(Clone, Debug)]
pub struct TemplateSource {
    /// Text bytes followed by one `0x00` terminator.
    bytes: Vec<u8>,
    /// Byte length of the text (terminator excluded).
    text_len: u32,
}

impl TemplateSource {
    /// Copy `text` and append the terminator.
    ///
    /// Texts longer than `u32::MAX` bytes saturate the recorded length;
    /// hosts should reject multi-gigabyte templates before scanning.
    pub fn new(text: &str) -> Self {
        let mut bytes = Vec::with_capacity(text.len() + 1);
        bytes.extend_from_slice(text.as_bytes());
        bytes.push(0);
        Self {
            bytes,
            text_len: u32::try_from(text.len()).unwrap_or(u32::MAX),
        }
    }

    /// A cursor positioned at the first character.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor {
            bytes: &self.bytes,
            pos: 0,
            text_len: self.text_len,
        }
    }
}

/// Read position within a [`TemplateSource`].
///
/// `Copy`, so a host can keep the position it started a scan from while a
/// recognizer moves a borrowed copy forward.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: u32,
    text_len: u32,
}

impl<'a> Cursor<'a> {
    /// Byte at the read position; `0x00` at end of input.
    ///
    /// A zero return does not by itself mean the input is exhausted — the
    /// template may contain null bytes. [`is_eof`](Self::is_eof) checks
    /// the position as well.
    #[inline]
    pub fn current(&self) -> u8 {
        self.bytes[self.pos as usize]
    }

    /// Whether the read position has passed the last character.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text_len
    }

    /// Step over one character.
    ///
    /// The UTF-8 leading byte gives the width; anything that is not a
    /// leading byte (which a `&str`-backed buffer never puts at the read
    /// position) counts as one byte, so progress is unconditional.
    #[inline]
    pub fn advance_char(&mut self) {
        self.pos += match self.current() {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
    }

    /// Byte offset of the read position.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// The text between two byte offsets.
    ///
    /// Offsets must come from [`pos()`](Self::pos) readings, which always
    /// sit on character boundaries of the original `&str`.
    #[allow(
        unsafe_code,
        reason = "offsets from pos() stay on char boundaries of the original &str"
    )]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            start <= end && end <= self.text_len,
            "bad slice offsets {start}..{end} in text of length {}",
            self.text_len
        );
        // SAFETY: the buffer is a byte copy of a `&str`, and both offsets
        // are prior pos() values, hence in range and character-aligned.
        unsafe { std::str::from_utf8_unchecked(&self.bytes[start as usize..end as usize]) }
    }
}
