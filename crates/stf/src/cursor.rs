/// Character cursor over a text buffer. `pos` is always a byte offset on a
/// char boundary.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    pub fn at(text: &'a str, pos: usize) -> Self {
        debug_assert!(text.is_char_boundary(pos));
        Self { text, pos }
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// The character after the current one.
    #[inline]
    pub fn peek_second(&self) -> Option<char> {
        let mut it = self.text[self.pos..].chars();
        it.next();
        it.next()
    }

    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// True at end of buffer or on the line terminator.
    #[inline]
    pub fn at_line_end(&self, terminator: char) -> bool {
        match self.peek() {
            None => true,
            Some(c) => c == terminator,
        }
    }

    pub fn skip_while(&mut self, c: char) {
        while self.peek() == Some(c) {
            self.pos += c.len_utf8();
        }
    }
}

/// Byte offsets of every `term` in `text`.
#[cfg(feature = "perf_memchr")]
pub(crate) fn terminator_offsets<'a>(text: &'a str, term: char) -> Box<dyn Iterator<Item = usize> + 'a> {
    if term.is_ascii() {
        Box::new(memchr::memchr_iter(term as u8, text.as_bytes()))
    } else {
        Box::new(text.match_indices(term).map(|(i, _)| i))
    }
}

/// Byte offsets of every `term` in `text`.
#[cfg(not(feature = "perf_memchr"))]
pub(crate) fn terminator_offsets(text: &str, term: char) -> impl Iterator<Item = usize> + '_ {
    text.match_indices(term).map(|(i, _)| i)
}
