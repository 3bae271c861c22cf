//! Byte cursor over the input line.
//!
//! Productions in `grammar.rs` advance a `Cursor` as they consume text. The
//! cursor is `Copy`, so backtracking is a plain save/restore:
//!
//! ```text
//! let saved = *cur;
//! if production(cur).is_none() { *cur = saved; }
//! ```
//!
//! All positions are byte offsets and always sit on a char boundary.

use crate::Span;
use regex::Regex;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Cursor { input, pos: 0 }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Advance by `len` bytes (clamped to the end of input).
    pub fn advance(&mut self, len: usize) {
        self.pos = (self.pos + len).min(self.input.len());
    }

    pub fn advance_to_end(&mut self) {
        self.pos = self.input.len();
    }

    /// Skip chars matching `pred`; returns the number of bytes skipped.
    pub fn skip_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let rest = self.rest();
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
        len
    }

    pub fn skip_whitespace(&mut self) -> usize {
        self.skip_while(char::is_whitespace)
    }

    pub fn eat_char(&mut self, c: char) -> bool {
        if self.rest().starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume `word` if the remaining input starts with it, ignoring ASCII case.
    pub fn eat_ignore_case(&mut self, word: &str) -> bool {
        match self.rest().get(..word.len()) {
            Some(head) if head.eq_ignore_ascii_case(word) => {
                self.pos += word.len();
                true
            }
            _ => false,
        }
    }

    /// Run an anchored (`^`) regex at the cursor and consume the match.
    pub fn eat_regex(&mut self, re: &Regex) -> Option<&'a str> {
        let rest = self.rest();
        let m = re.find(rest)?;
        if m.start() != 0 {
            return None;
        }
        self.pos += m.end();
        Some(&rest[..m.end()])
    }

    /// Span from `start` to the current position.
    pub fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_restore() {
        let mut cur = Cursor::new("2 to 3 cups");
        let saved = cur;
        assert!(cur.eat_char('2'));
        assert_eq!(cur.skip_whitespace(), 1);
        assert!(cur.eat_ignore_case("TO"));
        assert_eq!(cur.rest(), " 3 cups");

        cur = saved;
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eat_ignore_case("to"));
    }

    #[test]
    fn eat_regex_is_anchored() {
        let mut cur = Cursor::new("flour 12");
        assert_eq!(cur.eat_regex(regex!(r"\d+")), None);
        assert_eq!(cur.pos(), 0);
        assert_eq!(cur.eat_regex(regex!(r"^[a-z]+")), Some("flour"));
        assert_eq!(cur.span_from(0), Span::new(0, 5));
    }
}
