//! Position-tracking cursor over a single line of declaration text.
//!
//! Every sub-parser takes `&mut Cursor`, consumes what it recognizes and
//! leaves the cursor on the next non-whitespace character.

use crate::error::{Error, Result};

/// Return the index of the bracket closing the one at `start`.
///
/// Only the bracket pair opened at `start` is counted; other kinds are
/// ignored, as are string literals and comments. Returns `Ok(None)` when the
/// text ends before the depth returns to zero.
pub fn index_of_closing(text: &str, start: usize) -> Result<Option<usize>> {
    let bytes = text.as_bytes();
    let open = bytes.get(start).copied().unwrap_or(0);
    let close = match open {
        b'{' => b'}',
        b'(' => b')',
        b'<' => b'>',
        _ => {
            return Err(Error::InvalidBracket {
                offset: start,
                text: text.to_string(),
            })
        }
    };

    let mut depth = 1usize;
    for (i, &b) in bytes.iter().enumerate().skip(start + 1) {
        if b == open {
            depth += 1;
        } else if b == close {
            depth -= 1;
            if depth == 0 {
                return Ok(Some(i));
            }
        }
    }
    Ok(None)
}

/// Like [`index_of_closing`], but an unmatched bracket is an error.
pub(crate) fn expect_closing(text: &str, start: usize) -> Result<usize> {
    index_of_closing(text, start)?.ok_or_else(|| Error::UnbalancedBracket {
        open: char::from(text.as_bytes()[start]),
        offset: start,
        text: text.to_string(),
    })
}

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut cur = Self { text, pos: 0 };
        cur.skip_whitespace();
        cur
    }

    /// Unconsumed text.
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub fn is_empty(&self) -> bool {
        self.rest().is_empty()
    }

    fn advance(&mut self, n: usize) {
        self.pos += n;
        self.skip_whitespace();
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Consume `prefix` if the remaining text starts with it.
    pub fn eat(&mut self, prefix: &str) -> bool {
        if self.rest().starts_with(prefix) {
            self.advance(prefix.len());
            true
        } else {
            false
        }
    }

    /// Consume `word` only when it is a whole identifier token, so `const`
    /// does not match the front of `constant`.
    pub fn eat_keyword(&mut self, word: &str) -> bool {
        let rest = self.rest();
        let whole = rest.starts_with(word)
            && !rest[word.len()..]
                .chars()
                .next()
                .is_some_and(|c| c.is_alphanumeric() || c == '_');
        if whole {
            self.advance(word.len());
        }
        whole
    }

    /// Read a type token: a template instantiation up to its matching `>`
    /// when the leading token has a `<`, otherwise the leading
    /// whitespace-delimited token.
    pub fn read_type(&mut self) -> Result<&'a str> {
        let rest = self.rest();
        let token_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let end = match rest[..token_end].find('<') {
            Some(lt) => expect_closing(rest, lt)? + 1,
            None => token_end,
        };
        self.advance(end);
        Ok(&rest[..end])
    }

    /// Read an identifier-like token ending at whitespace, `,` or `=`.
    pub fn read_name(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        let end = rest
            .find(|c: char| c.is_whitespace() || c == ',' || c == '=')
            .unwrap_or(rest.len());
        if end == 0 {
            return None;
        }
        self.advance(end);
        Some(&rest[..end])
    }

    /// Read an expression up to the first comma outside every `{}`, `[]`,
    /// `()` and `<>` pair, or to the end of the text. The comma itself is
    /// left for the caller.
    pub fn read_until_top_level_comma(&mut self) -> &'a str {
        let rest = self.rest();
        let (mut curly, mut square, mut round, mut angle) = (0i32, 0i32, 0i32, 0i32);
        let mut end = rest.len();
        for (i, c) in rest.char_indices() {
            match c {
                '{' => curly += 1,
                '}' => curly -= 1,
                '[' => square += 1,
                ']' => square -= 1,
                '(' => round += 1,
                ')' => round -= 1,
                '<' => angle += 1,
                '>' => angle -= 1,
                ',' if curly == 0 && square == 0 && round == 0 && angle == 0 => {
                    end = i;
                    break;
                }
                _ => {}
            }
        }
        self.advance(end);
        rest[..end].trim_end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_angle_with_nesting() {
        let text = "aabb<D, vec<3, T>> rest";
        let close = index_of_closing(text, 4).unwrap().unwrap();
        assert_eq!(close, 17);
        assert_eq!(&text[4..=close], "<D, vec<3, T>>");
    }

    #[test]
    fn closing_each_bracket_kind() {
        assert_eq!(index_of_closing("{a{b}c}", 0).unwrap(), Some(6));
        assert_eq!(index_of_closing("f(g(x), y)", 1).unwrap(), Some(9));
        assert_eq!(index_of_closing("<<>>", 0).unwrap(), Some(3));
    }

    #[test]
    fn closing_ignores_other_bracket_kinds() {
        // Only parentheses are counted when starting at '('.
        assert_eq!(index_of_closing("(a<b)", 0).unwrap(), Some(4));
    }

    #[test]
    fn closing_unbalanced_is_none() {
        assert_eq!(index_of_closing("pos<D, vec<3>", 3).unwrap(), None);
        assert_eq!(index_of_closing("(", 0).unwrap(), None);
    }

    #[test]
    fn closing_rejects_non_bracket_start() {
        assert!(matches!(
            index_of_closing("abc", 1),
            Err(Error::InvalidBracket { offset: 1, .. })
        ));
        assert!(index_of_closing("abc", 10).is_err());
    }

    #[test]
    fn read_type_simple_and_templated() {
        let mut cur = Cursor::new("int x");
        assert_eq!(cur.read_type().unwrap(), "int");
        assert_eq!(cur.rest(), "x");

        let mut cur = Cursor::new("pos<D, ScalarT> const& v");
        assert_eq!(cur.read_type().unwrap(), "pos<D, ScalarT>");
        assert_eq!(cur.rest(), "const& v");
    }

    #[test]
    fn read_type_ignores_later_angle_brackets() {
        let mut cur = Cursor::new("int x = foo<int, int>(1, 2)");
        assert_eq!(cur.read_type().unwrap(), "int");
    }

    #[test]
    fn read_type_unbalanced_is_error() {
        let mut cur = Cursor::new("vec<3, T const& v");
        assert!(matches!(
            cur.read_type(),
            Err(Error::UnbalancedBracket { open: '<', .. })
        ));
    }

    #[test]
    fn eat_keyword_respects_word_boundary() {
        let mut cur = Cursor::new("constant");
        assert!(!cur.eat_keyword("const"));
        let mut cur = Cursor::new("const& v");
        assert!(cur.eat_keyword("const"));
        assert_eq!(cur.rest(), "& v");
    }

    #[test]
    fn read_name_stops_at_separators() {
        let mut cur = Cursor::new("a, int b");
        assert_eq!(cur.read_name(), Some("a"));
        assert_eq!(cur.rest(), ", int b");

        let mut cur = Cursor::new("x=3");
        assert_eq!(cur.read_name(), Some("x"));
        assert_eq!(cur.rest(), "=3");

        let mut cur = Cursor::new(", y");
        assert_eq!(cur.read_name(), None);
    }

    #[test]
    fn top_level_comma_skips_nested() {
        let mut cur = Cursor::new("foo<int, int>(1, 2), float y");
        assert_eq!(cur.read_until_top_level_comma(), "foo<int, int>(1, 2)");
        assert_eq!(cur.rest(), ", float y");

        let mut cur = Cursor::new("{1, 2} ");
        assert_eq!(cur.read_until_top_level_comma(), "{1, 2}");
        assert!(cur.is_empty());
    }
}
