//! Comment reading.
//!
//! Comments are tokens here, not trivia: their text takes part in source
//! comparison like anything else.

use cmptok_util::diagnostic::W_UNTERMINATED_BLOCK_COMMENT;

use crate::token::{Token, TokenKind};
use crate::Tokenizer;

impl<'a> Tokenizer<'a> {
    /// Reads a line comment (from `//` to end of line).
    ///
    /// The terminating newline is consumed but not included in the value.
    pub(crate) fn read_line_comment(&mut self) -> Token {
        self.mark_start();

        while let Some((cur, _)) = self.stream.iterate() {
            if cur == b'\n' {
                break;
            }
            self.acc.push(cur);
        }

        self.finish(TokenKind::LineComment)
    }

    /// Reads a block comment (from `/*` to the first `*/`).
    ///
    /// Block comments do not nest. The opening `/*` is consumed before the
    /// closing search starts, so `/*/` does not close itself.
    pub(crate) fn read_block_comment(&mut self) -> Token {
        self.mark_start();

        for _ in 0..2 {
            if let Some((cur, _)) = self.stream.iterate() {
                self.acc.push(cur);
            }
        }

        let mut prev_was_star = false;
        while let Some((cur, _)) = self.stream.iterate() {
            self.acc.push(cur);
            if cur == b'/' && prev_was_star {
                return self.finish(TokenKind::BlockComment);
            }
            prev_was_star = cur == b'*';
        }

        self.finish_truncated(
            TokenKind::BlockComment,
            W_UNTERMINATED_BLOCK_COMMENT,
            "unterminated block comment",
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Tokenizer;

    fn first(source: &str) -> crate::Token {
        Tokenizer::new(source).next_token().unwrap()
    }

    #[test]
    fn test_line_comment_excludes_newline() {
        let token = first("// hello\n");
        assert_eq!(token.kind, TokenKind::LineComment);
        assert_eq!(token.value, "// hello");
        assert_eq!((token.line, token.pos), (1, 0));
        assert!(!token.truncated);
    }

    #[test]
    fn test_line_comment_at_eof() {
        assert_eq!(first("// test").value, "// test");
    }

    #[test]
    fn test_line_comment_consumes_newline() {
        let mut tokenizer = Tokenizer::new("// a\n+");
        tokenizer.next_token().unwrap();
        assert_eq!(tokenizer.line(), 2);
        let plus = tokenizer.next_token().unwrap();
        assert_eq!((plus.line, plus.pos), (2, 5));
    }

    #[test]
    fn test_line_comment_keeps_carriage_return() {
        assert_eq!(first("// dos\r\n").value, "// dos\r");
    }

    #[test]
    fn test_block_comment() {
        let token = first("/* test */");
        assert_eq!(token.kind, TokenKind::BlockComment);
        assert_eq!(token.value, "/* test */");
        assert!(!token.truncated);
    }

    #[test]
    fn test_block_comment_empty() {
        assert_eq!(first("/**/").value, "/**/");
    }

    #[test]
    fn test_block_comment_one_star() {
        assert_eq!(first("/*/ test */").value, "/*/ test */");
    }

    #[test]
    fn test_block_comment_newlines() {
        let code = "/* multi line\ncomment */";
        let mut tokenizer = Tokenizer::new(code);
        assert_eq!(tokenizer.next_token().unwrap().value, code);
        assert_eq!(tokenizer.line(), 2);
    }

    #[test]
    fn test_block_comment_does_not_nest() {
        let mut tokenizer = Tokenizer::new("/* a /* b */ c */");
        assert_eq!(tokenizer.next_token().unwrap().value, "/* a /* b */");
        let rest: Vec<_> = std::iter::from_fn(|| tokenizer.next_token())
            .map(|t| t.value)
            .collect();
        assert_eq!(rest, vec!["*".to_string(), "/".to_string()]);
    }

    #[test]
    fn test_block_comment_unterminated() {
        let token = first("/* open");
        assert_eq!(token.value, "/* open");
        assert!(token.truncated);
    }

    #[test]
    fn test_block_comment_opening_only() {
        let token = first("/*");
        assert_eq!(token.value, "/*");
        assert!(token.truncated);
    }
}
