//! Numeric literal reading.

use crate::classify::is_alphanumeric;
use crate::token::{Token, TokenKind};
use crate::Tokenizer;

impl<'a> Tokenizer<'a> {
    /// Reads a numeric constant.
    ///
    /// Consumes a run of dots and ASCII letters and digits. The grammar of
    /// the number is not checked, so `0x1F`, `3.14f`, `1e` and `12abc` are
    /// each one constant. The byte that ends the run is left in the stream.
    pub(crate) fn read_numeric(&mut self) -> Token {
        self.mark_start();

        loop {
            let cur = self.stream.current();
            if cur != b'.' && !is_alphanumeric(cur) {
                break;
            }
            self.acc.push(cur);
            self.stream.advance();
        }

        self.finish(TokenKind::Const)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Tokenizer;

    fn lex(source: &str) -> Vec<(TokenKind, String)> {
        Tokenizer::new(source).map(|t| (t.kind, t.value)).collect()
    }

    fn constant(value: &str) -> (TokenKind, String) {
        (TokenKind::Const, value.to_string())
    }

    fn operator(value: &str) -> (TokenKind, String) {
        (TokenKind::Operator, value.to_string())
    }

    #[test]
    fn test_float_with_suffix() {
        assert_eq!(lex("3.14f"), vec![constant("3.14f")]);
    }

    #[test]
    fn test_integer_forms() {
        assert_eq!(
            lex("42 0x1F 0777 10UL"),
            vec![constant("42"), constant("0x1F"), constant("0777"), constant("10UL")]
        );
    }

    #[test]
    fn test_malformed_runs_are_accepted() {
        assert_eq!(lex("1e"), vec![constant("1e")]);
        assert_eq!(lex("12abc"), vec![constant("12abc")]);
        assert_eq!(lex("1.2.3"), vec![constant("1.2.3")]);
    }

    #[test]
    fn test_exponent_sign_splits() {
        assert_eq!(
            lex("1e-5"),
            vec![constant("1e"), operator("-"), constant("5")]
        );
    }

    #[test]
    fn test_boundary_is_not_consumed() {
        assert_eq!(
            lex("1+2;"),
            vec![constant("1"), operator("+"), constant("2"), operator(";")]
        );
        assert_eq!(lex("a[0]"), vec![operator("["), constant("0"), operator("]")]);
    }

    #[test]
    fn test_underscore_ends_run() {
        assert_eq!(lex("1_000"), vec![constant("1"), constant("000")]);
    }

    #[test]
    fn test_position() {
        let token = Tokenizer::new("  .25").next_token().unwrap();
        assert_eq!(token.value, ".25");
        assert_eq!((token.line, token.pos), (1, 2));
    }
}
