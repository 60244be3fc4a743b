//! Iteration adapters over [`Tokenizer`].
//!
//! The tokenizer core only knows how to pull one token. This module turns
//! that into the shapes consumers iterate over: plain [`Token`]s, or
//! `(code, (line, pos), value)` tuples for callers that store tokens as
//! untyped records.

use crate::token::Token;
use crate::Tokenizer;

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

/// A token as `(kind code, (line, pos), value)`.
pub type TokenTuple = (u8, (u32, u32), String);

/// Iterator yielding [`TokenTuple`]s. Created by [`Tokenizer::tuples`].
#[derive(Debug)]
pub struct Tuples<'a> {
    inner: Tokenizer<'a>,
}

impl Iterator for Tuples<'_> {
    type Item = TokenTuple;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_token().map(Token::into_tuple)
    }
}

impl std::iter::FusedIterator for Tuples<'_> {}

impl<'a> Tokenizer<'a> {
    /// Converts this tokenizer into an iterator of tuples.
    ///
    /// ```
    /// use cmptok_lex::Tokenizer;
    ///
    /// let tuples: Vec<_> = Tokenizer::new("a->b").tuples().collect();
    /// assert_eq!(tuples, vec![(8, (1, 1), "->".to_string())]);
    /// ```
    pub fn tuples(self) -> Tuples<'a> {
        Tuples { inner: self }
    }
}

/// Tokenizes `source` completely.
///
/// ```
/// use cmptok_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("// only a comment");
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].kind, TokenKind::LineComment);
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    Tokenizer::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    #[test]
    fn test_iterator_matches_pull() {
        let source = "x = \"s\"; // c\n/* b */ y <<= 3;";
        let mut pulled = Vec::new();
        let mut tokenizer = Tokenizer::new(source);
        while let Some(token) = tokenizer.next_token() {
            pulled.push(token);
        }
        assert_eq!(tokenize(source), pulled);
    }

    #[test]
    fn test_tuples_shape() {
        let tuples: Vec<TokenTuple> = Tokenizer::new("/* a */\n42").tuples().collect();
        assert_eq!(
            tuples,
            vec![
                (TokenKind::BlockComment.code(), (1, 0), "/* a */".to_string()),
                (TokenKind::Const.code(), (2, 8), "42".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_iterators() {
        assert_eq!(Tokenizer::new("").count(), 0);
        assert_eq!(Tokenizer::from_option(None).tuples().count(), 0);
    }

    #[test]
    fn test_values_outlive_tokenizer() {
        let values: Vec<String> = {
            let tokenizer = Tokenizer::new("1 2 3");
            tokenizer.map(|t| t.value).collect()
        };
        assert_eq!(values, vec!["1", "2", "3"]);
    }
}
