use crate::model::{Token, TokenKind};

/// Read-ahead view over the lexer's output.
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn done(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.position + offset)
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind(0) == Some(kind)
    }

    pub fn peek_kind(&self, offset: usize) -> Option<TokenKind> {
        self.peek(offset).map(|token| token.kind)
    }

    /// Consumes the next token if it has the requested kind.
    pub fn match_and_remove(&mut self, kind: TokenKind) -> Option<Token> {
        if !self.check(kind) {
            return None;
        }
        let token = self.tokens[self.position].clone();
        self.position += 1;
        Some(token)
    }

    /// Position of the next token, or of the last token once the stream is exhausted.
    pub fn position(&self) -> (usize, usize) {
        self.tokens
            .get(self.position)
            .or_else(|| self.tokens.last())
            .map(|token| (token.line, token.column))
            .unwrap_or((1, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream() -> TokenStream {
        TokenStream::new(vec![
            Token::with_value(TokenKind::Identifier, "Birds".to_string(), 1, 1),
            Token::new(TokenKind::Equal, 1, 7),
            Token::new(TokenKind::Newline, 1, 8),
        ])
    }

    #[test]
    fn test_match_and_remove() {
        let mut tokens = stream();
        assert!(tokens.match_and_remove(TokenKind::Equal).is_none());
        let ident = tokens.match_and_remove(TokenKind::Identifier).unwrap();
        assert_eq!(ident.text(), "Birds");
        assert_eq!(tokens.peek_kind(1), Some(TokenKind::Newline));
        assert_eq!(tokens.position(), (1, 7));
    }

    #[test]
    fn test_position_after_exhaustion() {
        let mut tokens = stream();
        tokens.match_and_remove(TokenKind::Identifier);
        tokens.match_and_remove(TokenKind::Equal);
        tokens.match_and_remove(TokenKind::Newline);
        assert!(tokens.done());
        assert_eq!(tokens.peek(0), None);
        assert_eq!(tokens.position(), (1, 8));
    }
}
