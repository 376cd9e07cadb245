use log::trace;

use super::text_cursor::TextCursor;
use crate::error::SyntaxError;
use crate::model::{Token, TokenKind};

pub const INDENT_WIDTH: usize = 4;

pub struct Lexer {
    cursor: TextCursor,
    tokens: Vec<Token>,
    indent_stack: Vec<usize>,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            cursor: TextCursor::new(source),
            tokens: Vec::new(),
            indent_stack: vec![0],
            line: 1,
            column: 1,
        }
    }

    pub fn lex(mut self) -> Result<Vec<Token>, SyntaxError> {
        while let Some(c) = self.cursor.peek() {
            if c == '\n' {
                self.newline()?;
                continue;
            }

            if c == ' ' || c == '\t' || c == '\r' {
                self.cursor.next_char();
                self.column += 1;
                continue;
            }

            let next = self.cursor.peek_at(1);
            match (c, next) {
                ('=', Some('>')) => {
                    self.emit_wide(TokenKind::Yields);
                    continue;
                }
                ('!', Some('=')) => {
                    self.emit_wide(TokenKind::NotEqual);
                    continue;
                }
                _ => {}
            }

            let punctuation = match c {
                '=' => Some(TokenKind::Equal),
                '.' => Some(TokenKind::Dot),
                ',' => Some(TokenKind::Comma),
                ':' => Some(TokenKind::Colon),
                '{' => Some(TokenKind::LeftCurly),
                '}' => Some(TokenKind::RightCurly),
                '[' => Some(TokenKind::LeftBracket),
                ']' => Some(TokenKind::RightBracket),
                _ => None,
            };
            if let Some(kind) = punctuation {
                self.tokens.push(Token::new(kind, self.line, self.column));
                self.cursor.next_char();
                self.column += 1;
                continue;
            }

            if c.is_alphabetic() || c == '_' {
                self.word();
                continue;
            }

            if c.is_ascii_digit() {
                let start = self.column;
                let digits = self.cursor.take_while(|c| c.is_ascii_digit());
                self.column += digits.chars().count();
                self.tokens
                    .push(Token::with_value(TokenKind::Number, digits, self.line, start));
                continue;
            }

            return Err(SyntaxError::new(
                format!("unexpected character '{}'", c),
                self.line,
                self.column,
            ));
        }

        while self.indent_stack.len() > 1 {
            self.indent_stack.pop();
            self.tokens.push(Token::new(TokenKind::Dedent, self.line, 1));
        }
        self.tokens
            .push(Token::new(TokenKind::Newline, self.line, self.column));

        trace!(target: "lexer", "Tokens: {:?}", self.tokens);
        Ok(self.tokens)
    }

    /// Emits the NEWLINE, then measures the next line's indentation.
    fn newline(&mut self) -> Result<(), SyntaxError> {
        self.cursor.next_char();
        self.tokens
            .push(Token::new(TokenKind::Newline, self.line, self.column));
        self.line += 1;
        self.column = 1;

        let mut width = 0;
        while let Some(c) = self.cursor.peek() {
            match c {
                ' ' => width += 1,
                '\t' => width += INDENT_WIDTH,
                _ => break,
            }
            self.cursor.next_char();
        }

        if self.is_blank_line() {
            return Ok(());
        }

        if width % INDENT_WIDTH != 0 {
            return Err(SyntaxError::new(
                format!("indentation must be a multiple of {}", INDENT_WIDTH),
                self.line,
                width + 1,
            ));
        }

        let current = self.current_indent();
        if width > current {
            self.indent_stack.push(width);
            self.tokens.push(Token::new(TokenKind::Indent, self.line, 1));
        } else if width < current {
            while width < self.current_indent() {
                self.indent_stack.pop();
                self.tokens.push(Token::new(TokenKind::Dedent, self.line, 1));
            }
            if width != self.current_indent() {
                return Err(SyntaxError::new(
                    "unmatched indentation",
                    self.line,
                    width + 1,
                ));
            }
        }
        self.column = width + 1;
        Ok(())
    }

    fn is_blank_line(&self) -> bool {
        match self.cursor.peek() {
            None | Some('\n') => true,
            Some('\r') => matches!(self.cursor.peek_at(1), None | Some('\n')),
            _ => false,
        }
    }

    fn current_indent(&self) -> usize {
        self.indent_stack.last().copied().unwrap_or(0)
    }

    fn emit_wide(&mut self, kind: TokenKind) {
        self.tokens.push(Token::new(kind, self.line, self.column));
        self.cursor.next_char();
        self.cursor.next_char();
        self.column += 2;
    }

    fn word(&mut self) {
        let start = self.column;
        let word = self.cursor.take_while(|c| c.is_alphanumeric() || c == '_');
        self.column += word.chars().count();
        let kind = match word.as_str() {
            "var" => TokenKind::Var,
            "unique" => TokenKind::Unique,
            _ => TokenKind::Identifier,
        };
        self.tokens
            .push(Token::with_value(kind, word, self.line, start));
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    Lexer::new(source).lex()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TokenKind::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_variable_declaration() {
        assert_eq!(
            kinds("var Birds : Bird[6]"),
            vec![Var, Identifier, Colon, Identifier, LeftBracket, Number, RightBracket, Newline, Newline]
        );
    }

    #[test]
    fn test_two_character_operators() {
        assert_eq!(
            kinds("a != b => c = d"),
            vec![Identifier, NotEqual, Identifier, Yields, Identifier, Equal, Identifier, Newline, Newline]
        );
    }

    #[test]
    fn test_keywords_and_values() {
        let tokens = tokenize("Pair = [unique Color a_1]").unwrap();
        assert_eq!(tokens[3].kind, Unique);
        assert_eq!(tokens[3].text(), "unique");
        assert_eq!(tokens[4].text(), "Color");
        assert_eq!(tokens[5].text(), "a_1");
        assert_eq!(tokens[5].column, 22);
    }

    #[test]
    fn test_indent_and_dedent() {
        let source = "\
a = b =>
    c = d
    e = f
g = h
";
        assert_eq!(
            kinds(source),
            vec![
                Identifier, Equal, Identifier, Yields, Newline,
                Indent, Identifier, Equal, Identifier, Newline,
                Identifier, Equal, Identifier, Newline,
                Dedent, Identifier, Equal, Identifier, Newline,
                Newline,
            ]
        );
    }

    #[test]
    fn test_dedents_at_end_of_input() {
        let tokens = tokenize("a = b =>\n    c = d\n").unwrap();
        let tail: Vec<TokenKind> = tokens.iter().rev().take(2).map(|t| t.kind).collect();
        assert_eq!(tail, vec![Newline, Dedent]);
    }

    #[test]
    fn test_blank_lines_keep_indentation() {
        let source = "a = b =>\n    c = d\n\n   \n    e = f\n";
        let indents = kinds(source).into_iter().filter(|k| *k == Indent).count();
        let dedents = kinds(source).into_iter().filter(|k| *k == Dedent).count();
        assert_eq!(indents, 1);
        assert_eq!(dedents, 1);
    }

    #[test]
    fn test_crlf_blank_line_is_skipped() {
        let source = "a = b =>\r\n    c = d\r\n\r\n    e = f\r\n";
        let dedents = kinds(source).into_iter().filter(|k| *k == Dedent).count();
        assert_eq!(dedents, 1);
    }

    #[test]
    fn test_tab_counts_as_one_level() {
        let tokens = kinds("a = b =>\n\tc = d\n");
        assert!(tokens.contains(&Indent));
    }

    #[test]
    fn test_indentation_not_multiple_of_four() {
        let error = tokenize("Color = {red}\nx = y =>\n   y = z\n").unwrap_err();
        assert_eq!(error.line, 3);
        assert!(error.message.contains("multiple of 4"));
    }

    #[test]
    fn test_unmatched_indentation() {
        let error = tokenize("a = b =>\n        c = d\n    e = f\n").unwrap_err();
        assert_eq!(error.line, 3);
        assert_eq!(error.message, "unmatched indentation");
    }

    #[test]
    fn test_unexpected_character() {
        let error = tokenize("var x : Y\nx[0] = $\n").unwrap_err();
        assert_eq!((error.line, error.column), (2, 8));
    }
}
