#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    Var,
    Unique,
    Equal,
    NotEqual,
    Yields,
    Dot,
    Comma,
    Colon,
    LeftCurly,
    RightCurly,
    LeftBracket,
    RightBracket,
    Newline,
    Indent,
    Dedent,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Var => "'var'",
            TokenKind::Unique => "'unique'",
            TokenKind::Equal => "'='",
            TokenKind::NotEqual => "'!='",
            TokenKind::Yields => "'=>'",
            TokenKind::Dot => "'.'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::LeftCurly => "'{'",
            TokenKind::RightCurly => "'}'",
            TokenKind::LeftBracket => "'['",
            TokenKind::RightBracket => "']'",
            TokenKind::Newline => "newline",
            TokenKind::Indent => "indent",
            TokenKind::Dedent => "dedent",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<String>,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            value: None,
            line,
            column,
        }
    }

    pub fn with_value(kind: TokenKind, value: String, line: usize, column: usize) -> Self {
        Self {
            kind,
            value: Some(value),
            line,
            column,
        }
    }

    /// Lexeme of identifiers, keywords and numbers; empty for punctuation.
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}({})@{}:{}", self.kind, value, self.line, self.column),
            None => write!(f, "{}@{}:{}", self.kind, self.line, self.column),
        }
    }
}
