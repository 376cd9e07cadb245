use thiserror::Error;

/// Structural error raised by the lexer or the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}, column {column}: {message}")]
pub struct SyntaxError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }
}

/// Authoring error found while building the model or evaluating a rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown type: {0}")]
    UnknownType(String),

    #[error("unknown variable: {0}")]
    UnknownVariable(String),

    #[error("variable {0} is declared more than once")]
    DuplicateVariable(String),

    #[error("missing index for {0}")]
    MissingIndex(String),

    #[error("missing field for {0}")]
    MissingField(String),

    #[error("{array} has no field named {field}")]
    UnknownField { array: String, field: String },

    #[error("index {index} is out of bounds for {array} (size {size})")]
    IndexOutOfBounds {
        array: String,
        index: usize,
        size: usize,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("syntax error at {0}")]
    Syntax(#[from] SyntaxError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display_carries_position() {
        let error = SyntaxError::new("expected newline", 3, 7);
        assert_eq!(error.to_string(), "line 3, column 7: expected newline");
    }

    #[test]
    fn test_error_wraps_model_error() {
        let error: Error = ModelError::MissingIndex("Birds".to_string()).into();
        assert_eq!(error.to_string(), "model error: missing index for Birds");
    }

    #[test]
    fn test_error_wraps_json_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = source.into();
        assert!(matches!(error, Error::Json(_)));
        assert!(error.to_string().starts_with("JSON error: "));
    }
}
