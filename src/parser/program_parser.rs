use log::{debug, trace, warn};

use super::token_stream::TokenStream;
use crate::error::SyntaxError;
use crate::model::{
    Definition, DefinitionBody, Entry, Expression, Modifier, Operator, Program, Rule, Token,
    TokenKind, VariableDeclaration, VariableReference,
};

/// Outcome of trying to read a rule at the top level.
enum RuleParse {
    Parsed(Rule),
    /// The line is not a rule; parsing of the program stops here.
    Stop(SyntaxError),
}

pub struct ProgramParser {
    tokens: TokenStream,
}

impl ProgramParser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: TokenStream::new(tokens),
        }
    }

    pub fn parse(mut self) -> Result<Program, SyntaxError> {
        let mut program = Program::default();

        loop {
            self.skip_blank_lines();
            if self.tokens.done() {
                break;
            }

            if self.is_definition_start() {
                let definition = self.definition()?;
                debug!(target: "parser", "Parsed definition {}", definition.name);
                program.definitions.push(definition);
                continue;
            }

            if self.tokens.check(TokenKind::Var) {
                let variable = self.variable_declaration()?;
                debug!(target: "parser", "Parsed variable {}", variable.name);
                program.variables.push(variable);
                continue;
            }

            match self.rule()? {
                RuleParse::Parsed(rule) => {
                    debug!(target: "parser", "Parsed rule {}", rule.guard);
                    program.rules.push(rule);
                }
                RuleParse::Stop(error) => {
                    warn!(target: "parser", "Stopped parsing at {}", error);
                    program.truncated_at = Some(error);
                    break;
                }
            }
        }

        trace!(target: "parser", "Program: {:?}", program);
        Ok(program)
    }

    fn skip_blank_lines(&mut self) {
        while self.tokens.match_and_remove(TokenKind::Newline).is_some() {}
    }

    fn is_definition_start(&self) -> bool {
        self.tokens.peek_kind(0) == Some(TokenKind::Identifier)
            && self.tokens.peek_kind(1) == Some(TokenKind::Equal)
    }

    fn definition(&mut self) -> Result<Definition, SyntaxError> {
        let name = self.identifier()?;
        self.require(TokenKind::Equal)?;

        if self.tokens.match_and_remove(TokenKind::LeftCurly).is_some() {
            let mut choices = vec![self.identifier()?];
            while self.tokens.match_and_remove(TokenKind::Comma).is_some() {
                choices.push(self.identifier()?);
            }
            self.require(TokenKind::RightCurly)?;
            self.end_of_line()?;
            return Ok(Definition {
                name,
                body: DefinitionBody::Choices(choices),
            });
        }

        if self.tokens.match_and_remove(TokenKind::LeftBracket).is_some() {
            let mut entries = vec![self.entry()?];
            while self.tokens.match_and_remove(TokenKind::Comma).is_some() {
                entries.push(self.entry()?);
            }
            self.require(TokenKind::RightBracket)?;
            self.end_of_line()?;
            return Ok(Definition {
                name,
                body: DefinitionBody::Record(entries),
            });
        }

        Err(self.error("expected '{' or '[' in definition"))
    }

    fn entry(&mut self) -> Result<Entry, SyntaxError> {
        let unique = self.tokens.match_and_remove(TokenKind::Unique).is_some();
        let type_name = self.identifier()?;
        let name = self.identifier()?;
        Ok(Entry {
            unique,
            type_name,
            name,
        })
    }

    fn variable_declaration(&mut self) -> Result<VariableDeclaration, SyntaxError> {
        self.require(TokenKind::Var)?;
        let name = self.identifier()?;
        self.require(TokenKind::Colon)?;
        let type_name = self.identifier()?;

        let mut size = None;
        if self.tokens.match_and_remove(TokenKind::LeftBracket).is_some() {
            size = Some(self.number()?);
            self.require(TokenKind::RightBracket)?;
        }
        self.end_of_line()?;

        Ok(VariableDeclaration {
            name,
            type_name,
            size,
        })
    }

    fn rule(&mut self) -> Result<RuleParse, SyntaxError> {
        let guard = match self.expression() {
            Ok(guard) => guard,
            Err(error) => return Ok(RuleParse::Stop(error)),
        };

        if self.tokens.match_and_remove(TokenKind::Yields).is_none() {
            if let Err(error) = self.end_of_line() {
                return Ok(RuleParse::Stop(error));
            }
            return Ok(RuleParse::Parsed(Rule {
                guard,
                consequents: Vec::new(),
            }));
        }

        // past `=>` the block is mandatory
        self.end_of_line()?;
        self.require(TokenKind::Indent)?;

        let mut consequents = Vec::new();
        loop {
            self.skip_blank_lines();
            if self.tokens.check(TokenKind::Dedent) {
                break;
            }
            consequents.push(self.expression()?);
            self.end_of_line()?;
        }
        if consequents.is_empty() {
            return Err(self.error("expected at least one consequent after '=>'"));
        }
        self.require(TokenKind::Dedent)?;

        Ok(RuleParse::Parsed(Rule { guard, consequents }))
    }

    fn expression(&mut self) -> Result<Expression, SyntaxError> {
        let left = self.variable_reference()?;

        let operator = if self.tokens.match_and_remove(TokenKind::Equal).is_some() {
            Operator::Equal
        } else if self.tokens.match_and_remove(TokenKind::NotEqual).is_some() {
            Operator::NotEqual
        } else {
            return Err(self.error("expected '=' or '!='"));
        };

        let right = self.variable_reference()?;
        Ok(Expression {
            left,
            operator,
            right,
        })
    }

    fn variable_reference(&mut self) -> Result<VariableReference, SyntaxError> {
        let name = self.identifier()?;
        let mut modifiers = Vec::new();
        loop {
            if self.tokens.match_and_remove(TokenKind::LeftBracket).is_some() {
                modifiers.push(Modifier::Index(self.number()?));
                self.require(TokenKind::RightBracket)?;
            } else if self.tokens.match_and_remove(TokenKind::Dot).is_some() {
                modifiers.push(Modifier::Field(self.identifier()?));
            } else {
                break;
            }
        }
        Ok(VariableReference::new(name, modifiers))
    }

    fn identifier(&mut self) -> Result<String, SyntaxError> {
        let token = self.require(TokenKind::Identifier)?;
        Ok(token.value.unwrap_or_default())
    }

    fn number(&mut self) -> Result<usize, SyntaxError> {
        let token = self.require(TokenKind::Number)?;
        token.text().parse::<usize>().map_err(|_| {
            SyntaxError::new(
                format!("number {} is too large", token.text()),
                token.line,
                token.column,
            )
        })
    }

    fn require(&mut self, kind: TokenKind) -> Result<Token, SyntaxError> {
        match self.tokens.match_and_remove(kind) {
            Some(token) => Ok(token),
            None => {
                let found = self
                    .tokens
                    .peek_kind(0)
                    .map(|k| k.to_string())
                    .unwrap_or_else(|| "end of input".to_string());
                Err(self.error(&format!("expected {}, found {}", kind, found)))
            }
        }
    }

    /// One NEWLINE, plus any blank lines after it.
    fn end_of_line(&mut self) -> Result<(), SyntaxError> {
        self.require(TokenKind::Newline)?;
        self.skip_blank_lines();
        Ok(())
    }

    fn error(&self, message: &str) -> SyntaxError {
        let (line, column) = self.tokens.position();
        SyntaxError::new(message, line, column)
    }
}

pub fn parse_program(tokens: Vec<Token>) -> Result<Program, SyntaxError> {
    ProgramParser::new(tokens).parse()
}
