use serde::{Deserialize, Serialize};

use super::Rule;
use crate::error::SyntaxError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub unique: bool,
    pub type_name: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefinitionBody {
    /// `Color = {red, blue}`
    Choices(Vec<String>),
    /// `Pair = [unique Color a, Color b]`
    Record(Vec<Entry>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub name: String,
    pub body: DefinitionBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub name: String,
    pub type_name: String,
    pub size: Option<usize>,
}

impl VariableDeclaration {
    pub fn len(&self) -> usize {
        self.size.unwrap_or(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub definitions: Vec<Definition>,
    pub variables: Vec<VariableDeclaration>,
    pub rules: Vec<Rule>,
    /// Set when parsing stopped early at a line that was not a valid rule.
    #[serde(skip)]
    pub truncated_at: Option<SyntaxError>,
}

impl Program {
    pub fn is_truncated(&self) -> bool {
        self.truncated_at.is_some()
    }
}
