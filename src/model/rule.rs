use serde::{Deserialize, Serialize};

use super::VariableReference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Equal,
    NotEqual,
}

impl Operator {
    pub fn apply(&self, equal: bool) -> bool {
        match self {
            Operator::Equal => equal,
            Operator::NotEqual => !equal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    pub left: VariableReference,
    pub operator: Operator,
    pub right: VariableReference,
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self.operator {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
        };
        write!(f, "{} {} {}", self.left, op, self.right)
    }
}

/// A guard and the consequents that must hold wherever the guard holds.
///
/// Without consequents the guard is a global constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub guard: Expression,
    pub consequents: Vec<Expression>,
}

impl Rule {
    pub fn is_global(&self) -> bool {
        self.consequents.is_empty()
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.guard)?;
        if !self.is_global() {
            write!(f, " =>")?;
            for consequent in &self.consequents {
                write!(f, "\n    {}", consequent)?;
            }
        }
        Ok(())
    }
}
