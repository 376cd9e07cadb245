mod domain;
mod field_order;
mod program;
mod record_instance;
mod record_schema;
mod rule;
mod runtime_variable;
mod solution;
mod token;
mod variable_reference;

pub use domain::Domain;
pub use field_order::FieldOrder;
pub use program::{Definition, DefinitionBody, Entry, Program, VariableDeclaration};
pub use record_instance::RecordInstance;
pub use record_schema::RecordSchema;
pub use rule::{Expression, Operator, Rule};
pub use runtime_variable::{RuntimeVariable, VariableId};
pub use solution::{Outcome, RecordAssignment, ScalarAssignment, Solution};
pub use token::{Token, TokenKind};
pub use variable_reference::{Modifier, VariableReference};
