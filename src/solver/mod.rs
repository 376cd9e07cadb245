mod evaluator;
mod puzzle_model;
mod search;

pub use evaluator::{
    check_rule, check_rules, check_uniqueness, evaluate_expression, resolve_reference, Binding,
};
pub use puzzle_model::{PuzzleModel, RecordArray, ScalarArray};
pub use search::Solver;
