pub mod error;
pub mod model;
pub mod parser;
pub mod settings;
pub mod solver;

pub use error::{Error, ModelError, SyntaxError};
pub use model::{Outcome, Program, Solution};
pub use settings::Settings;
pub use solver::Solver;

use log::info;

/// Parses `source` and builds a solver ready to search it.
pub fn compile(source: &str) -> Result<Solver, Error> {
    let program = parser::parse(source)?;
    let solver = Solver::from_program(&program)?;
    info!(
        target: "model",
        "Compiled {} definitions, {} variables, {} rules",
        program.definitions.len(),
        program.variables.len(),
        program.rules.len()
    );
    Ok(solver)
}

/// Compiles and solves `source`, bounded by the configured iteration limit.
pub fn solve_source(source: &str, settings: &Settings) -> Result<Outcome, Error> {
    let mut solver = compile(source)?;
    let outcome = match settings.iteration_limit() {
        Some(limit) => solver.solve_with_limit(limit)?,
        None => solver.solve()?,
    };
    Ok(outcome)
}

/// Parses `source` and renders the program as pretty JSON.
pub fn ast_json(source: &str) -> Result<String, Error> {
    let program = parser::parse(source)?;
    Ok(serde_json::to_string_pretty(&program)?)
}
