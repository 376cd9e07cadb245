use log::{debug, info, trace, warn};

use super::evaluator::{check_rules, check_uniqueness};
use super::PuzzleModel;
use crate::error::ModelError;
use crate::model::{Outcome, Program, RecordAssignment, Rule, ScalarAssignment, Solution};

/// Exhaustive odometer search over every runtime variable of a model.
///
/// The first variable in enumeration order is the fastest-moving digit.
#[derive(Debug)]
pub struct Solver {
    model: PuzzleModel,
    rules: Vec<Rule>,
    iterations: u64,
}

impl Solver {
    pub fn new(model: PuzzleModel, rules: Vec<Rule>) -> Self {
        Self {
            model,
            rules,
            iterations: 0,
        }
    }

    pub fn from_program(program: &Program) -> Result<Self, ModelError> {
        let model = PuzzleModel::build(program)?;
        Ok(Self::new(model, program.rules.clone()))
    }

    pub fn model(&self) -> &PuzzleModel {
        &self.model
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Assignments tested since the last reset.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn reset(&mut self) {
        for variable in self.model.variables_mut() {
            variable.reset();
        }
        self.iterations = 0;
    }

    /// Uniqueness first, then every rule, stopping at the first failure.
    pub fn check_current(&self) -> Result<bool, ModelError> {
        if !check_uniqueness(&self.model) {
            return Ok(false);
        }
        check_rules(&self.model, &self.rules)
    }

    /// Ripple-carry step to the next assignment. Returns `false` once every
    /// combination has been visited, leaving all variables back at 0.
    pub fn advance(&mut self) -> bool {
        for variable in self.model.variables_mut() {
            if variable.increment() {
                return true;
            }
        }
        false
    }

    pub fn solve(&mut self) -> Result<Outcome, ModelError> {
        self.search(None)
    }

    /// Like [`Solver::solve`], but gives up after `max_iterations` assignments.
    pub fn solve_with_limit(&mut self, max_iterations: u64) -> Result<Outcome, ModelError> {
        self.search(Some(max_iterations))
    }

    fn search(&mut self, limit: Option<u64>) -> Result<Outcome, ModelError> {
        self.reset();
        info!(
            target: "solver",
            "Searching {} variables, {} rules, space of {} assignments",
            self.model.variables().len(),
            self.rules.len(),
            self.model.search_space()
        );

        loop {
            if limit.is_some_and(|max| self.iterations >= max) {
                warn!(
                    target: "solver",
                    "Gave up after {} iterations without a verdict",
                    self.iterations
                );
                return Ok(Outcome::IterationLimit {
                    iterations: self.iterations,
                });
            }

            self.iterations += 1;
            trace!(target: "solver", "Iteration {}: {:?}", self.iterations, self.model.variables());

            if self.check_current()? {
                info!(target: "solver", "Solved after {} iterations", self.iterations);
                return Ok(Outcome::Solved(self.capture()));
            }
            if !self.advance() {
                info!(
                    target: "solver",
                    "Search space exhausted after {} iterations",
                    self.iterations
                );
                return Ok(Outcome::NoSolution {
                    iterations: self.iterations,
                });
            }
        }
    }

    /// Current assignment as labels.
    pub fn capture(&self) -> Solution {
        let scalars = self
            .model
            .scalar_arrays()
            .iter()
            .flat_map(|array| {
                array
                    .variables
                    .iter()
                    .enumerate()
                    .map(move |(index, &id)| ScalarAssignment {
                        array: array.name.clone(),
                        index,
                        label: self.model.variable(id).label().to_string(),
                    })
            })
            .collect();

        let records = self
            .model
            .record_arrays()
            .iter()
            .flat_map(|array| {
                array
                    .instances
                    .iter()
                    .enumerate()
                    .map(move |(index, instance)| RecordAssignment {
                        array: array.name.clone(),
                        index,
                        fields: instance
                            .iter()
                            .map(|(field, id)| {
                                (field.to_string(), self.model.variable(id).label().to_string())
                            })
                            .collect(),
                    })
            })
            .collect();

        let solution = Solution {
            iterations: self.iterations,
            records,
            scalars,
        };
        debug!(target: "solver", "Captured {:?}", solution);
        solution
    }
}
