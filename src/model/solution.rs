use itertools::Itertools;
use serde::Serialize;

use super::FieldOrder;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordAssignment {
    pub array: String,
    pub index: usize,
    /// `(field, label)` in schema order.
    pub fields: Vec<(String, String)>,
}

impl RecordAssignment {
    pub fn label(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, label)| label.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScalarAssignment {
    pub array: String,
    pub index: usize,
    pub label: String,
}

/// A satisfying assignment, captured as labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub iterations: u64,
    pub records: Vec<RecordAssignment>,
    pub scalars: Vec<ScalarAssignment>,
}

impl Solution {
    pub fn record(&self, array: &str, index: usize) -> Option<&RecordAssignment> {
        self.records
            .iter()
            .find(|r| r.array == array && r.index == index)
    }

    pub fn scalar(&self, array: &str, index: usize) -> Option<&str> {
        self.scalars
            .iter()
            .find(|s| s.array == array && s.index == index)
            .map(|s| s.label.as_str())
    }

    /// Text report: record arrays sorted by name, then scalars.
    pub fn render(&self, field_order: &FieldOrder) -> String {
        let mut output = String::from("SUCCESS:\n");

        let records = self
            .records
            .iter()
            .sorted_by(|a, b| a.array.cmp(&b.array).then(a.index.cmp(&b.index)));
        for record in records {
            let names: Vec<&str> = record.fields.iter().map(|(name, _)| name.as_str()).collect();
            for field in field_order.arrange(&record.array, &names) {
                if let Some(label) = record.label(field) {
                    output.push_str(&format!(
                        "{}[{}].{} = {}\n",
                        record.array, record.index, field, label
                    ));
                }
            }
            output.push('\n');
        }

        for scalar in &self.scalars {
            output.push_str(&format!(
                "{}[{}] = {}\n",
                scalar.array, scalar.index, scalar.label
            ));
        }

        output
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Solved(Solution),
    NoSolution { iterations: u64 },
    IterationLimit { iterations: u64 },
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn iterations(&self) -> u64 {
        match self {
            Outcome::Solved(solution) => solution.iterations,
            Outcome::NoSolution { iterations } | Outcome::IterationLimit { iterations } => {
                *iterations
            }
        }
    }

    pub fn render(&self, field_order: &FieldOrder) -> String {
        match self {
            Outcome::Solved(solution) => solution.render(field_order),
            Outcome::NoSolution { .. } => "NO SOLUTION FOUND.\n".to_string(),
            Outcome::IterationLimit { iterations } => {
                format!("SEARCH STOPPED after {} iterations.\n", iterations)
            }
        }
    }
}
