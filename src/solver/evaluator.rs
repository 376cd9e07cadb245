use log::trace;

use super::PuzzleModel;
use crate::error::ModelError;
use crate::model::{Expression, Rule, VariableId, VariableReference};

/// The record element a quantified rule is currently looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding<'a> {
    pub array: &'a str,
    pub index: usize,
}

pub fn resolve_reference(
    model: &PuzzleModel,
    reference: &VariableReference,
    binding: Option<Binding>,
) -> Result<VariableId, ModelError> {
    if let Some(array) = model.record_array(&reference.name) {
        let index = match (reference.index, binding) {
            (Some(index), _) => index,
            (None, Some(binding)) if binding.array == reference.name => binding.index,
            _ => return Err(ModelError::MissingIndex(reference.to_string())),
        };
        let instance = array
            .instances
            .get(index)
            .ok_or_else(|| ModelError::IndexOutOfBounds {
                array: array.name.clone(),
                index,
                size: array.instances.len(),
            })?;
        let field = reference
            .field
            .as_deref()
            .ok_or_else(|| ModelError::MissingField(reference.to_string()))?;
        return instance.get(field).ok_or_else(|| ModelError::UnknownField {
            array: array.name.clone(),
            field: field.to_string(),
        });
    }

    if let Some(array) = model.scalar_array(&reference.name) {
        let index = reference
            .index
            .ok_or_else(|| ModelError::MissingIndex(reference.to_string()))?;
        return array
            .variables
            .get(index)
            .copied()
            .ok_or_else(|| ModelError::IndexOutOfBounds {
                array: array.name.clone(),
                index,
                size: array.variables.len(),
            });
    }

    Err(ModelError::UnknownVariable(reference.name.clone()))
}

/// Compares the two sides of `expression` under the current assignment.
///
/// A right side that does not resolve to a variable is read as a label of the
/// left variable's domain; a label the domain lacks never compares equal.
pub fn evaluate_expression(
    model: &PuzzleModel,
    expression: &Expression,
    binding: Option<Binding>,
) -> Result<bool, ModelError> {
    let left = model.variable(resolve_reference(model, &expression.left, binding)?);

    let equal = match resolve_reference(model, &expression.right, binding) {
        Ok(right) => left.value() == model.variable(right).value(),
        Err(reason) => {
            trace!(
                target: "solver",
                "{} is not a variable ({}), comparing as a label",
                expression.right,
                reason
            );
            left.domain.position(&expression.right.name) == Some(left.value())
        }
    };

    Ok(expression.operator.apply(equal))
}

pub fn check_rule(model: &PuzzleModel, rule: &Rule) -> Result<bool, ModelError> {
    if rule.is_global() {
        return evaluate_expression(model, &rule.guard, None);
    }

    let Some(array) = model.record_array(&rule.guard.left.name) else {
        return evaluate_expression(model, &rule.guard, None);
    };

    for index in 0..array.instances.len() {
        let binding = Some(Binding {
            array: &array.name,
            index,
        });
        if !evaluate_expression(model, &rule.guard, binding)? {
            continue;
        }
        for consequent in &rule.consequents {
            if !evaluate_expression(model, consequent, binding)? {
                trace!(
                    target: "solver",
                    "{}[{}] fails consequent {}",
                    array.name,
                    index,
                    consequent
                );
                return Ok(false);
            }
        }
    }
    Ok(true)
}

pub fn check_rules(model: &PuzzleModel, rules: &[Rule]) -> Result<bool, ModelError> {
    for rule in rules {
        if !check_rule(model, rule)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// No variable shares its current index with one of its peers.
pub fn check_uniqueness(model: &PuzzleModel) -> bool {
    model.variables().iter().all(|variable| {
        variable
            .peers()
            .iter()
            .all(|&peer| model.variable(peer).value() != variable.value())
    })
}
