use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    Index(usize),
    Field(String),
}

/// A name plus its modifier chain, e.g. `Birds[2].color`.
///
/// The chain is resolved once when the reference is built: the last index
/// modifier and the last field modifier are the ones evaluation uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableReference {
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub index: Option<usize>,
    pub field: Option<String>,
}

impl VariableReference {
    pub fn new(name: impl Into<String>, modifiers: Vec<Modifier>) -> Self {
        let mut index = None;
        let mut field = None;
        for modifier in &modifiers {
            match modifier {
                Modifier::Index(i) => index = Some(*i),
                Modifier::Field(f) => field = Some(f.clone()),
            }
        }
        Self {
            name: name.into(),
            modifiers,
            index,
            field,
        }
    }

    pub fn bare(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }
}

impl std::fmt::Display for VariableReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        for modifier in &self.modifiers {
            match modifier {
                Modifier::Index(i) => write!(f, "[{}]", i)?,
                Modifier::Field(field) => write!(f, ".{}", field)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_last_index_and_field() {
        let reference = VariableReference::new(
            "Days",
            vec![
                Modifier::Index(1),
                Modifier::Field("guest".to_string()),
                Modifier::Index(3),
                Modifier::Field("meal".to_string()),
            ],
        );
        assert_eq!(reference.index, Some(3));
        assert_eq!(reference.field.as_deref(), Some("meal"));
        assert_eq!(reference.to_string(), "Days[1].guest[3].meal");
    }

    #[test]
    fn test_bare_reference() {
        let reference = VariableReference::bare("red");
        assert_eq!(reference.index, None);
        assert_eq!(reference.field, None);
        assert_eq!(reference.to_string(), "red");
    }
}
