use super::VariableId;

/// One element of a record array: field name to runtime variable, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordInstance {
    fields: Vec<(String, VariableId)>,
}

impl RecordInstance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, id: VariableId) {
        let field = field.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some(slot) => slot.1 = id,
            None => self.fields.push((field, id)),
        }
    }

    pub fn get(&self, field: &str) -> Option<VariableId> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, id)| *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, VariableId)> {
        self.fields.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
