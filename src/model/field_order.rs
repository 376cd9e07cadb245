use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Preferred field order per record array, used only when printing.
///
/// Listed fields that a record actually has come first, in the listed order;
/// the record's other fields follow in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldOrder(BTreeMap<String, Vec<String>>);

impl FieldOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, array: impl Into<String>, fields: Vec<String>) {
        self.0.insert(array.into(), fields);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn arrange<'a>(&self, array: &str, fields: &[&'a str]) -> Vec<&'a str> {
        let Some(preferred) = self.0.get(array) else {
            return fields.to_vec();
        };
        let mut ordered: Vec<&'a str> = preferred
            .iter()
            .filter_map(|p| fields.iter().copied().find(|f| *f == p.as_str()))
            .collect();
        for &field in fields {
            if !ordered.contains(&field) {
                ordered.push(field);
            }
        }
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrange_without_entry_keeps_schema_order() {
        let order = FieldOrder::new();
        assert_eq!(order.arrange("Stories", &["a", "p", "h"]), vec!["a", "p", "h"]);
    }

    #[test]
    fn test_arrange_skips_missing_and_appends_unlisted() {
        let mut order = FieldOrder::new();
        order.insert(
            "Stories",
            vec!["p", "c", "d", "a", "f", "h"]
                .into_iter()
                .map(String::from)
                .collect(),
        );
        assert_eq!(order.arrange("Stories", &["a", "h", "p"]), vec!["p", "a", "h"]);
        assert_eq!(
            order.arrange("Stories", &["z", "d", "p", "c"]),
            vec!["p", "c", "d", "z"]
        );
    }
}
