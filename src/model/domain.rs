/// Named, ordered list of the labels a variable may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    pub name: String,
    labels: Vec<String>,
}

impl Domain {
    pub fn new(name: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            name: name.into(),
            labels,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label at `index`, clamped into the domain. Empty string for an empty domain.
    pub fn label(&self, index: usize) -> &str {
        match self.labels.len() {
            0 => "",
            n => &self.labels[index.min(n - 1)],
        }
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().rposition(|l| l == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> Domain {
        Domain::new(
            "Color",
            vec!["red".to_string(), "green".to_string(), "blue".to_string()],
        )
    }

    #[test]
    fn test_label_is_clamped() {
        let domain = colors();
        assert_eq!(domain.label(0), "red");
        assert_eq!(domain.label(2), "blue");
        assert_eq!(domain.label(17), "blue");
        assert_eq!(Domain::new("Empty", vec![]).label(0), "");
    }

    #[test]
    fn test_position() {
        let domain = colors();
        assert_eq!(domain.position("green"), Some(1));
        assert_eq!(domain.position("purple"), None);
    }
}
