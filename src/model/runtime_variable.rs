use std::rc::Rc;

use super::Domain;

/// Position of a runtime variable in the model's arena, which is also its
/// position in the enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId(pub usize);

impl std::fmt::Display for VariableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone)]
pub struct RuntimeVariable {
    pub domain: Rc<Domain>,
    value: usize,
    peers: Vec<VariableId>,
}

impl RuntimeVariable {
    pub fn new(domain: Rc<Domain>) -> Self {
        Self {
            domain,
            value: 0,
            peers: Vec::new(),
        }
    }

    pub fn value(&self) -> usize {
        self.value
    }

    pub fn label(&self) -> &str {
        self.domain.label(self.value)
    }

    pub fn peers(&self) -> &[VariableId] {
        &self.peers
    }

    pub(crate) fn add_peer(&mut self, peer: VariableId) {
        if !self.peers.contains(&peer) {
            self.peers.push(peer);
        }
    }

    pub(crate) fn reset(&mut self) {
        self.value = 0;
    }

    /// Moves to the next label. Returns `false` and wraps to 0 on overflow.
    pub(crate) fn increment(&mut self) -> bool {
        self.value += 1;
        if self.value < self.domain.len() {
            true
        } else {
            self.value = 0;
            false
        }
    }
}

impl std::fmt::Debug for RuntimeVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.domain.name, self.label())
    }
}
