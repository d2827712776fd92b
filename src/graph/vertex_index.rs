use std::collections::HashMap;

use crate::error::GraphError;

/// Label <-> dense index mapping. Indices are handed out in first-seen order
/// starting at 0 and are never reused.
#[derive(Clone, Debug, Default)]
pub struct VertexIndex {
    by_label: HashMap<String, usize>,
    /// labels[i] is the label assigned index i
    labels: Vec<String>,
}

impl VertexIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.by_label.contains_key(label)
    }

    /// Returns the index of `label`, registering it under the next free index
    /// if it has not been seen before.
    pub fn resolve_or_create(&mut self, label: &str) -> usize {
        if let Some(&idx) = self.by_label.get(label) {
            return idx;
        }
        let idx = self.labels.len();
        self.by_label.insert(label.to_owned(), idx);
        self.labels.push(label.to_owned());
        idx
    }

    pub fn resolve_existing(&self, label: &str) -> Result<usize, GraphError> {
        self.by_label
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::VertexNotFound(label.to_owned()))
    }

    pub fn label_of(&self, index: usize) -> Result<&str, GraphError> {
        self.labels
            .get(index)
            .map(String::as_str)
            .ok_or(GraphError::IndexNotFound(index))
    }

    /// Labels in index order.
    pub fn labels(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }
}
