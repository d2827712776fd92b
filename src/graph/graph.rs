use std::fmt;

use log::{trace, warn};

use crate::error::GraphError;
use crate::graph::vertex_index::VertexIndex;

pub type Weight = i64;

/// Directed weighted graph stored as a dense adjacency matrix over labelled
/// vertices. Self-loops are allowed.
#[derive(Clone, Debug)]
pub struct RouteGraph {
    index: VertexIndex,
    /// weights[from][to], `None` when there is no edge
    weights: Vec<Vec<Option<Weight>>>,
    edge_count: usize,
}

impl RouteGraph {
    /// Allocates an empty `vertex_count x vertex_count` matrix.
    pub fn new(vertex_count: usize) -> Self {
        RouteGraph {
            index: VertexIndex::new(),
            weights: vec![vec![None; vertex_count]; vertex_count],
            edge_count: 0,
        }
    }

    /// Like [`RouteGraph::new`], for capacities declared by an external
    /// caller as a signed count.
    pub fn with_declared_capacity(declared: i64) -> Result<Self, GraphError> {
        let vertex_count = usize::try_from(declared).map_err(|_| {
            GraphError::InvalidArgument(format!(
                "number of vertices must be nonnegative, got {declared}"
            ))
        })?;
        Ok(Self::new(vertex_count))
    }

    /// Sizes the matrix to an already populated index.
    pub(crate) fn with_index(index: VertexIndex) -> Self {
        let mut graph = Self::new(index.len());
        graph.index = index;
        graph
    }

    /// Side length of the matrix. Fixed at construction.
    pub fn capacity(&self) -> usize {
        self.weights.len()
    }

    /// Number of labelled vertices registered so far.
    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn index_of(&self, label: &str) -> Result<usize, GraphError> {
        self.index.resolve_existing(label)
    }

    pub fn label_of(&self, index: usize) -> Result<&str, GraphError> {
        self.index.label_of(index)
    }

    pub fn labels(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.index.labels()
    }

    /// Adds (or overwrites) the edge `from -> to`, registering either label
    /// that has not been seen yet.
    ///
    /// Fails without touching the graph if the new labels would not fit in
    /// the matrix.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<(), GraphError> {
        let mut required = self.index.len();
        for (i, label) in [from, to].into_iter().enumerate() {
            if self.index.contains(label) || (i == 1 && from == to) {
                continue;
            }
            required += 1;
            if required > self.capacity() {
                return Err(GraphError::CapacityExceeded {
                    label: label.to_owned(),
                    capacity: self.capacity(),
                });
            }
        }

        let v = self.index.resolve_or_create(from);
        let w = self.index.resolve_or_create(to);
        self.set_edge(v, w, weight);
        Ok(())
    }

    /// Writes `weight` into cell `(from, to)` and returns the weight it
    /// replaced, if any.
    ///
    /// # Panics
    ///
    /// Panics if either index is not below [`RouteGraph::capacity`].
    pub fn set_edge(&mut self, from: usize, to: usize, weight: Weight) -> Option<Weight> {
        let previous = self.weights[from][to].replace(weight);
        match previous {
            None => {
                self.edge_count += 1;
                trace!("edge {from} -> {to} set to {weight}");
            }
            Some(old) if old != weight => {
                warn!("edge {from} -> {to} overwritten: {old} -> {weight}");
            }
            Some(_) => {}
        }
        previous
    }

    /// Weight of the edge `from -> to`; `None` when absent or out of range.
    pub fn weight(&self, from: usize, to: usize) -> Option<Weight> {
        self.weights.get(from)?.get(to).copied().flatten()
    }

    /// Indices reachable from `from` over a single edge, ascending.
    ///
    /// # Panics
    ///
    /// Panics if `from` is not below [`RouteGraph::capacity`].
    pub fn neighbors_of(&self, from: usize) -> Neighbors<'_> {
        Neighbors {
            row: &self.weights[from],
            next: 0,
        }
    }

    /// Same order as [`RouteGraph::neighbors_of`], paired with edge weights.
    pub fn neighbors_with_weights(
        &self,
        from: usize,
    ) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.weights[from]
            .iter()
            .enumerate()
            .filter_map(|(to, cell)| cell.map(|weight| (to, weight)))
    }

    /// Adjacency listing: a `"<vertices> X <edges>"` header, then one line
    /// per vertex with each neighbour and its weight in parentheses.
    pub fn render(&self) -> Result<String, GraphError> {
        let mut out = format!("{} X {}\n", self.vertex_count(), self.edge_count);
        for v in 0..self.vertex_count() {
            out.push_str(self.label_of(v)?);
            out.push(':');
            for (w, weight) in self.neighbors_with_weights(v) {
                out.push(' ');
                out.push_str(self.label_of(w)?);
                out.push_str(&format!("({weight})"));
            }
            out.push('\n');
        }
        Ok(out)
    }
}

impl RouteGraph {
    fn fmt_label(&self, f: &mut fmt::Formatter<'_>, v: usize) -> fmt::Result {
        match self.label_of(v) {
            Ok(label) => f.write_str(label),
            Err(_) => write!(f, "#{v}"),
        }
    }
}

/// Same layout as [`RouteGraph::render`], but a vertex without a label is
/// written as `#<index>` instead of failing.
impl fmt::Display for RouteGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} X {}", self.vertex_count(), self.edge_count)?;
        for v in 0..self.vertex_count() {
            self.fmt_label(f, v)?;
            f.write_str(":")?;
            for (w, weight) in self.neighbors_with_weights(v) {
                f.write_str(" ")?;
                self.fmt_label(f, w)?;
                write!(f, "({weight})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Lazy walk over one matrix row yielding the columns that hold an edge.
#[derive(Clone, Debug)]
pub struct Neighbors<'a> {
    row: &'a [Option<Weight>],
    next: usize,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.row.len() {
            let current = self.next;
            self.next += 1;
            if self.row[current].is_some() {
                return Some(current);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.row.len() - self.next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_graph_has_no_edges() {
        for n in [0, 1, 4] {
            let graph = RouteGraph::new(n);
            assert_eq!(graph.capacity(), n);
            assert_eq!(graph.edge_count(), 0);
            for v in 0..n {
                for w in 0..n {
                    assert_eq!(graph.weight(v, w), None);
                }
                assert_eq!(graph.neighbors_of(v).count(), 0);
            }
        }
    }

    #[test]
    fn negative_declared_capacity_is_rejected() {
        assert!(matches!(
            RouteGraph::with_declared_capacity(-1),
            Err(GraphError::InvalidArgument(_))
        ));
        let graph = RouteGraph::with_declared_capacity(0).expect("empty graph");
        assert!(graph.is_empty());
        assert_eq!(graph.capacity(), 0);
    }

    #[test]
    fn set_edge_reads_back_and_counts_once() {
        let mut graph = RouteGraph::new(3);
        assert_eq!(graph.set_edge(0, 2, 7), None);
        assert_eq!(graph.weight(0, 2), Some(7));
        assert_eq!(graph.edge_count(), 1);

        assert_eq!(graph.set_edge(0, 2, -4), Some(7));
        assert_eq!(graph.weight(0, 2), Some(-4));
        assert_eq!(graph.edge_count(), 1);

        graph.set_edge(1, 1, 0);
        assert_eq!(graph.weight(1, 1), Some(0));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    #[should_panic]
    fn set_edge_out_of_range_panics() {
        let mut graph = RouteGraph::new(2);
        graph.set_edge(0, 2, 1);
    }

    #[test]
    fn neighbors_are_ascending_and_restartable() {
        let mut graph = RouteGraph::new(5);
        graph.set_edge(1, 4, 1);
        graph.set_edge(1, 0, 2);
        graph.set_edge(1, 2, 3);

        let neighbors = graph.neighbors_of(1);
        assert_eq!(neighbors.clone().collect::<Vec<_>>(), vec![0, 2, 4]);
        assert_eq!(neighbors.collect::<Vec<_>>(), vec![0, 2, 4]);
        assert_eq!(graph.neighbors_of(1).collect::<Vec<_>>(), vec![0, 2, 4]);
        assert_eq!(
            graph.neighbors_with_weights(1).collect::<Vec<_>>(),
            vec![(0, 2), (2, 3), (4, 1)]
        );
    }

    #[test]
    fn add_edge_registers_labels() {
        let mut graph = RouteGraph::new(2);
        graph.add_edge("A", "B", 5).expect("edge");
        graph.add_edge("B", "B", 1).expect("self loop");
        assert_eq!(graph.index_of("A"), Ok(0));
        assert_eq!(graph.index_of("B"), Ok(1));
        assert_eq!(graph.weight(0, 1), Some(5));
        assert_eq!(graph.weight(1, 1), Some(1));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn add_edge_beyond_capacity_leaves_graph_untouched() {
        let mut graph = RouteGraph::new(2);
        graph.add_edge("A", "A", 1).expect("self loop");
        let err = graph.add_edge("B", "C", 2).unwrap_err();
        assert_eq!(
            err,
            GraphError::CapacityExceeded {
                label: "C".into(),
                capacity: 2
            }
        );
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.index_of("B").is_err());
    }

    #[test]
    fn render_lists_neighbours_with_weights() {
        let mut graph = RouteGraph::new(3);
        graph.add_edge("A", "B", 5).unwrap();
        graph.add_edge("A", "C", 2).unwrap();
        graph.add_edge("C", "A", 1).unwrap();
        assert_eq!(graph.render().unwrap(), "3 X 3\nA: B(5) C(2)\nB:\nC: A(1)\n");
        assert_eq!(graph.to_string(), graph.render().unwrap());
    }

    #[test]
    fn render_fails_on_unlabelled_neighbour() {
        let mut graph = RouteGraph::new(2);
        graph.add_edge("A", "A", 1).unwrap();
        graph.set_edge(0, 1, 3);
        assert_eq!(graph.render(), Err(GraphError::IndexNotFound(1)));
    }

    #[test]
    fn display_marks_unlabelled_neighbour_by_index() {
        let mut graph = RouteGraph::new(2);
        graph.add_edge("A", "A", 1).unwrap();
        graph.set_edge(0, 1, 3);
        assert_eq!(graph.to_string(), "1 X 2\nA: A(1) #1(3)\n");
    }
}
