use super::edge::Edge;

/// An ordered chain of edges.
///
/// A loop is not required to be closed: consecutive edges need not share
/// end points and the last edge need not return to the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Loop {
    edges: Vec<Edge>,
}

impl Loop {
    /// Creates an empty loop.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty loop with room for `capacity` edges.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
        }
    }

    /// Appends an edge at the end of the chain.
    pub fn push(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Returns the edges in chain order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether the loop has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over the edges in chain order.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// Consumes the loop, returning its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    /// Returns the summed length of all edges.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.edges.iter().map(Edge::length).sum()
    }
}

impl IntoIterator for Loop {
    type Item = Edge;
    type IntoIter = std::vec::IntoIter<Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

impl<'a> IntoIterator for &'a Loop {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl FromIterator<Edge> for Loop {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point3;

    #[test]
    fn length_sums_edges() {
        let l: Loop = [
            Edge::line(Point3::origin(), Point3::new(3.0, 4.0, 0.0)),
            Edge::line(Point3::new(3.0, 4.0, 0.0), Point3::new(3.0, 4.0, 1.0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(l.len(), 2);
        assert!((l.length() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn empty_loop() {
        let l = Loop::new();
        assert!(l.is_empty());
        assert!(l.length().abs() < f64::EPSILON);
    }
}
