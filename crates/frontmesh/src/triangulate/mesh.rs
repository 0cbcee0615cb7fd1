//! Append-only triangle sink.

use std::collections::HashMap;

use crate::geom::{Edge, Triangle};

/// Ordered triangles emitted by one run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }
    #[inline]
    pub fn push(&mut self, t: Triangle) {
        self.triangles.push(t);
    }
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }
    /// Clear to empty. Only meaningful between runs.
    pub fn reset(&mut self) {
        self.triangles.clear();
    }
    /// Number of triangles bounding each undirected edge.
    pub fn edge_multiplicity(&self) -> HashMap<Edge, usize> {
        let mut counts = HashMap::new();
        for t in &self.triangles {
            for e in t.edges() {
                *counts.entry(e).or_insert(0) += 1;
            }
        }
        counts
    }
}

impl<'a> IntoIterator for &'a Mesh {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;
    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}
