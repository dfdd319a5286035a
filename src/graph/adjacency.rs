//! 邻接映射表示
//!
//! 每个顶点记录持有自己的出边映射。出边按源顶点索引，
//! 因此 `sources` 和删除顶点时的入边清理都需要扫描所有顶点记录。

use super::edge::Edge;
use super::vertex::Vertex;
use super::{render_dump, validate_weight, WeightedGraph};
use crate::config::GraphOptions;
use crate::error::Result;
use crate::types::{Label, Weight};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// 基于邻接映射的有向带权图
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<L: Label> {
    /// 顶点记录，标签互不相同
    vertices: Vec<Vertex<L>>,
    /// 每次修改后检查表示不变式
    check_invariants: bool,
}

impl<L: Label> AdjacencyGraph<L> {
    /// 创建空图（默认选项）
    pub fn new() -> Self {
        Self::with_options(&GraphOptions::default())
    }

    /// 按选项创建空图，只使用 `check_invariants`
    pub fn with_options(options: &GraphOptions) -> Self {
        let graph = Self {
            vertices: Vec::new(),
            check_invariants: options.check_invariants,
        };
        graph.checked();
        graph
    }

    fn position(&self, label: &L) -> Option<usize> {
        self.vertices.iter().position(|v| v.label() == label)
    }

    fn vertex(&self, label: &L) -> Option<&Vertex<L>> {
        self.vertices.iter().find(|v| v.label() == label)
    }

    /// 找到或创建顶点记录，返回其位置
    fn ensure_vertex(&mut self, label: L) -> usize {
        match self.position(&label) {
            Some(pos) => pos,
            None => {
                self.vertices.push(Vertex::new(label));
                self.vertices.len() - 1
            }
        }
    }

    fn checked(&self) {
        if self.check_invariants {
            self.check_rep();
        }
    }

    /// 检查表示不变式，违反时 panic
    pub fn check_rep(&self) {
        tracing::debug!(
            vertices = self.vertices.len(),
            "checking adjacency map invariants"
        );
        let mut labels = HashSet::with_capacity(self.vertices.len());
        for v in &self.vertices {
            assert!(labels.insert(v.label()), "duplicate vertex: {}", v.label());
        }
        for v in &self.vertices {
            for (target, weight) in v.iter_targets() {
                assert!(weight > 0, "stored non-positive weight: {}", v);
                assert!(
                    labels.contains(target),
                    "edge target is not a vertex: {}->{}",
                    v.label(),
                    target
                );
            }
        }
    }
}

impl<L: Label> Default for AdjacencyGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> WeightedGraph<L> for AdjacencyGraph<L> {
    fn add_vertex(&mut self, label: L) -> bool {
        tracing::trace!(vertex = %label, "add vertex");
        if self.position(&label).is_some() {
            return false;
        }
        self.vertices.push(Vertex::new(label));
        self.checked();
        true
    }

    fn set_edge_weight(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        validate_weight(&source, &target, weight)?;
        tracing::trace!(%source, %target, weight, "set edge weight");

        let src = self.ensure_vertex(source);
        self.ensure_vertex(target.clone());
        let previous = self.vertices[src].set_edge(target, weight);

        self.checked();
        Ok(previous)
    }

    fn remove_vertex(&mut self, label: &L) -> bool {
        let Some(pos) = self.position(label) else {
            return false;
        };
        self.vertices.remove(pos);

        // 出边以源顶点为索引，入边只能逐个顶点清理
        let mut edges_removed = 0usize;
        for v in &mut self.vertices {
            if v.remove_edge(label) {
                edges_removed += 1;
            }
        }
        tracing::trace!(vertex = %label, incoming_removed = edges_removed, "remove vertex");

        self.checked();
        true
    }

    fn vertices(&self) -> HashSet<L> {
        self.vertices.iter().map(|v| v.label().clone()).collect()
    }

    fn sources(&self, target: &L) -> HashMap<L, Weight> {
        self.vertices
            .iter()
            .filter_map(|v| match v.weight_to(target) {
                0 => None,
                w => Some((v.label().clone(), w)),
            })
            .collect()
    }

    fn targets(&self, source: &L) -> HashMap<L, Weight> {
        self.vertex(source).map(Vertex::targets).unwrap_or_default()
    }

    fn contains_vertex(&self, label: &L) -> bool {
        self.position(label).is_some()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::out_degree).sum()
    }

    fn edges(&self) -> Vec<Edge<L>> {
        let mut edges: Vec<Edge<L>> = self
            .vertices
            .iter()
            .flat_map(|v| {
                v.iter_targets()
                    .filter_map(move |(t, w)| Edge::new(v.label().clone(), t.clone(), w).ok())
            })
            .collect();
        edges.sort();
        edges
    }

    fn weight(&self, source: &L, target: &L) -> Weight {
        self.vertex(source).map(|v| v.weight_to(target)).unwrap_or(0)
    }

    fn debug_dump(&self) -> String {
        render_dump(self.vertices(), self.edges())
    }
}

impl<L: Label> fmt::Display for AdjacencyGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_dump())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_graph() -> AdjacencyGraph<&'static str> {
        AdjacencyGraph::with_options(&GraphOptions::default().with_invariant_checks(true))
    }

    #[test]
    fn test_set_edge_creates_records() {
        let mut g = checked_graph();

        assert_eq!(g.set_edge_weight("A", "B", 3).unwrap(), 0);
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.vertex(&"A").unwrap().weight_to(&"B"), 3);
        assert_eq!(g.vertex(&"B").unwrap().out_degree(), 0);
    }

    #[test]
    fn test_remove_vertex_cleans_incoming() {
        let mut g = checked_graph();
        g.set_edge_weight("A", "C", 1).unwrap();
        g.set_edge_weight("B", "C", 2).unwrap();
        g.set_edge_weight("C", "A", 3).unwrap();

        assert!(g.remove_vertex(&"C"));
        assert!(g.targets(&"A").is_empty());
        assert!(g.targets(&"B").is_empty());
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn test_sources_scans_all_records() {
        let mut g = checked_graph();
        g.set_edge_weight("A", "Z", 1).unwrap();
        g.set_edge_weight("B", "Z", 2).unwrap();
        g.set_edge_weight("Z", "Z", 3).unwrap();

        let expected: HashMap<_, _> = [("A", 1), ("B", 2), ("Z", 3)].into_iter().collect();
        assert_eq!(g.sources(&"Z"), expected);
    }

    #[test]
    fn test_negative_weight_leaves_graph_untouched() {
        let mut g = checked_graph();

        assert!(g.set_edge_weight("X", "Y", -1).is_err());
        assert_eq!(g.vertex_count(), 0);
    }

    #[test]
    #[should_panic(expected = "edge target is not a vertex")]
    fn test_check_rep_detects_dangling_target() {
        let mut g = AdjacencyGraph::<&str>::new();
        let mut v = Vertex::new("A");
        v.set_edge("Z", 1);
        g.vertices.push(v);
        g.check_rep();
    }

    #[test]
    #[should_panic(expected = "duplicate vertex")]
    fn test_check_rep_detects_duplicate_vertex() {
        let mut g = AdjacencyGraph::<&str>::new();
        g.vertices.push(Vertex::new("A"));
        g.vertices.push(Vertex::new("A"));
        g.check_rep();
    }
}
