//! 边列表表示
//!
//! 顶点集合 + 扁平的边记录列表。查找都是对边列表的线性扫描，
//! 换取最简单直接的不变式。

use super::edge::Edge;
use super::{render_dump, validate_weight, WeightedGraph};
use crate::config::GraphOptions;
use crate::error::Result;
use crate::types::{Label, Weight};
use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// 基于边列表的有向带权图
#[derive(Debug, Clone)]
pub struct EdgeListGraph<L: Label> {
    /// 顶点集合（保持插入顺序）
    vertices: IndexSet<L>,
    /// 边记录，每个有序点对至多一条
    edges: Vec<Edge<L>>,
    /// 每次修改后检查表示不变式
    check_invariants: bool,
}

impl<L: Label> EdgeListGraph<L> {
    /// 创建空图（默认选项）
    pub fn new() -> Self {
        Self::with_options(&GraphOptions::default())
    }

    /// 按选项创建空图，只使用 `check_invariants`
    pub fn with_options(options: &GraphOptions) -> Self {
        let graph = Self {
            vertices: IndexSet::new(),
            edges: Vec::new(),
            check_invariants: options.check_invariants,
        };
        graph.checked();
        graph
    }

    /// 查找 (source, target) 对应的边记录位置
    fn find_edge(&self, source: &L, target: &L) -> Option<usize> {
        self.edges.iter().position(|e| e.connects(source, target))
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
            edges = self.edges.len(),
            "checking edge list invariants"
        );
        let mut pairs = HashSet::with_capacity(self.edges.len());
        for e in &self.edges {
            assert!(e.weight() > 0, "stored non-positive weight: {}", e);
            assert!(
                self.vertices.contains(e.src()),
                "edge source is not a vertex: {}",
                e
            );
            assert!(
                self.vertices.contains(e.dst()),
                "edge target is not a vertex: {}",
                e
            );
            assert!(
                pairs.insert((e.src(), e.dst())),
                "duplicate edge for pair: {}",
                e
            );
        }
    }
}

impl<L: Label> Default for EdgeListGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> WeightedGraph<L> for EdgeListGraph<L> {
    fn add_vertex(&mut self, label: L) -> bool {
        tracing::trace!(vertex = %label, "add vertex");
        let added = self.vertices.insert(label);
        self.checked();
        added
    }

    fn set_edge_weight(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        validate_weight(&source, &target, weight)?;
        tracing::trace!(%source, %target, weight, "set edge weight");

        self.vertices.insert(source.clone());
        self.vertices.insert(target.clone());

        let previous = match self.find_edge(&source, &target) {
            Some(pos) => self.edges.swap_remove(pos).weight(),
            None => 0,
        };
        if weight > 0 {
            self.edges.push(Edge::new(source, target, weight)?);
        }

        self.checked();
        Ok(previous)
    }

    fn remove_vertex(&mut self, label: &L) -> bool {
        if !self.vertices.shift_remove(label) {
            return false;
        }
        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(label));
        tracing::trace!(
            vertex = %label,
            edges_removed = before - self.edges.len(),
            "remove vertex"
        );

        self.checked();
        true
    }

    fn vertices(&self) -> HashSet<L> {
        self.vertices.iter().cloned().collect()
    }

    fn sources(&self, target: &L) -> HashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| e.dst() == target)
            .map(|e| (e.src().clone(), e.weight()))
            .collect()
    }

    fn targets(&self, source: &L) -> HashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| e.src() == source)
            .map(|e| (e.dst().clone(), e.weight()))
            .collect()
    }

    fn contains_vertex(&self, label: &L) -> bool {
        self.vertices.contains(label)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn edges(&self) -> Vec<Edge<L>> {
        let mut edges = self.edges.clone();
        edges.sort();
        edges
    }

    fn weight(&self, source: &L, target: &L) -> Weight {
        self.find_edge(source, target)
            .map(|pos| self.edges[pos].weight())
            .unwrap_or(0)
    }

    fn debug_dump(&self) -> String {
        render_dump(self.vertices.iter().cloned(), self.edges.iter().cloned())
    }
}

impl<L: Label> fmt::Display for EdgeListGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_dump())
    }
}
