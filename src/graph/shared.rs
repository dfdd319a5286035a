//! 外部同步的共享图句柄
//!
//! 图本身不做任何内部加锁；需要跨线程共享时由该句柄串行化所有访问。

use super::edge::Edge;
use super::WeightedGraph;
use crate::error::Result;
use crate::types::{Label, Weight};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::marker::PhantomData;
use std::sync::Arc;

/// 共享图：修改持有写锁，查询持有读锁
pub struct SharedGraph<L: Label, G: WeightedGraph<L>> {
    inner: Arc<RwLock<G>>,
    _label: PhantomData<fn() -> L>,
}

impl<L: Label, G: WeightedGraph<L>> SharedGraph<L, G> {
    pub fn new(graph: G) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
            _label: PhantomData,
        }
    }

    /// 在读锁下执行闭包
    pub fn with_read<R>(&self, f: impl FnOnce(&G) -> R) -> R {
        f(&self.inner.read())
    }

    /// 在写锁下执行闭包，多步修改整体原子
    pub fn with_write<R>(&self, f: impl FnOnce(&mut G) -> R) -> R {
        f(&mut self.inner.write())
    }

    pub fn add_vertex(&self, label: L) -> bool {
        self.inner.write().add_vertex(label)
    }

    pub fn set_edge_weight(&self, source: L, target: L, weight: Weight) -> Result<Weight> {
        self.inner.write().set_edge_weight(source, target, weight)
    }

    pub fn remove_vertex(&self, label: &L) -> bool {
        self.inner.write().remove_vertex(label)
    }

    pub fn vertices(&self) -> HashSet<L> {
        self.inner.read().vertices()
    }

    pub fn sources(&self, target: &L) -> HashMap<L, Weight> {
        self.inner.read().sources(target)
    }

    pub fn targets(&self, source: &L) -> HashMap<L, Weight> {
        self.inner.read().targets(source)
    }

    pub fn weight(&self, source: &L, target: &L) -> Weight {
        self.inner.read().weight(source, target)
    }

    pub fn edges(&self) -> Vec<Edge<L>> {
        self.inner.read().edges()
    }

    pub fn debug_dump(&self) -> String {
        self.inner.read().debug_dump()
    }

    /// 取回内部图；仍有其他句柄时返回自身
    pub fn try_unwrap(self) -> std::result::Result<G, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(lock) => Ok(lock.into_inner()),
            Err(inner) => Err(Self {
                inner,
                _label: PhantomData,
            }),
        }
    }
}

impl<L: Label, G: WeightedGraph<L>> Clone for SharedGraph<L, G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _label: PhantomData,
        }
    }
}

impl<L: Label, G: WeightedGraph<L> + Default> Default for SharedGraph<L, G> {
    fn default() -> Self {
        Self::new(G::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyGraph, EdgeListGraph};

    #[test]
    fn test_shared_graph_basic() {
        let shared: SharedGraph<&str, EdgeListGraph<&str>> =
            SharedGraph::new(EdgeListGraph::new());
        let other = shared.clone();

        assert_eq!(shared.set_edge_weight("A", "B", 2).unwrap(), 0);
        assert_eq!(other.weight(&"A", &"B"), 2);
        assert!(other.remove_vertex(&"B"));
        assert!(shared.targets(&"A").is_empty());
    }

    #[test]
    fn test_shared_graph_with_write_is_atomic_block() {
        let shared: SharedGraph<&str, AdjacencyGraph<&str>> = SharedGraph::default();

        let previous = shared.with_write(|g| {
            g.add_vertex("A");
            g.set_edge_weight("A", "A", 4)
        });
        assert_eq!(previous.unwrap(), 0);
        assert_eq!(shared.with_read(|g| g.edge_count()), 1);
    }

    #[test]
    fn test_try_unwrap() {
        let shared: SharedGraph<u32, EdgeListGraph<u32>> =
            SharedGraph::new(EdgeListGraph::new());
        let extra = shared.clone();

        let shared = shared.try_unwrap().unwrap_err();
        drop(extra);

        let graph = shared.try_unwrap().ok().unwrap();
        assert_eq!(graph.vertex_count(), 0);
    }
}
