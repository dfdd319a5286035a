//! 图核心模块
//!
//! 定义可变有向带权图的统一接口，以及两种可互换的内部表示：
//! - [`EdgeListGraph`]：顶点集合 + 边记录列表
//! - [`AdjacencyGraph`]：每个顶点记录自己的出边映射
//!
//! 两种表示对外行为完全一致，调用方只依赖 [`WeightedGraph`]。

mod adjacency;
mod edge;
mod edge_list;
mod shared;
mod vertex;

pub use adjacency::AdjacencyGraph;
pub use edge::Edge;
pub use edge_list::EdgeListGraph;
pub use shared::SharedGraph;
pub use vertex::Vertex;

use crate::config::GraphOptions;
use crate::error::{Error, Result};
use crate::types::{Label, Representation, Weight};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt::Write;

/// 可变有向带权图
///
/// 表示不变式（每个公开操作前后都成立）：
/// - 每条边的两个端点都是图中的顶点
/// - 存储的权重恒大于 0
/// - 每个有序点对 (a, b) 至多一条边
/// - 顶点标签不重复
///
/// 所有查询返回独立副本，修改返回值不会影响图，反之亦然。
pub trait WeightedGraph<L: Label> {
    /// 添加顶点，已存在时返回 false 且不做任何修改
    fn add_vertex(&mut self, label: L) -> bool;

    /// 设置 source -> target 的边权重，返回该点对之前的权重（没有则为 0）
    ///
    /// 不存在的端点会先被隐式添加为顶点。权重为 0 表示删除该边，
    /// 权重为负返回 [`Error::NegativeWeight`]，且不修改图。
    fn set_edge_weight(&mut self, source: L, target: L, weight: Weight) -> Result<Weight>;

    /// 删除顶点及其所有入边、出边；顶点不存在时返回 false
    fn remove_vertex(&mut self, label: &L) -> bool;

    /// 顶点集合快照
    fn vertices(&self) -> HashSet<L>;

    /// 所有指向 target 的边：源顶点 -> 权重
    fn sources(&self, target: &L) -> HashMap<L, Weight>;

    /// 所有从 source 出发的边：目标顶点 -> 权重
    fn targets(&self, source: &L) -> HashMap<L, Weight>;

    /// 是否包含顶点
    fn contains_vertex(&self, label: &L) -> bool;

    /// 顶点数量
    fn vertex_count(&self) -> usize;

    /// 边数量
    fn edge_count(&self) -> usize;

    /// 所有边的快照，按 (源, 目标) 排序
    fn edges(&self) -> Vec<Edge<L>>;

    /// source -> target 的权重，没有边时为 0
    fn weight(&self, source: &L, target: &L) -> Weight {
        self.targets(source).get(target).copied().unwrap_or(0)
    }

    /// 调试输出，包含每个顶点以及每条形如 `a->b (w)` 的边
    fn debug_dump(&self) -> String {
        render_dump(self.vertices(), self.edges())
    }
}

/// 按配置选择内部表示的图
#[derive(Debug, Clone)]
pub enum AnyGraph<L: Label> {
    EdgeList(EdgeListGraph<L>),
    AdjacencyMap(AdjacencyGraph<L>),
}

impl<L: Label> AnyGraph<L> {
    /// 根据选项创建空图
    pub fn new(options: &GraphOptions) -> Self {
        match options.representation {
            Representation::EdgeList => AnyGraph::EdgeList(EdgeListGraph::with_options(options)),
            Representation::AdjacencyMap => {
                AnyGraph::AdjacencyMap(AdjacencyGraph::with_options(options))
            }
        }
    }

    /// 当前使用的内部表示
    pub fn representation(&self) -> Representation {
        match self {
            AnyGraph::EdgeList(_) => Representation::EdgeList,
            AnyGraph::AdjacencyMap(_) => Representation::AdjacencyMap,
        }
    }

    fn inner(&self) -> &dyn WeightedGraph<L> {
        match self {
            AnyGraph::EdgeList(g) => g,
            AnyGraph::AdjacencyMap(g) => g,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn WeightedGraph<L> {
        match self {
            AnyGraph::EdgeList(g) => g,
            AnyGraph::AdjacencyMap(g) => g,
        }
    }
}

impl<L: Label> WeightedGraph<L> for AnyGraph<L> {
    fn add_vertex(&mut self, label: L) -> bool {
        self.inner_mut().add_vertex(label)
    }

    fn set_edge_weight(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        self.inner_mut().set_edge_weight(source, target, weight)
    }

    fn remove_vertex(&mut self, label: &L) -> bool {
        self.inner_mut().remove_vertex(label)
    }

    fn vertices(&self) -> HashSet<L> {
        self.inner().vertices()
    }

    fn sources(&self, target: &L) -> HashMap<L, Weight> {
        self.inner().sources(target)
    }

    fn targets(&self, source: &L) -> HashMap<L, Weight> {
        self.inner().targets(source)
    }

    fn contains_vertex(&self, label: &L) -> bool {
        self.inner().contains_vertex(label)
    }

    fn vertex_count(&self) -> usize {
        self.inner().vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.inner().edge_count()
    }

    fn edges(&self) -> Vec<Edge<L>> {
        self.inner().edges()
    }

    fn weight(&self, source: &L, target: &L) -> Weight {
        self.inner().weight(source, target)
    }

    fn debug_dump(&self) -> String {
        self.inner().debug_dump()
    }
}

impl<L: Label> std::fmt::Display for AnyGraph<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.debug_dump())
    }
}

/// 校验 set_edge_weight 的权重参数，必须在任何修改之前调用
pub(crate) fn validate_weight<L: Label>(source: &L, target: &L, weight: Weight) -> Result<()> {
    if weight < 0 {
        tracing::warn!(%source, %target, weight, "rejected negative edge weight");
        return Err(Error::NegativeWeight {
            src: source.to_string(),
            dst: target.to_string(),
            weight,
        });
    }
    Ok(())
}

/// 两种表示共用的调试输出格式：`Vertices: [..], Edges: [..]`
pub(crate) fn render_dump<L: Label>(
    vertices: impl IntoIterator<Item = L>,
    edges: impl IntoIterator<Item = Edge<L>>,
) -> String {
    let vertices: BTreeSet<L> = vertices.into_iter().collect();
    let mut edges: Vec<Edge<L>> = edges.into_iter().collect();
    edges.sort();

    let mut out = String::from("Vertices: [");
    for (i, v) in vertices.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", v);
    }
    out.push_str("], Edges: [");
    for (i, e) in edges.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", e);
    }
    out.push(']');
    out
}
