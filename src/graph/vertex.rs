//! 顶点定义
//!
//! 邻接表示中的顶点记录：顶点标签 + 出边映射（目标 -> 权重）

use crate::types::{Label, Weight};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

/// 顶点
#[derive(Debug, Clone)]
pub struct Vertex<L> {
    /// 顶点标签
    label: L,
    /// 出边：目标顶点 -> 权重（权重恒大于 0）
    targets: IndexMap<L, Weight>,
}

impl<L: Label> Vertex<L> {
    /// 创建没有出边的顶点
    pub fn new(label: L) -> Self {
        Self {
            label,
            targets: IndexMap::new(),
        }
    }

    /// 获取顶点标签
    pub fn label(&self) -> &L {
        &self.label
    }

    /// 到 target 的边权重，没有边时为 0
    pub fn weight_to(&self, target: &L) -> Weight {
        self.targets.get(target).copied().unwrap_or(0)
    }

    /// 设置到 target 的出边，返回旧权重（没有则为 0）
    ///
    /// 权重为 0 表示删除该边。调用方保证 weight >= 0。
    pub fn set_edge(&mut self, target: L, weight: Weight) -> Weight {
        debug_assert!(weight >= 0);
        let previous = if weight == 0 {
            self.targets.shift_remove(&target)
        } else {
            self.targets.insert(target, weight)
        };
        previous.unwrap_or(0)
    }

    /// 删除到 target 的出边，返回是否存在
    pub fn remove_edge(&mut self, target: &L) -> bool {
        self.targets.shift_remove(target).is_some()
    }

    /// 出边副本
    pub fn targets(&self) -> HashMap<L, Weight> {
        self.targets
            .iter()
            .map(|(t, &w)| (t.clone(), w))
            .collect()
    }

    /// 遍历出边（仅供图内部使用，不外泄引用）
    pub(crate) fn iter_targets(&self) -> impl Iterator<Item = (&L, Weight)> {
        self.targets.iter().map(|(t, &w)| (t, w))
    }

    /// 出度
    pub fn out_degree(&self) -> usize {
        self.targets.len()
    }
}

impl<L: fmt::Display> fmt::Display for Vertex<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{{", self.label)?;
        for (i, (target, weight)) in self.targets.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", target, weight)?;
        }
        f.write_str("}")
    }
}
