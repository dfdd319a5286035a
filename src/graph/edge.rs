//! 边定义
//!
//! 不可变的有向带权边记录：(源顶点, 目标顶点, 权重)

use crate::error::{Error, Result};
use crate::types::{Label, Weight};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边
///
/// 权重恒大于 0；一旦创建不可修改，改权重即替换整条记录。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(
    try_from = "EdgeRecord<L>",
    bound(deserialize = "L: Label + Deserialize<'de>")
)]
pub struct Edge<L> {
    /// 源顶点
    src: L,
    /// 目标顶点
    dst: L,
    /// 权重
    weight: Weight,
}

/// 反序列化中间形式，经 `Edge::new` 校验后才成为边
#[derive(Deserialize)]
struct EdgeRecord<L> {
    src: L,
    dst: L,
    weight: Weight,
}

impl<L: Label> TryFrom<EdgeRecord<L>> for Edge<L> {
    type Error = Error;

    fn try_from(record: EdgeRecord<L>) -> Result<Self> {
        Edge::new(record.src, record.dst, record.weight)
    }
}

impl<L: Label> Edge<L> {
    /// 创建新边，权重必须大于 0
    pub fn new(src: L, dst: L, weight: Weight) -> Result<Self> {
        if weight <= 0 {
            return Err(Error::NonPositiveEdgeWeight(weight));
        }
        Ok(Self { src, dst, weight })
    }

    /// 获取源顶点
    pub fn src(&self) -> &L {
        &self.src
    }

    /// 获取目标顶点
    pub fn dst(&self) -> &L {
        &self.dst
    }

    /// 获取权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 是否连接 (src, dst) 这一有序点对
    pub fn connects(&self, src: &L, dst: &L) -> bool {
        &self.src == src && &self.dst == dst
    }

    /// 是否以该顶点为端点（入边或出边）
    pub fn touches(&self, vertex: &L) -> bool {
        &self.src == vertex || &self.dst == vertex
    }

    pub fn is_self_loop(&self) -> bool {
        self.src == self.dst
    }
}

impl<L: fmt::Display> fmt::Display for Edge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} ({})", self.src, self.dst, self.weight)
    }
}
