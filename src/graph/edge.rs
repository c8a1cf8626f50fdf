//! 边定义
//!
//! 有向边与无向边，创建后不可变

use super::graph::Graph;
use super::vertex::VertexRef;
use crate::types::{EdgeId, EdgeKind, VertexIndex};
use std::ops::Deref;

/// 边
///
/// 端点以所属图中的 [`VertexIndex`] 表示，边本身不持有顶点。
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// 边 ID
    id: EdgeId,
    /// 方向类型
    kind: EdgeKind,
    /// 起点
    from: VertexIndex,
    /// 终点
    to: VertexIndex,
    /// 权重
    weight: Option<f64>,
}

impl Edge {
    pub(crate) fn new(
        id: EdgeId,
        kind: EdgeKind,
        from: VertexIndex,
        to: VertexIndex,
        weight: Option<f64>,
    ) -> Self {
        Self {
            id,
            kind,
            from,
            to,
            weight,
        }
    }

    /// 获取边 ID
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// 获取方向类型
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == EdgeKind::Directed
    }

    /// 获取权重
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// 获取起点位置（无向边为创建时的调用方）
    pub fn from(&self) -> VertexIndex {
        self.from
    }

    /// 获取终点位置
    pub fn to(&self) -> VertexIndex {
        self.to
    }

    /// 是否为自环
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    /// 是否与给定顶点相连
    pub fn has_vertex(&self, vertex: VertexIndex) -> bool {
        self.from == vertex || self.to == vertex
    }

    /// 能否从 `start` 出发沿此边离开
    pub fn is_traversable_from(&self, start: VertexIndex) -> bool {
        match self.kind {
            EdgeKind::Directed => self.from == start,
            EdgeKind::Undirected => self.has_vertex(start),
        }
    }

    /// 能否沿此边到达 `end`
    pub fn is_traversable_to(&self, end: VertexIndex) -> bool {
        match self.kind {
            EdgeKind::Directed => self.to == end,
            EdgeKind::Undirected => self.has_vertex(end),
        }
    }

    /// 是否可以从 `start` 沿此边走到 `end`
    pub fn is_connection(&self, start: VertexIndex, end: VertexIndex) -> bool {
        match self.kind {
            EdgeKind::Directed => self.from == start && self.to == end,
            EdgeKind::Undirected => {
                (self.from == start && self.to == end) || (self.from == end && self.to == start)
            }
        }
    }

    /// 从 `start` 出发沿此边到达的顶点
    pub fn vertex_to_from(&self, start: VertexIndex) -> Option<VertexIndex> {
        if !self.is_traversable_from(start) {
            return None;
        }
        Some(if self.from == start { self.to } else { self.from })
    }

    /// 沿此边到达 `end` 时的出发顶点
    pub fn vertex_from_to(&self, end: VertexIndex) -> Option<VertexIndex> {
        if !self.is_traversable_to(end) {
            return None;
        }
        Some(if self.to == end { self.from } else { self.to })
    }

    /// 反向后的端点
    pub(crate) fn inverted_endpoints(&self) -> (VertexIndex, VertexIndex) {
        (self.to, self.from)
    }
}

/// 边的只读视图，可解析端点顶点
#[derive(Debug, Clone, Copy)]
pub struct EdgeRef<'g> {
    graph: &'g Graph,
    edge: &'g Edge,
}

impl<'g> EdgeRef<'g> {
    pub(crate) fn new(graph: &'g Graph, edge: &'g Edge) -> Self {
        Self { graph, edge }
    }

    /// 所属图
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn edge(&self) -> &'g Edge {
        self.edge
    }

    /// 起点顶点
    pub fn vertex_from(&self) -> VertexRef<'g> {
        self.graph.vertex_at_index(self.edge.from)
    }

    /// 终点顶点
    pub fn vertex_to(&self) -> VertexRef<'g> {
        self.graph.vertex_at_index(self.edge.to)
    }

    /// 两个端点（按创建顺序）
    pub fn vertices(&self) -> (VertexRef<'g>, VertexRef<'g>) {
        (self.vertex_from(), self.vertex_to())
    }

    /// 从 `start` 出发沿此边到达的顶点
    pub fn vertex_to_from(&self, start: &VertexRef<'_>) -> Option<VertexRef<'g>> {
        if !self.owns(start) {
            return None;
        }
        self.edge
            .vertex_to_from(start.index())
            .map(|idx| self.graph.vertex_at_index(idx))
    }

    /// 到达 `end` 时的出发顶点
    pub fn vertex_from_to(&self, end: &VertexRef<'_>) -> Option<VertexRef<'g>> {
        if !self.owns(end) {
            return None;
        }
        self.edge
            .vertex_from_to(end.index())
            .map(|idx| self.graph.vertex_at_index(idx))
    }

    fn owns(&self, vertex: &VertexRef<'_>) -> bool {
        vertex.graph_id() == self.graph.id()
    }
}

impl Deref for EdgeRef<'_> {
    type Target = Edge;

    fn deref(&self) -> &Edge {
        self.edge
    }
}
