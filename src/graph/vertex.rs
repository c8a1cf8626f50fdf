//! 顶点定义
//!
//! 顶点数据、只读视图、可变句柄以及可跨借用传递的顶点句柄

use super::edge::EdgeRef;
use super::graph::Graph;
use crate::error::Result;
use crate::types::{EdgeId, EdgeKind, GraphId, VertexId, VertexIndex};
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::ops::Deref;

/// 顶点
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 余额
    balance: f64,
    /// 分组
    group: i64,
    /// 关联边（按创建顺序，自环只记录一次）
    edges: SmallVec<[EdgeId; 4]>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId) -> Self {
        Self {
            id,
            balance: 0.0,
            group: 0,
            edges: SmallVec::new(),
        }
    }

    /// 复制 ID 和属性，不复制边
    pub(crate) fn detached(&self) -> Self {
        Self {
            id: self.id.clone(),
            balance: self.balance,
            group: self.group,
            edges: SmallVec::new(),
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> &VertexId {
        &self.id
    }

    /// 获取余额
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// 获取分组
    pub fn group(&self) -> i64 {
        self.group
    }

    /// 获取关联边 ID
    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.edges
    }

    pub(crate) fn attach_edge(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }
}

/// 顶点句柄
///
/// 记录顶点所属的图和位置，不借用图，因此可以在持有 [`VertexMut`] 时传入。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexHandle {
    graph: GraphId,
    index: VertexIndex,
}

impl VertexHandle {
    pub(crate) fn new(graph: GraphId, index: VertexIndex) -> Self {
        Self { graph, index }
    }

    /// 所属图 ID
    pub fn graph_id(&self) -> GraphId {
        self.graph
    }

    /// 图内位置
    pub fn index(&self) -> VertexIndex {
        self.index
    }
}

/// 顶点的只读视图
#[derive(Debug, Clone, Copy)]
pub struct VertexRef<'g> {
    graph: &'g Graph,
    index: VertexIndex,
    vertex: &'g Vertex,
}

impl<'g> VertexRef<'g> {
    pub(crate) fn new(graph: &'g Graph, index: VertexIndex, vertex: &'g Vertex) -> Self {
        Self {
            graph,
            index,
            vertex,
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> &'g VertexId {
        &self.vertex.id
    }

    pub fn vertex(&self) -> &'g Vertex {
        self.vertex
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn graph_id(&self) -> GraphId {
        self.graph.id()
    }

    pub fn index(&self) -> VertexIndex {
        self.index
    }

    pub fn handle(&self) -> VertexHandle {
        VertexHandle::new(self.graph.id(), self.index)
    }

    /// 所有关联边（不区分方向，每条边一次）
    pub fn edges(&self) -> Vec<EdgeRef<'g>> {
        self.vertex
            .edges
            .iter()
            .map(|&id| self.graph.edge_at_id(id))
            .collect()
    }

    /// 可从本顶点出发的边：以本顶点为起点的有向边，以及全部无向边
    pub fn edges_out(&self) -> Vec<EdgeRef<'g>> {
        self.edges()
            .into_iter()
            .filter(|e| e.is_traversable_from(self.index))
            .collect()
    }

    /// 可到达本顶点的边：以本顶点为终点的有向边，以及全部无向边
    pub fn edges_in(&self) -> Vec<EdgeRef<'g>> {
        self.edges()
            .into_iter()
            .filter(|e| e.is_traversable_to(self.index))
            .collect()
    }

    /// 从本顶点到 `other` 的边
    pub fn edges_to(&self, other: &VertexRef<'_>) -> Vec<EdgeRef<'g>> {
        if other.graph_id() != self.graph_id() {
            return Vec::new();
        }
        self.edges()
            .into_iter()
            .filter(|e| e.is_connection(self.index, other.index))
            .collect()
    }

    /// 从 `other` 到本顶点的边
    pub fn edges_from(&self, other: &VertexRef<'_>) -> Vec<EdgeRef<'g>> {
        if other.graph_id() != self.graph_id() {
            return Vec::new();
        }
        self.edges()
            .into_iter()
            .filter(|e| e.is_connection(other.index, self.index))
            .collect()
    }

    pub fn has_edge_to(&self, other: &VertexRef<'_>) -> bool {
        !self.edges_to(other).is_empty()
    }

    pub fn has_edge_from(&self, other: &VertexRef<'_>) -> bool {
        !self.edges_from(other).is_empty()
    }

    /// 邻居 ID 到相连边的映射（不区分方向，平行边归入同一个邻居）
    pub fn vertices_edge(&self) -> IndexMap<&'g VertexId, Vec<EdgeRef<'g>>> {
        let mut neighbors: IndexMap<&'g VertexId, Vec<EdgeRef<'g>>> = IndexMap::new();
        for edge in self.edges() {
            let other = if edge.from() == self.index {
                edge.to()
            } else {
                edge.from()
            };
            let id = self.graph.vertex_at_index(other).id();
            neighbors.entry(id).or_default().push(edge);
        }
        neighbors
    }

    /// 沿出边可到达的邻居
    pub fn vertices_edge_to(&self) -> IndexMap<&'g VertexId, VertexRef<'g>> {
        self.edges_out()
            .iter()
            .filter_map(|e| e.edge().vertex_to_from(self.index))
            .map(|idx| {
                let v = self.graph.vertex_at_index(idx);
                (v.id(), v)
            })
            .collect()
    }

    /// 沿入边可到达本顶点的邻居
    pub fn vertices_edge_from(&self) -> IndexMap<&'g VertexId, VertexRef<'g>> {
        self.edges_in()
            .iter()
            .filter_map(|e| e.edge().vertex_from_to(self.index))
            .map(|idx| {
                let v = self.graph.vertex_at_index(idx);
                (v.id(), v)
            })
            .collect()
    }

    /// 度数
    pub fn degree(&self) -> usize {
        self.vertex.edges.len()
    }

    /// 入度
    pub fn degree_in(&self) -> usize {
        self.edges_in().len()
    }

    /// 出度
    pub fn degree_out(&self) -> usize {
        self.edges_out().len()
    }

    pub fn is_isolated(&self) -> bool {
        self.vertex.edges.is_empty()
    }

    /// 没有入边
    pub fn is_source(&self) -> bool {
        self.degree_in() == 0
    }

    /// 没有出边
    pub fn is_sink(&self) -> bool {
        self.degree_out() == 0
    }

    pub fn has_loop(&self) -> bool {
        self.edges().iter().any(|e| e.is_loop())
    }
}

impl Deref for VertexRef<'_> {
    type Target = Vertex;

    fn deref(&self) -> &Vertex {
        self.vertex
    }
}

/// 顶点的可变句柄
///
/// 属性设置方法按值返回自身，便于链式调用：
/// `graph.create_vertex(1)?.set_balance(10.0).set_group(4)`。
#[derive(Debug)]
pub struct VertexMut<'g> {
    graph: &'g mut Graph,
    index: VertexIndex,
}

impl<'g> VertexMut<'g> {
    pub(crate) fn new(graph: &'g mut Graph, index: VertexIndex) -> Self {
        Self { graph, index }
    }

    fn record(&self) -> &Vertex {
        self.graph.vertex_at_index(self.index).vertex()
    }

    fn record_mut(&mut self) -> &mut Vertex {
        self.graph.vertex_record_mut(self.index)
    }

    /// 获取顶点 ID
    pub fn id(&self) -> &VertexId {
        &self.record().id
    }

    pub fn balance(&self) -> f64 {
        self.record().balance
    }

    pub fn group(&self) -> i64 {
        self.record().group
    }

    pub fn index(&self) -> VertexIndex {
        self.index
    }

    pub fn handle(&self) -> VertexHandle {
        VertexHandle::new(self.graph.id(), self.index)
    }

    /// 只读视图
    pub fn view(&self) -> VertexRef<'_> {
        self.graph.vertex_at_index(self.index)
    }

    /// 设置余额
    pub fn set_balance(mut self, balance: f64) -> Self {
        self.record_mut().balance = balance;
        self
    }

    /// 设置分组
    pub fn set_group(mut self, group: i64) -> Self {
        self.record_mut().group = group;
        self
    }

    /// 创建从本顶点指向 `other` 的有向边
    pub fn create_edge_to(&mut self, other: VertexHandle) -> Result<EdgeId> {
        self.graph
            .connect(self.index, other, EdgeKind::Directed, None)
    }

    /// 创建本顶点与 `other` 之间的无向边
    pub fn create_edge(&mut self, other: VertexHandle) -> Result<EdgeId> {
        self.graph
            .connect(self.index, other, EdgeKind::Undirected, None)
    }

    /// 创建带权有向边
    pub fn create_weighted_edge_to(&mut self, other: VertexHandle, weight: f64) -> Result<EdgeId> {
        self.graph
            .connect(self.index, other, EdgeKind::Directed, Some(weight))
    }

    /// 创建带权无向边
    pub fn create_weighted_edge(&mut self, other: VertexHandle, weight: f64) -> Result<EdgeId> {
        self.graph
            .connect(self.index, other, EdgeKind::Undirected, Some(weight))
    }
}
