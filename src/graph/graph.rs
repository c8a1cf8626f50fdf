//! 图数据结构
//!
//! 图持有全部顶点和边：顶点按插入顺序存放，边通过顶点位置引用端点，
//! 顶点通过边 ID 引用关联边，视图类型只借用图本身。

use super::edge::{Edge, EdgeRef};
use super::vertex::{Vertex, VertexHandle, VertexMut, VertexRef};
use crate::error::{Error, Result};
use crate::export::{Exporter, GraphvizExporter};
use crate::types::{EdgeId, EdgeKind, GraphId, VertexId, VertexIndex};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace, warn};

/// 图
pub struct Graph {
    /// 图实例 ID
    id: GraphId,
    /// 顶点（位置即 VertexIndex）
    vertices: IndexMap<VertexId, Vertex>,
    /// 边
    edges: IndexMap<EdgeId, Edge>,
    /// 下一个边 ID
    next_edge_id: u64,
    /// 自动分配 ID 的下界，顶点不会被删除，所以只增不减
    next_auto_id: i64,
    /// 文本表示使用的导出器
    exporter: Box<dyn Exporter>,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::with_exporter(Box::new(GraphvizExporter::default()))
    }

    /// 使用指定导出器创建空图
    pub fn with_exporter(exporter: Box<dyn Exporter>) -> Self {
        Self {
            id: GraphId::next(),
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
            next_edge_id: 1,
            next_auto_id: 0,
            exporter,
        }
    }

    /// 获取图实例 ID
    pub fn id(&self) -> GraphId {
        self.id
    }

    // ==================== 顶点操作 ====================

    /// 使用指定 ID 创建顶点
    pub fn create_vertex(&mut self, id: impl Into<VertexId>) -> Result<VertexMut<'_>> {
        let id = id.into();
        if self.vertices.contains_key(&id) {
            return Err(Error::VertexAlreadyExists(id));
        }
        let index = self.insert_vertex(Vertex::new(id));
        Ok(VertexMut::new(self, index))
    }

    /// 使用自动分配的 ID 创建顶点（当前未被占用的最小非负整数）
    pub fn create_vertex_auto(&mut self) -> VertexMut<'_> {
        let id = self.next_free_id();
        let index = self.insert_vertex(Vertex::new(id));
        VertexMut::new(self, index)
    }

    /// 批量创建自动 ID 的顶点
    pub fn create_vertices(&mut self, count: usize) -> Vec<VertexHandle> {
        (0..count)
            .map(|_| self.create_vertex_auto().handle())
            .collect()
    }

    /// 把其他图中的顶点（ID 与属性，不含边）复制到本图
    ///
    /// 同一个图中已有该 ID 时失败，包括复制回原图的情况。
    pub fn create_vertex_clone(&mut self, vertex: &Vertex) -> Result<VertexMut<'_>> {
        if self.vertices.contains_key(vertex.id()) {
            return Err(Error::VertexAlreadyExists(vertex.id().clone()));
        }
        let index = self.insert_vertex(vertex.detached());
        Ok(VertexMut::new(self, index))
    }

    fn next_free_id(&mut self) -> VertexId {
        while self
            .vertices
            .contains_key(&VertexId::Int(self.next_auto_id))
        {
            self.next_auto_id += 1;
        }
        VertexId::Int(self.next_auto_id)
    }

    fn insert_vertex(&mut self, vertex: Vertex) -> VertexIndex {
        trace!(graph = %self.id, vertex = %vertex.id(), "create vertex");
        let (index, _) = self.vertices.insert_full(vertex.id().clone(), vertex);
        VertexIndex(index)
    }

    /// 是否存在顶点（整数 ID 与其字符串形式等价）
    pub fn has_vertex(&self, id: impl Into<VertexId>) -> bool {
        self.vertices.contains_key(&id.into())
    }

    /// 获取顶点
    pub fn vertex(&self, id: impl Into<VertexId>) -> Result<VertexRef<'_>> {
        let index = self.index_of(&id.into())?;
        Ok(self.vertex_at_index(index))
    }

    /// 获取顶点的可变句柄
    pub fn vertex_mut(&mut self, id: impl Into<VertexId>) -> Result<VertexMut<'_>> {
        let index = self.index_of(&id.into())?;
        Ok(VertexMut::new(self, index))
    }

    /// 获取顶点句柄
    pub fn handle(&self, id: impl Into<VertexId>) -> Result<VertexHandle> {
        let index = self.index_of(&id.into())?;
        Ok(VertexHandle::new(self.id, index))
    }

    /// 通过句柄获取顶点
    pub fn vertex_at(&self, handle: VertexHandle) -> Result<VertexRef<'_>> {
        self.check_handle(handle)?;
        Ok(self.vertex_at_index(handle.index()))
    }

    /// 通过句柄获取顶点的可变句柄
    pub fn vertex_mut_at(&mut self, handle: VertexHandle) -> Result<VertexMut<'_>> {
        self.check_handle(handle)?;
        Ok(VertexMut::new(self, handle.index()))
    }

    /// 所有顶点（插入顺序）
    pub fn vertices(&self) -> impl Iterator<Item = VertexRef<'_>> + '_ {
        self.vertices
            .values()
            .enumerate()
            .map(move |(i, v)| VertexRef::new(self, VertexIndex(i), v))
    }

    /// 获取顶点数量
    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub(crate) fn vertex_at_index(&self, index: VertexIndex) -> VertexRef<'_> {
        VertexRef::new(self, index, &self.vertices[index.0])
    }

    pub(crate) fn vertex_record_mut(&mut self, index: VertexIndex) -> &mut Vertex {
        &mut self.vertices[index.0]
    }

    /// 顶点关联表中的边 ID 总在本图的边表中
    pub(crate) fn edge_at_id(&self, id: EdgeId) -> EdgeRef<'_> {
        EdgeRef::new(self, &self.edges[&id])
    }

    fn index_of(&self, id: &VertexId) -> Result<VertexIndex> {
        self.vertices
            .get_index_of(id)
            .map(VertexIndex)
            .ok_or_else(|| Error::VertexNotFound(id.clone()))
    }

    fn check_handle(&self, handle: VertexHandle) -> Result<()> {
        if handle.graph_id() != self.id {
            return Err(Error::CrossGraphEdge {
                expected: self.id,
                actual: handle.graph_id(),
            });
        }
        Ok(())
    }

    // ==================== 边操作 ====================

    /// 在 `from` 与句柄指向的顶点之间创建边
    pub(crate) fn connect(
        &mut self,
        from: VertexIndex,
        to: VertexHandle,
        kind: EdgeKind,
        weight: Option<f64>,
    ) -> Result<EdgeId> {
        self.check_handle(to)?;
        Ok(self.insert_edge(kind, from, to.index(), weight))
    }

    fn insert_edge(
        &mut self,
        kind: EdgeKind,
        from: VertexIndex,
        to: VertexIndex,
        weight: Option<f64>,
    ) -> EdgeId {
        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;

        trace!(graph = %self.id, edge = %id, %kind, "create edge");

        self.edges.insert(id, Edge::new(id, kind, from, to, weight));
        self.vertices[from.0].attach_edge(id);
        if from != to {
            self.vertices[to.0].attach_edge(id);
        }
        id
    }

    /// 在本图中按端点 ID 复制其他图的边（方向与权重不变）
    pub fn create_edge_clone(&mut self, edge: EdgeRef<'_>) -> Result<EdgeId> {
        let from = self.index_of(edge.vertex_from().id())?;
        let to = self.index_of(edge.vertex_to().id())?;
        Ok(self.insert_edge(edge.kind(), from, to, edge.weight()))
    }

    /// 与 [`Graph::create_edge_clone`] 相同，但交换起点与终点
    pub fn create_edge_clone_inverted(&mut self, edge: EdgeRef<'_>) -> Result<EdgeId> {
        let (from, to) = edge.edge().inverted_endpoints();
        let from = self.index_of(edge.graph().vertex_at_index(from).id())?;
        let to = self.index_of(edge.graph().vertex_at_index(to).id())?;
        Ok(self.insert_edge(edge.kind(), from, to, edge.weight()))
    }

    /// 获取边
    pub fn edge(&self, id: EdgeId) -> Result<EdgeRef<'_>> {
        self.edges
            .get(&id)
            .map(|e| EdgeRef::new(self, e))
            .ok_or(Error::EdgeNotFound(id))
    }

    /// 所有边（创建顺序）
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_>> + '_ {
        self.edges.values().map(move |e| EdgeRef::new(self, e))
    }

    /// 边数量（平行边分别计数，每条边只计一次）
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// 没有无向边（空图也成立）
    pub fn is_directed(&self) -> bool {
        self.edges.values().all(|e| e.is_directed())
    }

    /// 同时包含有向边和无向边
    pub fn is_mixed(&self) -> bool {
        let directed = self.edges.values().any(|e| e.is_directed());
        let undirected = self.edges.values().any(|e| !e.is_directed());
        directed && undirected
    }

    /// 是否存在平行边
    pub fn has_edge_parallel(&self) -> bool {
        let mut by_pair: HashMap<(VertexIndex, VertexIndex), Vec<&Edge>> = HashMap::new();
        for edge in self.edges.values() {
            let key = if edge.from() <= edge.to() {
                (edge.from(), edge.to())
            } else {
                (edge.to(), edge.from())
            };
            by_pair.entry(key).or_default().push(edge);
        }

        by_pair.values().any(|group| {
            group.iter().enumerate().any(|(i, a)| {
                group
                    .iter()
                    .enumerate()
                    .any(|(j, b)| i != j && b.is_connection(a.from(), a.to()))
            })
        })
    }

    // ==================== 聚合值 ====================

    /// 所有顶点余额之和
    pub fn balance(&self) -> f64 {
        self.vertices.values().map(|v| v.balance()).sum()
    }

    /// 最小边权重（没有带权边时为 None）
    pub fn weight_min(&self) -> Option<f64> {
        self.weights().fold(None, |acc, w| Some(acc.map_or(w, |m: f64| m.min(w))))
    }

    /// 最大边权重（没有带权边时为 None）
    pub fn weight_max(&self) -> Option<f64> {
        self.weights().fold(None, |acc, w| Some(acc.map_or(w, |m: f64| m.max(w))))
    }

    /// 边权重之和（没有带权边时为 None）
    pub fn weight(&self) -> Option<f64> {
        self.weights().fold(None, |acc, w| Some(acc.unwrap_or(0.0) + w))
    }

    pub fn is_weighted(&self) -> bool {
        self.weights().next().is_some()
    }

    fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.edges.values().filter_map(|e| e.weight())
    }

    // ==================== 克隆 ====================

    /// 复制整个图：顶点（ID 与属性）和边（方向与权重），与原图不共享任何数据
    pub fn create_graph_clone(&self) -> Graph {
        let mut clone = self.create_graph_clone_edgeless();
        for edge in self.edges.values() {
            clone.insert_edge(edge.kind(), edge.from(), edge.to(), edge.weight());
        }

        debug!(
            source = %self.id,
            target = %clone.id,
            edges = clone.edges.len(),
            "graph cloned"
        );
        clone
    }

    /// 只复制顶点，不复制边
    pub fn create_graph_clone_edgeless(&self) -> Graph {
        let mut clone = Graph::new();
        for vertex in self.vertices.values() {
            clone.insert_vertex(vertex.detached());
        }
        clone.next_auto_id = self.next_auto_id;

        debug!(
            source = %self.id,
            target = %clone.id,
            vertices = clone.vertices.len(),
            "graph vertices cloned"
        );
        clone
    }

    // ==================== 导出 ====================

    /// 当前导出器
    pub fn exporter(&self) -> &dyn Exporter {
        self.exporter.as_ref()
    }

    /// 替换导出器
    pub fn set_exporter(&mut self, exporter: Box<dyn Exporter>) {
        self.exporter = exporter;
    }

    /// 使用当前导出器导出
    pub fn export(&self) -> Result<String> {
        debug!(graph = %self.id, exporter = self.exporter.name(), "export graph");
        self.exporter.export(self)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Graph {
    fn clone(&self) -> Self {
        self.create_graph_clone()
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("id", &self.id)
            .field("vertices", &self.vertices.len())
            .field("edges", &self.edges.len())
            .field("exporter", &self.exporter.name())
            .finish()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.export() {
            Ok(text) => f.write_str(&text),
            Err(e) => {
                warn!(graph = %self.id, error = %e, "export failed");
                write!(f, "<{} 导出失败: {}>", self.exporter.name(), e)
            }
        }
    }
}
