//! JSON 导出

use super::Exporter;
use crate::error::Result;
use crate::graph::Graph;
use crate::types::{EdgeId, EdgeKind, VertexId};
use serde::Serialize;

/// 顶点快照
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexSnapshot {
    pub id: VertexId,
    pub balance: f64,
    pub group: i64,
}

/// 边快照
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeSnapshot {
    pub id: EdgeId,
    pub kind: EdgeKind,
    pub from: VertexId,
    pub to: VertexId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// 图快照
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSnapshot {
    pub vertices: Vec<VertexSnapshot>,
    pub edges: Vec<EdgeSnapshot>,
}

impl GraphSnapshot {
    pub fn from_graph(graph: &Graph) -> Self {
        let vertices = graph
            .vertices()
            .map(|v| VertexSnapshot {
                id: v.id().clone(),
                balance: v.balance(),
                group: v.group(),
            })
            .collect();

        let edges = graph
            .edges()
            .map(|e| {
                let (from, to) = e.vertices();
                EdgeSnapshot {
                    id: e.id(),
                    kind: e.kind(),
                    from: from.id().clone(),
                    to: to.id().clone(),
                    weight: e.weight(),
                }
            })
            .collect();

        Self { vertices, edges }
    }
}

/// JSON 导出器
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Exporter for JsonExporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn export(&self, graph: &Graph) -> Result<String> {
        let snapshot = GraphSnapshot::from_graph(graph);
        let json = if self.pretty {
            serde_json::to_string_pretty(&snapshot)?
        } else {
            serde_json::to_string(&snapshot)?
        };
        Ok(json)
    }
}
