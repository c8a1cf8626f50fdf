//! GraphViz DOT 文本导出

use super::Exporter;
use crate::config::GraphvizConfig;
use crate::error::Result;
use crate::graph::{EdgeRef, Graph, VertexRef};
use std::fmt::Write;

/// DOT 文本导出器（图的默认导出器）
///
/// 没有有向边时输出 `graph`，否则输出 `digraph`，其中的无向边带 `dir="none"`。
#[derive(Debug, Clone, Default)]
pub struct GraphvizExporter {
    config: GraphvizConfig,
}

impl GraphvizExporter {
    pub fn new(config: GraphvizConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GraphvizConfig {
        &self.config
    }

    /// 生成 DOT 文本
    pub fn to_dot(&self, graph: &Graph) -> String {
        let directed = graph.edges().any(|e| e.is_directed());
        let (keyword, connector) = if directed {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        let mut out = String::new();
        let _ = writeln!(out, "{} {} {{", keyword, quote_id(&self.config.graph_name));

        if !self.config.graph_attributes.is_empty() {
            let attrs: Vec<String> = self
                .config
                .graph_attributes
                .iter()
                .map(|(k, v)| format!("{}={}", quote_id(k), quote(v)))
                .collect();
            let _ = writeln!(out, "  graph [{}];", attrs.join(", "));
        }

        for vertex in graph.vertices() {
            let attrs = self.vertex_attributes(&vertex);
            let _ = writeln!(out, "  {}{};", quote(&vertex.id().to_string()), attrs);
        }

        for edge in graph.edges() {
            let (from, to) = edge.vertices();
            let attrs = self.edge_attributes(&edge, directed);
            let _ = writeln!(
                out,
                "  {} {} {}{};",
                quote(&from.id().to_string()),
                connector,
                quote(&to.id().to_string()),
                attrs
            );
        }

        out.push_str("}\n");
        out
    }

    fn vertex_attributes(&self, vertex: &VertexRef<'_>) -> String {
        let mut attrs = Vec::new();
        if self.config.show_balance && vertex.balance() != 0.0 {
            let label = format!("{} ({:+})", vertex.id(), vertex.balance());
            attrs.push(format!("label={}", quote(&label)));
        }
        if vertex.group() != 0 {
            attrs.push(format!("group={}", vertex.group()));
        }
        bracket(attrs)
    }

    fn edge_attributes(&self, edge: &EdgeRef<'_>, directed_graph: bool) -> String {
        let mut attrs = Vec::new();
        if self.config.show_weight {
            if let Some(weight) = edge.weight() {
                attrs.push(format!("label={}", quote(&weight.to_string())));
            }
        }
        if directed_graph && !edge.is_directed() {
            attrs.push("dir=\"none\"".to_string());
        }
        bracket(attrs)
    }
}

impl Exporter for GraphvizExporter {
    fn name(&self) -> &'static str {
        "graphviz"
    }

    fn export(&self, graph: &Graph) -> Result<String> {
        Ok(self.to_dot(graph))
    }
}

fn bracket(attrs: Vec<String>) -> String {
    if attrs.is_empty() {
        String::new()
    } else {
        format!(" [{}]", attrs.join(", "))
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// DOT 关键字（不区分大小写）
const KEYWORDS: [&str; 6] = ["graph", "digraph", "node", "edge", "subgraph", "strict"];

/// 简单标识符不加引号，关键字除外
fn quote_id(s: &str) -> String {
    let plain = s
        .chars()
        .next()
        .map_or(false, |c| c.is_ascii_alphabetic() || c == '_')
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(s));
    if plain {
        s.to_string()
    } else {
        quote(s)
    }
}
