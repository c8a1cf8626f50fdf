//! mixgraph 演示
//!
//! 构建一个混合图，克隆后分别用不同导出器输出

use mixgraph::{Graph, GraphvizConfig, GraphvizExporter, JsonExporter, TableExporter};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    println!("mixgraph 演示");
    println!("=============\n");

    // v1 -- v2 -> v3，v1 与 v3 之间两条平行边
    let mut graph = Graph::new();
    let v2 = graph.create_vertex(2)?.set_balance(-4.0).handle();
    let v3 = graph.create_vertex("three")?.set_group(1).handle();

    let mut v1 = graph.create_vertex(1)?.set_balance(4.0);
    v1.create_edge(v2)?;
    v1.create_weighted_edge_to(v3, 2.0)?;
    v1.create_weighted_edge_to(v3, 5.0)?;
    graph.vertex_mut_at(v2)?.create_edge_to(v3)?;

    println!(
        "图大小: {} 顶点, {} 边, 余额 {}, 权重 [{:?}, {:?}]\n",
        graph.number_of_vertices(),
        graph.number_of_edges(),
        graph.balance(),
        graph.weight_min(),
        graph.weight_max()
    );

    let v1 = graph.vertex(1)?;
    println!("顶点 1 的出边邻居:");
    for (id, neighbor) in v1.vertices_edge_to() {
        println!("  {} (度数 {})", id, neighbor.degree());
    }
    println!();

    println!("DOT 输出:\n{}", graph);

    let mut config = GraphvizConfig::default();
    config.graph_attributes.insert("rankdir".to_string(), "LR".to_string());
    println!("{}", GraphvizExporter::new(config).to_dot(&graph));

    let mut clone = graph.create_graph_clone();
    clone.set_exporter(Box::new(TableExporter));
    clone.create_vertex_auto();
    println!("克隆后新增顶点:\n{}", clone);

    let edgeless = graph.create_graph_clone_edgeless();
    let json = JsonExporter::new(true);
    println!("无边克隆:\n{}", mixgraph::Exporter::export(&json, &edgeless)?);

    Ok(())
}
