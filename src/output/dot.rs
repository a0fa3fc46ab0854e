use crate::errors::Result;
use crate::graph::ir::ImportGraph;
use std::io::Write;

/// Write the import graph in Graphviz DOT format.
pub fn write_dot<W: Write>(writer: &mut W, graph: &ImportGraph) -> Result<()> {
    writeln!(writer, "digraph imports {{")?;
    writeln!(writer, "    rankdir=LR;")?;
    writeln!(
        writer,
        "    node [shape=box, style=filled, fillcolor=lightblue];"
    )?;
    writeln!(writer)?;

    for idx in graph.node_indices() {
        let path = graph[idx].path.display().to_string();
        let label = graph[idx]
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.clone());
        writeln!(
            writer,
            "    \"{}\" [label=\"{}\"];",
            escape(&path),
            escape(&label)
        )?;
    }
    writeln!(writer)?;

    for edge in graph.edge_indices() {
        let Some((source, target)) = graph.edge_endpoints(edge) else {
            continue;
        };
        let source_name = graph[source].path.display().to_string();
        let target_name = graph[target].path.display().to_string();
        let spec_count = graph[edge].specifiers.len();
        if spec_count > 1 {
            writeln!(
                writer,
                "    \"{}\" -> \"{}\" [label=\"{} specifiers\"];",
                escape(&source_name),
                escape(&target_name),
                spec_count
            )?;
        } else {
            writeln!(
                writer,
                "    \"{}\" -> \"{}\";",
                escape(&source_name),
                escape(&target_name)
            )?;
        }
    }

    writeln!(writer, "}}")?;
    Ok(())
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
