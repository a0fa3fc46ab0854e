use crate::graph::ir::{FileNode, ImportEdge, ImportGraph};
use petgraph::graph::NodeIndex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Builds an ImportGraph with node and edge deduplication.
pub struct GraphBuilder {
    graph: ImportGraph,
    node_map: HashMap<PathBuf, NodeIndex>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: ImportGraph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Get or create a node for the given file.
    pub fn ensure_node(&mut self, path: &Path) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(path) {
            return idx;
        }
        let idx = self.graph.add_node(FileNode {
            path: path.to_path_buf(),
        });
        self.node_map.insert(path.to_path_buf(), idx);
        idx
    }

    /// Record that `source` imports `target` through `specifier`.
    pub fn add_import(&mut self, source: &Path, target: &Path, specifier: &str) {
        let source_idx = self.ensure_node(source);
        let target_idx = self.ensure_node(target);

        if let Some(edge_idx) = self.graph.find_edge(source_idx, target_idx) {
            let edge = &mut self.graph[edge_idx];
            if !edge.specifiers.iter().any(|s| s == specifier) {
                edge.specifiers.push(specifier.to_string());
            }
        } else {
            self.graph.add_edge(
                source_idx,
                target_idx,
                ImportEdge {
                    specifiers: vec![specifier.to_string()],
                },
            );
        }
    }

    /// Consume the builder and return the built graph.
    pub fn build(self) -> ImportGraph {
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
