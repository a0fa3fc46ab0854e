use petgraph::graph::DiGraph;
use std::path::PathBuf;

/// Import graph of every file reached during a walk.
pub type ImportGraph = DiGraph<FileNode, ImportEdge>;

#[derive(Debug, Clone)]
pub struct FileNode {
    /// Absolute, lexically normalized path
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ImportEdge {
    /// Specifiers in the importing file that resolved to the target
    pub specifiers: Vec<String>,
}
