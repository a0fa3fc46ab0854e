use crate::graph::builder::GraphBuilder;
use crate::graph::ir::ImportGraph;
use crate::parse::{resolver, script, ImportSpecifier};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Outcome of walking the import graph from one entry file.
#[derive(Debug)]
pub struct WalkReport {
    /// Absolute entry path
    pub entry: PathBuf,
    /// Resolved import files in pre-order discovery order, each listed once
    pub discovered: Vec<PathBuf>,
    pub total_lines: usize,
    pub files_visited: usize,
    /// Relative specifiers that matched no probe candidate
    pub unresolved_imports: usize,
    pub graph: ImportGraph,
}

/// A file whose imports are still being followed.
struct Frame {
    path: PathBuf,
    base_dir: PathBuf,
    specifiers: std::vec::IntoIter<ImportSpecifier>,
}

/// Depth-first traversal context.
///
/// Holds the visited set for one run; a path is marked visited before its
/// contents are read, so each physical file is counted at most once even
/// across cycles and diamonds.
pub struct Walker {
    visited: HashSet<PathBuf>,
    /// Resolved imports already written to `discovered`
    logged: HashSet<PathBuf>,
    discovered: Vec<PathBuf>,
    total_lines: usize,
    unresolved_imports: usize,
    builder: GraphBuilder,
}

impl Walker {
    pub fn new() -> Self {
        Self {
            visited: HashSet::new(),
            logged: HashSet::new(),
            discovered: Vec::new(),
            total_lines: 0,
            unresolved_imports: 0,
            builder: GraphBuilder::new(),
        }
    }

    /// Count the lines of `entry` plus every not-yet-visited file reachable
    /// from it through relative imports.
    ///
    /// `entry` should be absolute and normalized (see
    /// [`resolver::absolutize`]). Missing or already visited entries yield 0.
    pub fn walk(&mut self, entry: &Path) -> usize {
        let mut total = 0;
        let mut stack: Vec<Frame> = Vec::new();

        if let Some((lines, frame)) = self.enter(entry) {
            total += lines;
            stack.push(frame);
        }

        while let Some(frame) = stack.last_mut() {
            let Some(spec) = frame.specifiers.next() else {
                stack.pop();
                continue;
            };

            tracing::trace!(
                file = %frame.path.display(),
                specifier = %spec.raw_path,
                kind = ?spec.kind,
                "found import"
            );

            if !spec.is_relative() {
                continue;
            }

            let Some(target) = resolver::resolve(&spec, &frame.base_dir) else {
                tracing::debug!(
                    file = %frame.path.display(),
                    specifier = %spec.raw_path,
                    "unresolved import"
                );
                self.unresolved_imports += 1;
                continue;
            };

            self.builder.add_import(&frame.path, &target, &spec.raw_path);

            // The entry is visited without being logged, so a cycle back to
            // it still lists it once.
            if self.logged.insert(target.clone()) {
                self.discovered.push(target.clone());
            }
            if let Some((lines, next)) = self.enter(&target) {
                total += lines;
                stack.push(next);
            }
        }

        self.total_lines += total;
        total
    }

    /// Mark `path` visited and read it. Returns its line count and a frame
    /// over its specifiers, or `None` when it is missing or already seen.
    fn enter(&mut self, path: &Path) -> Option<(usize, Frame)> {
        if self.visited.contains(path) || !path.exists() {
            return None;
        }
        self.visited.insert(path.to_path_buf());
        self.builder.ensure_node(path);

        let (lines, specifiers) = match std::fs::read_to_string(path) {
            Ok(content) => (count_lines(&content), script::extract_specifiers(&content)),
            Err(e) => {
                tracing::debug!(
                    file = %path.display(),
                    error = %e,
                    "unreadable, counting 0 lines"
                );
                (0, Vec::new())
            }
        };

        tracing::debug!(
            file = %path.display(),
            lines,
            imports = specifiers.len(),
            "visited"
        );

        let base_dir = path.parent().unwrap_or(path).to_path_buf();
        Some((
            lines,
            Frame {
                path: path.to_path_buf(),
                base_dir,
                specifiers: specifiers.into_iter(),
            },
        ))
    }

    pub fn into_report(self, entry: PathBuf) -> WalkReport {
        WalkReport {
            entry,
            files_visited: self.visited.len(),
            discovered: self.discovered,
            total_lines: self.total_lines,
            unresolved_imports: self.unresolved_imports,
            graph: self.builder.build(),
        }
    }
}

impl Default for Walker {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk from `entry` with a fresh visited set.
pub fn count_reachable(entry: &Path) -> WalkReport {
    let mut walker = Walker::new();
    walker.walk(entry);
    walker.into_report(entry.to_path_buf())
}

/// Newline-split segment count: `k` newlines give `k + 1` lines, so an empty
/// file is one line.
pub fn count_lines(content: &str) -> usize {
    content.matches('\n').count() + 1
}
