/// Import specifier extracted from a single source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpecifier {
    /// The quoted path exactly as written in source
    pub raw_path: String,
    /// Which textual form produced the match
    pub kind: ImportKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// `import x from "./a"` / `import "./a"`
    Static,
    /// `import("./a")`
    Dynamic,
}

impl ImportSpecifier {
    pub fn new(raw_path: impl Into<String>, kind: ImportKind) -> Self {
        Self {
            raw_path: raw_path.into(),
            kind,
        }
    }

    /// Relative specifiers start with `.`; everything else names an
    /// external package and is never followed.
    pub fn is_relative(&self) -> bool {
        self.raw_path.starts_with('.')
    }
}
