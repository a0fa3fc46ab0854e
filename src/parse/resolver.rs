use super::common::ImportSpecifier;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Resolve a relative specifier against the importing file's directory.
///
/// Returns `None` for bare (package) specifiers and for relative ones where
/// none of the probe candidates exist on disk.
pub fn resolve(spec: &ImportSpecifier, base_dir: &Path) -> Option<PathBuf> {
    if !spec.is_relative() {
        return None;
    }
    let full_path = normalize(&base_dir.join(&spec.raw_path));
    candidates(&full_path).into_iter().find(|c| is_module(c))
}

/// A file, or a directory with no `index.ts` / `index.js` to fall through to.
fn is_module(candidate: &Path) -> bool {
    if candidate.is_file() {
        return true;
    }
    candidate.is_dir()
        && !candidate.join("index.ts").exists()
        && !candidate.join("index.js").exists()
}

/// Probe order for a fully-joined specifier path:
/// literal, `.js` -> `.ts`, `+.ts`, `+.js`, `/index.ts`, `/index.js`.
pub fn candidates(full_path: &Path) -> Vec<PathBuf> {
    let mut out = Vec::with_capacity(6);
    out.push(full_path.to_path_buf());
    if let Some(stem) = full_path.to_str().and_then(|s| s.strip_suffix(".js")) {
        out.push(PathBuf::from(format!("{stem}.ts")));
    }
    out.push(append_suffix(full_path, ".ts"));
    out.push(append_suffix(full_path, ".js"));
    out.push(full_path.join("index.ts"));
    out.push(full_path.join("index.js"));
    out
}

fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut s = OsString::from(path.as_os_str());
    s.push(suffix);
    PathBuf::from(s)
}

/// Make `path` absolute against `cwd` and normalize it lexically.
pub fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&cwd.join(path))
    }
}

/// Lexical normalization: drops `.` components and folds `..` into the
/// preceding component. Symlinks are not consulted.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
