use std::fs;
use std::path::{Path, PathBuf};

/// `(file relative to the crate root, 1-based line, line text)`
pub type Hit = (String, usize, String);

fn root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn sources(relative_dir: &str) -> Vec<(String, String)> {
    let mut pending = vec![root().join(relative_dir)];
    let mut files = Vec::new();

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir).unwrap_or_else(|e| panic!("read {}: {e}", dir.display())) {
            let path = entry.expect("dir entry").path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                let content = fs::read_to_string(&path)
                    .unwrap_or_else(|e| panic!("read {}: {e}", path.display()));
                files.push((display(&path), content));
            }
        }
    }

    files.sort();
    files
}

fn display(path: &Path) -> String {
    path.strip_prefix(root())
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn scan(relative_dir: &str, patterns: &[&str], skip_tests: bool) -> Vec<Hit> {
    let mut hits = Vec::new();
    for (file, content) in sources(relative_dir) {
        for (idx, line) in content.lines().enumerate() {
            if skip_tests && line.trim_start().starts_with("#[cfg(test)]") {
                break;
            }
            if patterns.iter().any(|p| line.contains(p)) {
                hits.push((file.clone(), idx + 1, line.to_string()));
            }
        }
    }
    hits
}

pub fn find_lines_containing(relative_dir: &str, patterns: &[&str]) -> Vec<Hit> {
    scan(relative_dir, patterns, false)
}

/// Same as [`find_lines_containing`], stopping at each file's `#[cfg(test)]`.
pub fn find_lines_containing_outside_tests(relative_dir: &str, patterns: &[&str]) -> Vec<Hit> {
    scan(relative_dir, patterns, true)
}

/// Lines in `mod.rs` files other than module declarations, re-exports,
/// comments and `cfg` attributes.
pub fn find_non_export_lines_in_mod_files(relative_dir: &str) -> Vec<Hit> {
    let mut violations = Vec::new();

    for (file, content) in sources(relative_dir) {
        if !file.ends_with("/mod.rs") {
            continue;
        }
        let mut in_use = false;
        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if in_use || line.starts_with("pub use ") {
                in_use = !line.ends_with(';');
                continue;
            }
            let allowed = line.is_empty()
                || line.starts_with("//")
                || line.starts_with("pub mod ")
                || line.starts_with("mod ")
                || line.starts_with("#[cfg");
            if !allowed {
                violations.push((file.clone(), idx + 1, raw.to_string()));
            }
        }
    }

    violations
}
