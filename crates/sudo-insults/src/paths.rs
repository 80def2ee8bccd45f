//! Resolving paths relative to the program's own directory.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{InsultsError, Result};

/// Directory holding the running executable, with symlinks resolved.
pub fn program_dir() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(|e| InsultsError::ProgramDir(e.to_string()))?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| InsultsError::ProgramDir(format!("{} has no parent", exe.display())))
}

/// Resolve `path` the way cache and output locations are resolved.
///
/// A leading `~` is replaced by the home directory. Absolute paths are kept,
/// relative ones are joined onto `root`.
pub fn resolve(path: impl AsRef<Path>, root: impl AsRef<Path>) -> PathBuf {
    let path = expand_home(path.as_ref());
    if path.is_absolute() {
        path
    } else {
        root.as_ref().join(path)
    }
}

fn expand_home(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}
