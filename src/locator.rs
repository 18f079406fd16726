// ABOUTME: Executable lookup on the search path
//
// Used to find tmux, script(1) and other helpers. Directories that cannot be
// read are skipped rather than failing the whole lookup.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use tracing::debug;

/// Find `name` in the directories listed in `PATH`
pub fn locate(name: &str) -> Option<PathBuf> {
    let search_path = std::env::var_os("PATH").unwrap_or_default();
    locate_in(name, &search_path)
}

/// Find `name` in an explicit search path (same syntax as `PATH`)
///
/// Returns the first candidate, in search order, that is a regular file
/// executable by the current user. An empty search path never matches.
pub fn locate_in(name: &str, search_path: &OsStr) -> Option<PathBuf> {
    if name.is_empty() || search_path.is_empty() {
        return None;
    }

    // Empty components would resolve against the process cwd
    let dirs: Vec<PathBuf> = std::env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .collect();
    if dirs.is_empty() {
        return None;
    }
    let paths: OsString = std::env::join_paths(&dirs).ok()?;

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
    match which::which_in(name, Some(paths), cwd) {
        Ok(found) => {
            debug!("Located {} at {}", name, found.display());
            Some(found)
        }
        Err(e) => {
            debug!("{} not found on search path: {}", name, e);
            None
        }
    }
}
