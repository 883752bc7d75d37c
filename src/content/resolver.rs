use std::path::{Path, PathBuf};

/// Maps a URL path onto the server root.
///
/// Each `/`-separated segment becomes one filesystem component, which also
/// performs the separator translation for the host platform. Empty segments
/// and `.` are skipped; `..` is refused outright so no request can name a
/// file outside the root. A refused path reads as "no such file" to callers.
pub fn resolve(root: &Path, url_path: &str) -> Option<PathBuf> {
    let mut resolved = root.to_path_buf();

    for segment in url_path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            _ => resolved.push(segment),
        }
    }

    Some(resolved)
}
