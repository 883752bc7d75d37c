use std::path::Path;

/// Reads a whole file into memory, binary mode, no streaming.
///
/// Returns `None` when the file is absent or unreadable; the caller picks
/// the fallback.
pub async fn load(path: &Path) -> Option<Vec<u8>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Some(bytes),
        Err(_) => None,
    }
}
